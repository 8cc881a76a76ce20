//! The traversal driver and table population engine.
//!
//! [`TableWriter`] is the top of this crate: one instance per emission run,
//! fed one [`Module`], discarded afterwards. It owns every row index and
//! performs the two phases that turn the symbol graph into table rows:
//!
//! 1. **Indexing** ([`TableWriter::index_module`]) - a single-pass traversal
//!    of the type graph that assigns every definition its permanent row. The
//!    registration order is load-bearing, not stylistic: all children of an
//!    owner are registered immediately after the owner and before any later
//!    owner, which is what makes each owner's rows one contiguous block and
//!    what the sparse ownership tables rely on.
//! 2. **Population** ([`TableWriter::event_map_rows`],
//!    [`TableWriter::property_map_rows`], [`TableWriter::method_impl_rows`]) -
//!    reads the finished indices and emits the auxiliary tables, applying
//!    the first-owner compression rule: one map row per owner with at least
//!    one qualifying member, consumers recover the range by scanning to the
//!    next map row.
//!
//! Reference registration (`get_or_add_*`) can interleave with either phase;
//! reference rows only ever append and are never renumbered.
//!
//! # Failure model
//!
//! Any error from this module means the emission run is unsalvageable:
//! duplicate registrations and missing rows are front-end or driver defects,
//! and signature-encoding failures come from the upstream blob service.
//! Nothing is retried and no partial table set is usable.
//!
//! # Examples
//!
//! ```rust
//! use cilemit::metadata::model::*;
//! use cilemit::metadata::writer::TableWriter;
//! use cilemit::Result;
//! use uguid::guid;
//!
//! struct NullEncoder;
//!
//! impl SignatureEncoder for NullEncoder {
//!     fn member_signature(&self, _: &Module, m: &MemberRef) -> Result<Vec<u8>> {
//!         Ok(vec![m.signature.0 as u8])
//!     }
//!     fn method_instantiation(&self, _: &Module, s: &MethodSpec) -> Result<Vec<u8>> {
//!         Ok(vec![s.instantiation.0 as u8])
//!     }
//!     fn type_signature(&self, _: &Module, s: &TypeSpec) -> Result<Vec<u8>> {
//!         Ok(vec![s.signature.0 as u8])
//!     }
//! }
//!
//! let mut module = Module::new("app.dll", guid!("01020304-0506-0708-090a-0b0c0d0e0f10"));
//! let ty = module.define_type(TypeDef::new("App", "Program", TypeAttributes::PUBLIC));
//! module.add_method(ty, MethodDef::new("Main", MethodAttributes::STATIC));
//!
//! let encoder = NullEncoder;
//! let mut writer = TableWriter::new(&module, &encoder);
//! writer.index_module()?;
//! assert_eq!(writer.type_defs().len(), 1);
//! assert_eq!(writer.owned_method_range(ty)?.len(), 1);
//! # Ok::<(), cilemit::Error>(())
//! ```

use std::collections::HashMap;

use crate::metadata::index::{DefinitionIndex, ReferenceIndex, StructuralIndex};
use crate::metadata::model::{
    AssemblyRef, EventId, FieldId, GenericMethod, GenericParamId, MemberRefId, MemberRefParent,
    MethodHandle, MethodId, MethodImplOverride, MethodSpecId, Module, ParamId, PropertyId,
    SignatureEncoder, TypeDefId, TypeRef, TypeSpecId,
};
use crate::metadata::rid::{OwnershipRange, RowId};
use crate::metadata::tables::{
    EventMapRow, MethodDefOrRef, MethodImplRow, PropertyMapRow, TableId,
};
use crate::{Error, Result};

mod keys;

pub use keys::{GenericMethodKey, MemberRefKey, MemberRefParentKey, MethodSpecKey};

/// The owner of a block of `GenericParam` rows.
///
/// Type-owned and method-owned generic parameters share one table and
/// interleave in registration order, so range lookups name the owner
/// explicitly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GenericParamOwner {
    /// Generic parameters declared by a type.
    Type(TypeDefId),
    /// Generic parameters declared by a method.
    Method(MethodId),
}

/// Assembles the metadata tables for one module.
///
/// See the [module documentation](self) for the two-phase lifecycle. All
/// methods that can observe an inconsistent table set return [`Result`];
/// the first error aborts the run.
pub struct TableWriter<'m> {
    module: &'m Module,
    encoder: &'m dyn SignatureEncoder,

    type_defs: DefinitionIndex<TypeDefId>,
    event_defs: DefinitionIndex<EventId>,
    field_defs: DefinitionIndex<FieldId>,
    method_defs: DefinitionIndex<MethodId>,
    property_defs: DefinitionIndex<PropertyId>,
    param_defs: DefinitionIndex<ParamId>,
    generic_params: DefinitionIndex<GenericParamId>,

    field_list: HashMap<TypeDefId, RowId>,
    method_list: HashMap<TypeDefId, RowId>,
    param_list: HashMap<MethodId, RowId>,
    generic_param_ranges: HashMap<GenericParamOwner, OwnershipRange>,

    assembly_refs: ReferenceIndex<AssemblyRef>,
    module_refs: ReferenceIndex<String>,
    type_refs: ReferenceIndex<TypeRef>,
    standalone_sigs: ReferenceIndex<Vec<u8>>,
    member_refs: StructuralIndex<MemberRefId, MemberRefKey>,
    method_specs: StructuralIndex<MethodSpecId, MethodSpecKey>,
    type_specs: StructuralIndex<TypeSpecId, Vec<u8>>,

    method_impls: Vec<(TypeDefId, MethodImplOverride)>,
}

impl<'m> TableWriter<'m> {
    /// Creates a writer for `module`, with signature encoding delegated to
    /// `encoder`.
    ///
    /// Index capacities are seeded from the module's method-count hint. The
    /// ratios are rough averages over real assemblies; they only avoid early
    /// rehashing and carry no correctness weight.
    #[must_use]
    pub fn new(module: &'m Module, encoder: &'m dyn SignatureEncoder) -> Self {
        let num_methods = module.hint_method_count();
        let num_type_defs_guess = num_methods / 6;
        let num_field_defs_guess = num_type_defs_guess * 4;
        let num_property_defs_guess = num_methods / 4;

        TableWriter {
            module,
            encoder,
            type_defs: DefinitionIndex::with_capacity(TableId::TypeDef, num_type_defs_guess),
            event_defs: DefinitionIndex::new(TableId::Event),
            field_defs: DefinitionIndex::with_capacity(TableId::Field, num_field_defs_guess),
            method_defs: DefinitionIndex::with_capacity(TableId::MethodDef, num_methods),
            property_defs: DefinitionIndex::with_capacity(
                TableId::Property,
                num_property_defs_guess,
            ),
            param_defs: DefinitionIndex::with_capacity(TableId::Param, num_methods),
            generic_params: DefinitionIndex::new(TableId::GenericParam),
            field_list: HashMap::with_capacity(num_type_defs_guess),
            method_list: HashMap::with_capacity(num_type_defs_guess),
            param_list: HashMap::with_capacity(num_methods),
            generic_param_ranges: HashMap::new(),
            assembly_refs: ReferenceIndex::new(TableId::AssemblyRef),
            module_refs: ReferenceIndex::new(TableId::ModuleRef),
            type_refs: ReferenceIndex::new(TableId::TypeRef),
            standalone_sigs: ReferenceIndex::new(TableId::StandAloneSig),
            member_refs: StructuralIndex::new(TableId::MemberRef),
            method_specs: StructuralIndex::new(TableId::MethodSpec),
            type_specs: StructuralIndex::new(TableId::TypeSpec),
            method_impls: Vec::new(),
        }
    }

    /// The module this writer indexes.
    #[must_use]
    pub fn module(&self) -> &'m Module {
        self.module
    }

    /// Visits every type reachable from the module's top-level type list and
    /// assigns rows to all definitions.
    ///
    /// Single-pass and non-reentrant; nested types are visited after their
    /// declaring type completes, so each type's member registration is never
    /// interleaved with another type's.
    ///
    /// # Errors
    /// Returns [`crate::Error::DuplicateDefinition`] if the front-end hands
    /// over an aliased definition (or the driver is invoked twice). The run
    /// must be abandoned; partial output cannot be repaired.
    pub fn index_module(&mut self) -> Result<()> {
        for &ty in self.module.top_level_types() {
            self.visit_type(ty)?;
        }
        Ok(())
    }

    fn visit_type(&mut self, id: TypeDefId) -> Result<()> {
        let module = self.module;
        let ty = module.type_def(id);

        self.type_defs.add(id)?;

        let generic_start = self.generic_params.next_row_id();
        for &gp in &ty.generic_params {
            self.generic_params.add(gp)?;
        }
        self.generic_param_ranges.insert(
            GenericParamOwner::Type(id),
            OwnershipRange::new(generic_start, self.generic_params.next_row_id()),
        );

        for &ov in &ty.overrides {
            self.method_impls.push((id, ov));
        }

        self.field_list.insert(id, self.field_defs.next_row_id());
        for &field in &ty.fields {
            self.field_defs.add(field)?;
        }

        self.method_list.insert(id, self.method_defs.next_row_id());
        for &method in &ty.methods {
            self.visit_method(method)?;
            self.method_defs.add(method)?;
        }

        for &event in &ty.events {
            self.event_defs.add(event)?;
        }
        for &property in &ty.properties {
            self.property_defs.add(property)?;
        }

        for &nested in &ty.nested_types {
            self.visit_type(nested)?;
        }
        Ok(())
    }

    fn visit_method(&mut self, id: MethodId) -> Result<()> {
        let method = self.module.method_def(id);

        self.param_list.insert(id, self.param_defs.next_row_id());
        for &param in &method.params {
            self.param_defs.add(param)?;
        }

        let generic_start = self.generic_params.next_row_id();
        for &gp in &method.generic_params {
            self.generic_params.add(gp)?;
        }
        self.generic_param_ranges.insert(
            GenericParamOwner::Method(id),
            OwnershipRange::new(generic_start, self.generic_params.next_row_id()),
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Definition read paths
    // ------------------------------------------------------------------

    /// The `TypeDef` row of `id`, if registered.
    #[must_use]
    pub fn try_type_def_row(&self, id: TypeDefId) -> Option<RowId> {
        self.type_defs.try_row_of(id)
    }

    /// The `TypeDef` row of `id`.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] for an unregistered type.
    pub fn type_def_row(&self, id: TypeDefId) -> Result<RowId> {
        self.type_defs.row_of(id)
    }

    /// The type occupying a `TypeDef` row.
    #[must_use]
    pub fn type_def_at(&self, rid: RowId) -> Option<TypeDefId> {
        self.type_defs.definition_at(rid)
    }

    /// The `MethodDef` row of `id`, if registered.
    #[must_use]
    pub fn try_method_def_row(&self, id: MethodId) -> Option<RowId> {
        self.method_defs.try_row_of(id)
    }

    /// The `MethodDef` row of `id`.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] for an unregistered method.
    pub fn method_def_row(&self, id: MethodId) -> Result<RowId> {
        self.method_defs.row_of(id)
    }

    /// The method occupying a `MethodDef` row.
    #[must_use]
    pub fn method_def_at(&self, rid: RowId) -> Option<MethodId> {
        self.method_defs.definition_at(rid)
    }

    /// The `Field` row of `id`.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] for an unregistered field.
    pub fn field_def_row(&self, id: FieldId) -> Result<RowId> {
        self.field_defs.row_of(id)
    }

    /// The `Param` row of `id`.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] for an unregistered parameter.
    pub fn param_def_row(&self, id: ParamId) -> Result<RowId> {
        self.param_defs.row_of(id)
    }

    /// The `Event` row of `id`.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] for an unregistered event.
    pub fn event_def_row(&self, id: EventId) -> Result<RowId> {
        self.event_defs.row_of(id)
    }

    /// The `Property` row of `id`.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] for an unregistered property.
    pub fn property_def_row(&self, id: PropertyId) -> Result<RowId> {
        self.property_defs.row_of(id)
    }

    /// The `GenericParam` row of `id`.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] for an unregistered generic
    /// parameter.
    pub fn generic_param_row(&self, id: GenericParamId) -> Result<RowId> {
        self.generic_params.row_of(id)
    }

    /// `TypeDef` table rows, in row order.
    #[must_use]
    pub fn type_defs(&self) -> &[TypeDefId] {
        self.type_defs.rows()
    }

    /// `Field` table rows, in row order.
    #[must_use]
    pub fn field_defs(&self) -> &[FieldId] {
        self.field_defs.rows()
    }

    /// `MethodDef` table rows, in row order.
    #[must_use]
    pub fn method_defs(&self) -> &[MethodId] {
        self.method_defs.rows()
    }

    /// `Param` table rows, in row order.
    #[must_use]
    pub fn param_defs(&self) -> &[ParamId] {
        self.param_defs.rows()
    }

    /// `Event` table rows, in row order.
    #[must_use]
    pub fn event_defs(&self) -> &[EventId] {
        self.event_defs.rows()
    }

    /// `Property` table rows, in row order.
    #[must_use]
    pub fn property_defs(&self) -> &[PropertyId] {
        self.property_defs.rows()
    }

    /// `GenericParam` table rows, in row order.
    #[must_use]
    pub fn generic_param_defs(&self) -> &[GenericParamId] {
        self.generic_params.rows()
    }

    // ------------------------------------------------------------------
    // Ownership ranges
    // ------------------------------------------------------------------

    /// The contiguous `Field` rows owned by `ty`.
    ///
    /// The end bound is the next type's field-list start, or one past the
    /// table's last row for the final type.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] if `ty` was never indexed.
    pub fn owned_field_range(&self, ty: TypeDefId) -> Result<OwnershipRange> {
        self.owned_member_range(ty, &self.field_list, &self.field_defs)
    }

    /// The contiguous `MethodDef` rows owned by `ty`.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] if `ty` was never indexed.
    pub fn owned_method_range(&self, ty: TypeDefId) -> Result<OwnershipRange> {
        self.owned_member_range(ty, &self.method_list, &self.method_defs)
    }

    fn owned_member_range<T: Copy + Eq + std::hash::Hash>(
        &self,
        ty: TypeDefId,
        list: &HashMap<TypeDefId, RowId>,
        defs: &DefinitionIndex<T>,
    ) -> Result<OwnershipRange> {
        let row = self.type_defs.row_of(ty)?;
        let start = *list.get(&ty).ok_or(Error::RowNotFound {
            table: defs.table(),
        })?;
        let end = match self.type_defs.definition_at(row.next()) {
            Some(next_ty) => *list.get(&next_ty).ok_or(Error::RowNotFound {
                table: defs.table(),
            })?,
            None => defs.next_row_id(),
        };
        Ok(OwnershipRange::new(start, end))
    }

    /// The contiguous `Param` rows owned by `method`.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] if `method` was never indexed.
    pub fn owned_parameter_range(&self, method: MethodId) -> Result<OwnershipRange> {
        let row = self.method_defs.row_of(method)?;
        let start = *self.param_list.get(&method).ok_or(Error::RowNotFound {
            table: TableId::Param,
        })?;
        let end = match self.method_defs.definition_at(row.next()) {
            Some(next) => *self.param_list.get(&next).ok_or(Error::RowNotFound {
                table: TableId::Param,
            })?,
            None => self.param_defs.next_row_id(),
        };
        Ok(OwnershipRange::new(start, end))
    }

    /// The contiguous `GenericParam` rows owned by a type or a method.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] if the owner was never indexed.
    pub fn owned_generic_parameter_range(
        &self,
        owner: GenericParamOwner,
    ) -> Result<OwnershipRange> {
        self.generic_param_ranges
            .get(&owner)
            .copied()
            .ok_or(Error::RowNotFound {
                table: TableId::GenericParam,
            })
    }

    // ------------------------------------------------------------------
    // Reference registration and read paths
    // ------------------------------------------------------------------

    /// Returns the `AssemblyRef` row for `reference`, registering it on
    /// first sight. Equal assembly identities share one row.
    pub fn get_or_add_assembly_ref(&mut self, reference: AssemblyRef) -> RowId {
        self.assembly_refs.get_or_add(reference)
    }

    /// `AssemblyRef` table rows, in row order.
    #[must_use]
    pub fn assembly_refs(&self) -> &[AssemblyRef] {
        self.assembly_refs.rows()
    }

    /// Returns the `ModuleRef` row for the module named `name`, registering
    /// it on first sight.
    pub fn get_or_add_module_ref(&mut self, name: String) -> RowId {
        self.module_refs.get_or_add(name)
    }

    /// `ModuleRef` table rows, in row order.
    #[must_use]
    pub fn module_refs(&self) -> &[String] {
        self.module_refs.rows()
    }

    /// Returns the `TypeRef` row for `reference`, registering it on first
    /// sight. Equal scope/namespace/name triples share one row.
    pub fn get_or_add_type_ref(&mut self, reference: TypeRef) -> RowId {
        self.type_refs.get_or_add(reference)
    }

    /// Looks up a `TypeRef` row without registering.
    #[must_use]
    pub fn try_type_ref_row(&self, reference: &TypeRef) -> Option<RowId> {
        self.type_refs.try_row_of(reference)
    }

    /// `TypeRef` table rows, in row order.
    #[must_use]
    pub fn type_refs(&self) -> &[TypeRef] {
        self.type_refs.rows()
    }

    /// Returns the `StandAloneSig` row for an encoded signature blob,
    /// registering it on first sight. Byte-equal blobs share one row.
    pub fn get_or_add_standalone_signature(&mut self, signature: Vec<u8>) -> RowId {
        self.standalone_sigs.get_or_add(signature)
    }

    /// `StandAloneSig` table rows (the deduplicated blobs), in row order.
    #[must_use]
    pub fn standalone_signatures(&self) -> &[Vec<u8>] {
        self.standalone_sigs.rows()
    }

    /// Returns the `TypeSpec` row for `id`, registering it on first sight.
    ///
    /// Distinct spec objects whose encoded signatures are byte-equal share
    /// one row.
    ///
    /// # Errors
    /// Propagates signature-encoding failures from the upstream service.
    pub fn get_or_add_type_spec(&mut self, id: TypeSpecId) -> Result<RowId> {
        let module = self.module;
        let encoder = self.encoder;
        self.type_specs
            .get_or_add(id, || encoder.type_signature(module, module.type_spec(id)))
    }

    /// `TypeSpec` table rows, in row order. One representative object per
    /// emitted row.
    #[must_use]
    pub fn type_specs(&self) -> &[TypeSpecId] {
        self.type_specs.rows()
    }

    /// Returns the `MemberRef` row for `id`, registering it on first sight.
    ///
    /// Identity lookup first; on a miss the structural key (resolved parent,
    /// name, encoded signature) is built and distinct objects denoting the
    /// same member collapse to one row. A type-spec parent is registered as
    /// a side effect, since the key uses its canonical row.
    ///
    /// # Errors
    /// Propagates signature-encoding failures from the upstream service.
    pub fn get_or_add_member_ref(&mut self, id: MemberRefId) -> Result<RowId> {
        if let Some(rid) = self.member_refs.try_row_of(id) {
            return Ok(rid);
        }
        let key = self.member_ref_key(id)?;
        Ok(self.member_refs.add_with_key(id, key))
    }

    fn member_ref_key(&mut self, id: MemberRefId) -> Result<MemberRefKey> {
        let module = self.module;
        let member = module.member_ref(id);
        let parent = match &member.parent {
            MemberRefParent::TypeDef(ty) => MemberRefParentKey::TypeDef(*ty),
            MemberRefParent::TypeRef(ty) => MemberRefParentKey::TypeRef(ty.clone()),
            MemberRefParent::TypeSpec(spec) => {
                MemberRefParentKey::TypeSpec(self.get_or_add_type_spec(*spec)?)
            }
        };
        Ok(MemberRefKey {
            parent,
            name: member.name.clone(),
            signature: self.encoder.member_signature(module, member)?,
        })
    }

    /// `MemberRef` table rows, in row order. One representative object per
    /// emitted row.
    #[must_use]
    pub fn member_refs(&self) -> &[MemberRefId] {
        self.member_refs.rows()
    }

    /// Returns the `MethodSpec` row for `id`, registering it on first sight.
    ///
    /// The structural key pairs the instantiated method (a method-def id or
    /// a canonical member-ref row) with the encoded instantiation; a
    /// member-ref method is registered as a side effect.
    ///
    /// # Errors
    /// Propagates signature-encoding failures from the upstream service.
    pub fn get_or_add_method_spec(&mut self, id: MethodSpecId) -> Result<RowId> {
        if let Some(rid) = self.method_specs.try_row_of(id) {
            return Ok(rid);
        }
        let module = self.module;
        let spec = module.method_spec(id);
        let method = match spec.method {
            GenericMethod::Def(method) => GenericMethodKey::Def(method),
            GenericMethod::Ref(member) => GenericMethodKey::Ref(self.get_or_add_member_ref(member)?),
        };
        let key = MethodSpecKey {
            method,
            instantiation: self.encoder.method_instantiation(module, spec)?,
        };
        Ok(self.method_specs.add_with_key(id, key))
    }

    /// `MethodSpec` table rows, in row order. One representative object per
    /// emitted row.
    #[must_use]
    pub fn method_specs(&self) -> &[MethodSpecId] {
        self.method_specs.rows()
    }

    // ------------------------------------------------------------------
    // Sparse and auxiliary table population
    // ------------------------------------------------------------------

    /// Builds the `EventMap` table.
    ///
    /// One row per type with at least one event, in `TypeDef` row order,
    /// pointing at the type's first `Event` row. Relies on the indexing
    /// traversal having kept each type's events contiguous; the engine does
    /// not re-sort or validate.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] if an event's owner was never
    /// indexed, which indicates a traversal-order violation.
    pub fn event_map_rows(&self) -> Result<Vec<EventMapRow>> {
        let mut rows = Vec::new();
        let mut last_owner: Option<TypeDefId> = None;
        for &event in self.event_defs.rows() {
            let owner = self.module.event_owner(event);
            if last_owner == Some(owner) {
                continue;
            }
            last_owner = Some(owner);
            rows.push(EventMapRow {
                parent: self.type_defs.row_of(owner)?,
                event_list: self.event_defs.row_of(event)?,
            });
        }
        Ok(rows)
    }

    /// Builds the `PropertyMap` table. Same pattern as
    /// [`TableWriter::event_map_rows`], over properties.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] if a property's owner was never
    /// indexed.
    pub fn property_map_rows(&self) -> Result<Vec<PropertyMapRow>> {
        let mut rows = Vec::new();
        let mut last_owner: Option<TypeDefId> = None;
        for &property in self.property_defs.rows() {
            let owner = self.module.property_owner(property);
            if last_owner == Some(owner) {
                continue;
            }
            last_owner = Some(owner);
            rows.push(PropertyMapRow {
                parent: self.type_defs.row_of(owner)?,
                property_list: self.property_defs.row_of(property)?,
            });
        }
        Ok(rows)
    }

    /// Builds the `MethodImpl` table from the overrides collected during
    /// indexing, in traversal order.
    ///
    /// Member-ref bodies and declarations are registered on demand (takes
    /// `&mut self` for that reason); method-def handles must already be
    /// indexed.
    ///
    /// # Errors
    /// Returns [`crate::Error::RowNotFound`] if an override names a method
    /// definition that was never indexed; propagates signature-encoding
    /// failures from member-ref registration.
    pub fn method_impl_rows(&mut self) -> Result<Vec<MethodImplRow>> {
        let mut rows = Vec::with_capacity(self.method_impls.len());
        for i in 0..self.method_impls.len() {
            let (owner, ov) = self.method_impls[i];
            rows.push(MethodImplRow {
                class: self.type_defs.row_of(owner)?,
                method_body: self.resolve_method_handle(ov.body)?,
                method_declaration: self.resolve_method_handle(ov.declaration)?,
            });
        }
        Ok(rows)
    }

    fn resolve_method_handle(&mut self, handle: MethodHandle) -> Result<MethodDefOrRef> {
        match handle {
            MethodHandle::Def(method) => Ok(MethodDefOrRef::Def(self.method_defs.row_of(method)?)),
            MethodHandle::Ref(member) => Ok(MethodDefOrRef::Ref(self.get_or_add_member_ref(member)?)),
        }
    }
}
