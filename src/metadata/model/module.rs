//! The module being emitted: arena owner and traversal root.

use uguid::Guid;

use crate::metadata::model::{
    EventDef, EventId, FieldDef, FieldId, GenericParamDef, GenericParamId, MemberRef, MemberRefId,
    MethodDef, MethodId, MethodImplOverride, MethodSpec, MethodSpecId, ParamDef, ParamId,
    PropertyDef, PropertyId, TypeDef, TypeDefId, TypeSpec, TypeSpecId,
};

/// The resolved program model for one module, as handed over by the
/// front-end.
///
/// Owns the arenas for every definition and reference object and assigns
/// arena ids at creation. Ids returned by the `add_*`/`define_*` methods are
/// only meaningful against the module that produced them; passing them to a
/// different module is a caller bug and will panic on arena access.
///
/// # Examples
///
/// ```rust
/// use cilemit::metadata::model::*;
/// use uguid::guid;
///
/// let mut module = Module::new("app.dll", guid!("01020304-0506-0708-090a-0b0c0d0e0f10"));
/// let ty = module.define_type(TypeDef::new("App", "Program", TypeAttributes::PUBLIC));
/// let main = module.add_method(ty, MethodDef::new("Main", MethodAttributes::STATIC));
/// assert_eq!(module.type_def(ty).methods, vec![main]);
/// ```
pub struct Module {
    /// Module file name.
    pub name: String,
    /// Module version id, one fresh Guid per compilation.
    pub mvid: Guid,

    top_level_types: Vec<TypeDefId>,
    type_defs: Vec<TypeDef>,
    fields: Vec<FieldDef>,
    methods: Vec<MethodDef>,
    params: Vec<ParamDef>,
    events: Vec<EventDef>,
    event_owners: Vec<TypeDefId>,
    properties: Vec<PropertyDef>,
    property_owners: Vec<TypeDefId>,
    generic_params: Vec<GenericParamDef>,
    type_specs: Vec<TypeSpec>,
    member_refs: Vec<MemberRef>,
    method_specs: Vec<MethodSpec>,
    hint_method_count: usize,
}

impl Module {
    /// Creates an empty module.
    #[must_use]
    pub fn new(name: impl Into<String>, mvid: Guid) -> Self {
        Module {
            name: name.into(),
            mvid,
            top_level_types: Vec::new(),
            type_defs: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            params: Vec::new(),
            events: Vec::new(),
            event_owners: Vec::new(),
            properties: Vec::new(),
            property_owners: Vec::new(),
            generic_params: Vec::new(),
            type_specs: Vec::new(),
            member_refs: Vec::new(),
            method_specs: Vec::new(),
            hint_method_count: 0,
        }
    }

    /// Sets the expected method count, used by the writer to pre-size its
    /// indices. Purely a performance heuristic; zero is always valid.
    #[must_use]
    pub fn with_method_count_hint(mut self, hint: usize) -> Self {
        self.hint_method_count = hint;
        self
    }

    /// Expected number of method definitions, as hinted by the front-end.
    #[must_use]
    pub fn hint_method_count(&self) -> usize {
        self.hint_method_count
    }

    /// Adds a type definition to the module.
    ///
    /// Top-level types (no enclosing type) are appended to the module's
    /// top-level list; nested types are appended to their declaring type's
    /// nested list. Both lists keep declaration order, which the writer's
    /// traversal order is built on.
    pub fn define_type(&mut self, def: TypeDef) -> TypeDefId {
        let id = TypeDefId(self.type_defs.len() as u32);
        match def.enclosing_type {
            Some(parent) => self.type_defs[parent.0 as usize].nested_types.push(id),
            None => self.top_level_types.push(id),
        }
        self.type_defs.push(def);
        id
    }

    /// Adds a field to `owner`, in declaration order.
    pub fn add_field(&mut self, owner: TypeDefId, def: FieldDef) -> FieldId {
        let id = FieldId(self.fields.len() as u32);
        self.fields.push(def);
        self.type_defs[owner.0 as usize].fields.push(id);
        id
    }

    /// Adds a method to `owner`, in declaration order.
    pub fn add_method(&mut self, owner: TypeDefId, def: MethodDef) -> MethodId {
        let id = MethodId(self.methods.len() as u32);
        self.methods.push(def);
        self.type_defs[owner.0 as usize].methods.push(id);
        id
    }

    /// Adds a parameter to `method`, in signature order.
    pub fn add_param(&mut self, method: MethodId, def: ParamDef) -> ParamId {
        let id = ParamId(self.params.len() as u32);
        self.params.push(def);
        self.methods[method.0 as usize].params.push(id);
        id
    }

    /// Adds an event to `owner`, in declaration order.
    pub fn add_event(&mut self, owner: TypeDefId, def: EventDef) -> EventId {
        let id = EventId(self.events.len() as u32);
        self.events.push(def);
        self.event_owners.push(owner);
        self.type_defs[owner.0 as usize].events.push(id);
        id
    }

    /// Adds a property to `owner`, in declaration order.
    pub fn add_property(&mut self, owner: TypeDefId, def: PropertyDef) -> PropertyId {
        let id = PropertyId(self.properties.len() as u32);
        self.properties.push(def);
        self.property_owners.push(owner);
        self.type_defs[owner.0 as usize].properties.push(id);
        id
    }

    /// Adds a generic parameter declared by a type.
    pub fn add_type_generic_param(
        &mut self,
        owner: TypeDefId,
        def: GenericParamDef,
    ) -> GenericParamId {
        let id = GenericParamId(self.generic_params.len() as u32);
        self.generic_params.push(def);
        self.type_defs[owner.0 as usize].generic_params.push(id);
        id
    }

    /// Adds a generic parameter declared by a method.
    pub fn add_method_generic_param(
        &mut self,
        owner: MethodId,
        def: GenericParamDef,
    ) -> GenericParamId {
        let id = GenericParamId(self.generic_params.len() as u32);
        self.generic_params.push(def);
        self.methods[owner.0 as usize].generic_params.push(id);
        id
    }

    /// Records an explicit interface-method implementation override on
    /// `owner`.
    pub fn add_override(&mut self, owner: TypeDefId, ov: MethodImplOverride) {
        self.type_defs[owner.0 as usize].overrides.push(ov);
    }

    /// Adds a type specification object.
    ///
    /// A fresh id is returned on every call, even for structurally identical
    /// content; collapsing duplicates is the writer's responsibility.
    pub fn add_type_spec(&mut self, spec: TypeSpec) -> TypeSpecId {
        let id = TypeSpecId(self.type_specs.len() as u32);
        self.type_specs.push(spec);
        id
    }

    /// Adds a member reference object. Fresh id per call, see
    /// [`Module::add_type_spec`].
    pub fn add_member_ref(&mut self, member: MemberRef) -> MemberRefId {
        let id = MemberRefId(self.member_refs.len() as u32);
        self.member_refs.push(member);
        id
    }

    /// Adds a generic method instantiation object. Fresh id per call, see
    /// [`Module::add_type_spec`].
    pub fn add_method_spec(&mut self, spec: MethodSpec) -> MethodSpecId {
        let id = MethodSpecId(self.method_specs.len() as u32);
        self.method_specs.push(spec);
        id
    }

    /// Top-level types in declaration order.
    #[must_use]
    pub fn top_level_types(&self) -> &[TypeDefId] {
        &self.top_level_types
    }

    /// Resolves a type definition id.
    #[must_use]
    pub fn type_def(&self, id: TypeDefId) -> &TypeDef {
        &self.type_defs[id.0 as usize]
    }

    /// Resolves a field definition id.
    #[must_use]
    pub fn field_def(&self, id: FieldId) -> &FieldDef {
        &self.fields[id.0 as usize]
    }

    /// Resolves a method definition id.
    #[must_use]
    pub fn method_def(&self, id: MethodId) -> &MethodDef {
        &self.methods[id.0 as usize]
    }

    /// Resolves a parameter definition id.
    #[must_use]
    pub fn param_def(&self, id: ParamId) -> &ParamDef {
        &self.params[id.0 as usize]
    }

    /// Resolves an event definition id.
    #[must_use]
    pub fn event_def(&self, id: EventId) -> &EventDef {
        &self.events[id.0 as usize]
    }

    /// The type that declares `event`.
    #[must_use]
    pub fn event_owner(&self, event: EventId) -> TypeDefId {
        self.event_owners[event.0 as usize]
    }

    /// Resolves a property definition id.
    #[must_use]
    pub fn property_def(&self, id: PropertyId) -> &PropertyDef {
        &self.properties[id.0 as usize]
    }

    /// The type that declares `property`.
    #[must_use]
    pub fn property_owner(&self, property: PropertyId) -> TypeDefId {
        self.property_owners[property.0 as usize]
    }

    /// Resolves a generic parameter definition id.
    #[must_use]
    pub fn generic_param(&self, id: GenericParamId) -> &GenericParamDef {
        &self.generic_params[id.0 as usize]
    }

    /// Resolves a type specification id.
    #[must_use]
    pub fn type_spec(&self, id: TypeSpecId) -> &TypeSpec {
        &self.type_specs[id.0 as usize]
    }

    /// Resolves a member reference id.
    #[must_use]
    pub fn member_ref(&self, id: MemberRefId) -> &MemberRef {
        &self.member_refs[id.0 as usize]
    }

    /// Resolves a generic method instantiation id.
    #[must_use]
    pub fn method_spec(&self, id: MethodSpecId) -> &MethodSpec {
        &self.method_specs[id.0 as usize]
    }
}
