//! Metadata table identifiers and emitted row types.
//!
//! The writer assembles tables as ordered in-memory row sequences; the
//! physical encoding (column widths, coded index compression, stream layout)
//! belongs to the external section writer. This module defines the table
//! identifiers used to name those sequences and the row structs for the
//! auxiliary tables the population engine produces itself. Rows of the
//! definition tables are the definition ids in row order and need no struct
//! of their own; their per-row column data still lives in the symbol graph.
//!
//! # Components
//!
//! - [`TableId`] - ECMA-335 table identifiers for every table this writer touches
//! - [`EventMapRow`] / [`PropertyMapRow`] - sparse ownership table rows
//! - [`MethodImplRow`] - explicit interface-implementation override rows
//! - [`MethodDefOrRef`] - coded reference used by [`MethodImplRow`]
//!
//! # Reference
//! - [ECMA-335 II.22](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Metadata table specifications

use strum::{Display, EnumCount, EnumIter};

use crate::metadata::rid::RowId;

/// Identifiers for the metadata tables produced or referenced by the table
/// writer.
///
/// The numeric values are the table numbers assigned by ECMA-335 Partition
/// II, Section 22. Only the tables this emission core touches are listed;
/// tables that belong to out-of-scope stages (debug information, EnC deltas,
/// resources) are deliberately absent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumCount)]
pub enum TableId {
    /// `Module` table (0x00) - The module being emitted: name and Mvid.
    Module = 0x00,

    /// `TypeRef` table (0x01) - References to types resolved in other
    /// modules or assemblies.
    TypeRef = 0x01,

    /// `TypeDef` table (0x02) - Types defined by this module. Owns
    /// contiguous ranges of the `Field` and `MethodDef` tables.
    TypeDef = 0x02,

    /// `Field` table (0x04) - Field definitions, grouped by declaring type.
    Field = 0x04,

    /// `MethodDef` table (0x06) - Method definitions, grouped by declaring
    /// type. Owns contiguous ranges of the `Param` table.
    MethodDef = 0x06,

    /// `Param` table (0x08) - Parameter definitions, grouped by declaring
    /// method.
    Param = 0x08,

    /// `MemberRef` table (0x0A) - References to fields or methods defined
    /// elsewhere, deduplicated structurally.
    MemberRef = 0x0A,

    /// `StandAloneSig` table (0x11) - Raw signature blobs used without an
    /// owning symbol (call-site signatures, local variable signatures).
    StandAloneSig = 0x11,

    /// `EventMap` table (0x12) - Sparse map from a type to its first owned
    /// row in the `Event` table.
    EventMap = 0x12,

    /// `Event` table (0x14) - Event definitions, grouped by declaring type.
    Event = 0x14,

    /// `PropertyMap` table (0x15) - Sparse map from a type to its first
    /// owned row in the `Property` table.
    PropertyMap = 0x15,

    /// `Property` table (0x17) - Property definitions, grouped by declaring
    /// type.
    Property = 0x17,

    /// `MethodImpl` table (0x19) - Explicit interface-method implementation
    /// overrides declared by types in this module.
    MethodImpl = 0x19,

    /// `ModuleRef` table (0x1A) - References to external modules by name.
    ModuleRef = 0x1A,

    /// `TypeSpec` table (0x1B) - Instantiated or constructed types referred
    /// to by signature, deduplicated structurally.
    TypeSpec = 0x1B,

    /// `AssemblyRef` table (0x23) - References to external assemblies.
    AssemblyRef = 0x23,

    /// `GenericParam` table (0x2A) - Generic parameters declared by types
    /// and methods, in owner registration order.
    GenericParam = 0x2A,

    /// `MethodSpec` table (0x2B) - Generic method instantiations,
    /// deduplicated structurally.
    MethodSpec = 0x2B,
}

/// A coded reference to either a method definition row or a member reference
/// row.
///
/// The `MethodImpl` table refers to method bodies and declarations that may
/// live in either table; the physical writer encodes the tag, this core only
/// records which table the row belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MethodDefOrRef {
    /// A row in the `MethodDef` table.
    Def(RowId),
    /// A row in the `MemberRef` table.
    Ref(RowId),
}

impl MethodDefOrRef {
    /// The referenced row, regardless of which table it belongs to.
    #[must_use]
    pub fn row(&self) -> RowId {
        match self {
            MethodDefOrRef::Def(rid) | MethodDefOrRef::Ref(rid) => *rid,
        }
    }
}

/// One row of the `EventMap` table.
///
/// Present only for types that declare at least one event. The owned range
/// runs from `event_list` up to the next map row's `event_list`, or to the
/// end of the `Event` table for the last map row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EventMapRow {
    /// `TypeDef` row of the owning type.
    pub parent: RowId,
    /// First `Event` row owned by the parent.
    pub event_list: RowId,
}

/// One row of the `PropertyMap` table.
///
/// Same shape and range semantics as [`EventMapRow`], over the `Property`
/// table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PropertyMapRow {
    /// `TypeDef` row of the owning type.
    pub parent: RowId,
    /// First `Property` row owned by the parent.
    pub property_list: RowId,
}

/// One row of the `MethodImpl` table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MethodImplRow {
    /// `TypeDef` row of the type declaring the override.
    pub class: RowId,
    /// The implementing method body.
    pub method_body: MethodDefOrRef,
    /// The interface method being implemented.
    pub method_declaration: MethodDefOrRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_id_discriminants() {
        assert_eq!(TableId::Module as u8, 0x00);
        assert_eq!(TableId::TypeDef as u8, 0x02);
        assert_eq!(TableId::MethodDef as u8, 0x06);
        assert_eq!(TableId::EventMap as u8, 0x12);
        assert_eq!(TableId::PropertyMap as u8, 0x15);
        assert_eq!(TableId::GenericParam as u8, 0x2A);
        assert_eq!(TableId::MethodSpec as u8, 0x2B);
    }

    #[test]
    fn test_table_id_display() {
        assert_eq!(TableId::TypeDef.to_string(), "TypeDef");
        assert_eq!(TableId::StandAloneSig.to_string(), "StandAloneSig");
    }

    #[test]
    fn test_table_id_iter_is_ascending() {
        let ids: Vec<u8> = TableId::iter().map(|id| id as u8).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_method_def_or_ref_row() {
        assert_eq!(MethodDefOrRef::Def(RowId(4)).row(), RowId(4));
        assert_eq!(MethodDefOrRef::Ref(RowId(9)).row(), RowId(9));
    }
}
