//! Structural comparison keys for the deduplicating reference indices.
//!
//! A key captures everything that makes two reference objects "the same
//! emitted entity": resolved parent, name, and encoded signature bytes.
//! Where a key component is itself a deduplicated reference (a type spec
//! parent, a member-ref method), the component is the already-assigned row
//! of that reference - rows are canonical by construction, so row equality
//! is structural equality one level down.

use crate::metadata::model::{MethodId, TypeDefId, TypeRef};
use crate::metadata::rid::RowId;

/// Resolved parent component of a [`MemberRefKey`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum MemberRefParentKey {
    /// Parent is a type defined in this module; the arena id is its
    /// identity.
    TypeDef(TypeDefId),
    /// Parent is an external type, compared by value.
    TypeRef(TypeRef),
    /// Parent is a type spec, represented by its deduplicated row.
    TypeSpec(RowId),
}

/// Structural identity of a member reference.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct MemberRefKey {
    /// Resolved containing type.
    pub parent: MemberRefParentKey,
    /// Member name.
    pub name: String,
    /// Encoded member signature.
    pub signature: Vec<u8>,
}

/// Resolved method component of a [`MethodSpecKey`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GenericMethodKey {
    /// A generic method defined in this module; the arena id is its
    /// identity.
    Def(MethodId),
    /// An external generic method, represented by its deduplicated
    /// member-ref row.
    Ref(RowId),
}

/// Structural identity of a generic method instantiation.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct MethodSpecKey {
    /// The method being instantiated.
    pub method: GenericMethodKey,
    /// Encoded type-argument instantiation.
    pub instantiation: Vec<u8>,
}
