//! Reference objects: externally resolved entities the module refers to.
//!
//! Two kinds of equality matter here. [`AssemblyRef`], module-ref names, and
//! [`TypeRef`] are compared by value; their derived `Eq`/`Hash` impls *are*
//! the deduplication policy of the simple reference indices. [`TypeSpec`],
//! [`MemberRef`] and [`MethodSpec`] live in arenas and are compared first by
//! arena id, then structurally via signature bytes, because the front-end
//! may legitimately construct several distinct objects denoting the same
//! emitted entity.

use crate::metadata::model::definitions::{MethodId, TypeDefId};

/// Identity of a [`TypeSpec`] object within its module.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeSpecId(pub u32);

/// Identity of a [`MemberRef`] object within its module.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct MemberRefId(pub u32);

/// Identity of a [`MethodSpec`] object within its module.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct MethodSpecId(pub u32);

/// An opaque handle into the front-end's signature store.
///
/// Signature *content* is out of scope here; the handle is only ever passed
/// back to the [`crate::metadata::model::SignatureEncoder`] to obtain encoded
/// bytes. Distinct handles may encode to identical bytes, which is exactly
/// the case the structural indices collapse.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SignatureHandle(pub u32);

/// A reference to an external assembly.
///
/// Equality covers the full assembly identity (name, version, public key
/// token, culture); two references with equal identity collapse to one
/// `AssemblyRef` row.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct AssemblyRef {
    /// Simple assembly name.
    pub name: String,
    /// Major, minor, build, revision.
    pub version: (u16, u16, u16, u16),
    /// Low 8 bytes of the SHA-1 of the public key, if the assembly is signed.
    pub public_key_token: Option<[u8; 8]>,
    /// Culture name, `None` for culture-neutral assemblies.
    pub culture: Option<String>,
}

impl AssemblyRef {
    /// Creates a culture-neutral, unsigned assembly reference.
    #[must_use]
    pub fn new(name: impl Into<String>, version: (u16, u16, u16, u16)) -> Self {
        AssemblyRef {
            name: name.into(),
            version,
            public_key_token: None,
            culture: None,
        }
    }
}

/// Where a [`TypeRef`]'s target is resolved.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ResolutionScope {
    /// The type lives in an external assembly.
    Assembly(AssemblyRef),
    /// The type lives in an external module of this assembly, named by file.
    Module(String),
    /// The type is nested inside another referenced type.
    Nested(Box<TypeRef>),
}

/// A reference to a type defined outside this module.
///
/// Compared by value: scope, namespace and name together identify the
/// referenced type, so equal values are one `TypeRef` row regardless of how
/// many objects denote it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypeRef {
    /// Where the type is resolved.
    pub scope: ResolutionScope,
    /// Namespace of the referenced type, empty for nested types.
    pub namespace: String,
    /// Simple name of the referenced type.
    pub name: String,
}

impl TypeRef {
    /// Creates a type reference resolved in `scope`.
    #[must_use]
    pub fn new(
        scope: ResolutionScope,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        TypeRef {
            scope,
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// A constructed or instantiated type referred to by signature.
///
/// The shape lives behind the [`SignatureHandle`]; structural equality is
/// equality of the encoded signature bytes.
pub struct TypeSpec {
    /// Handle to the type signature in the front-end's store.
    pub signature: SignatureHandle,
}

/// The parent a [`MemberRef`] is resolved against.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MemberRefParent {
    /// A type defined in this module (used for vararg call-site references).
    TypeDef(TypeDefId),
    /// A type referenced from another module or assembly.
    TypeRef(TypeRef),
    /// An instantiated type referred to by signature.
    TypeSpec(TypeSpecId),
}

/// A reference to a field or method resolved outside this module.
///
/// Structurally identified by parent, name, and encoded signature bytes.
pub struct MemberRef {
    /// The type the member belongs to.
    pub parent: MemberRefParent,
    /// Member name.
    pub name: String,
    /// Handle to the member signature in the front-end's store.
    pub signature: SignatureHandle,
}

/// The generic method a [`MethodSpec`] instantiates.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GenericMethod {
    /// A generic method defined in this module.
    Def(MethodId),
    /// A generic method referenced externally.
    Ref(MemberRefId),
}

/// A generic method instantiation.
///
/// Structurally identified by the instantiated method and the encoded
/// type-argument signature bytes.
pub struct MethodSpec {
    /// The generic method being instantiated.
    pub method: GenericMethod,
    /// Handle to the instantiation signature in the front-end's store.
    pub instantiation: SignatureHandle,
}
