//! Definition objects: entities declared by the module being emitted.
//!
//! Each definition is created exactly once on its [`crate::metadata::model::Module`]
//! and identified by the arena id returned at creation. Member lists are
//! ordered; the writer registers members in exactly the order they appear
//! here, which is what makes each owner's rows contiguous in the finished
//! tables.

use crate::metadata::model::flags::{
    EventAttributes, FieldAttributes, GenericParamAttributes, MethodAttributes, ParamAttributes,
    PropertyAttributes, TypeAttributes,
};
use crate::metadata::model::references::MemberRefId;

/// Identity of a [`TypeDef`] within its module.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TypeDefId(pub u32);

/// Identity of a [`FieldDef`] within its module.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct FieldId(pub u32);

/// Identity of a [`MethodDef`] within its module.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct MethodId(pub u32);

/// Identity of a [`ParamDef`] within its module.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ParamId(pub u32);

/// Identity of an [`EventDef`] within its module.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct EventId(pub u32);

/// Identity of a [`PropertyDef`] within its module.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PropertyId(pub u32);

/// Identity of a [`GenericParamDef`] within its module.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct GenericParamId(pub u32);

/// A type defined by this module.
pub struct TypeDef {
    /// Simple name, without namespace.
    pub name: String,
    /// Namespace, empty for nested and global types.
    pub namespace: String,
    /// ECMA-335 type attributes.
    pub flags: TypeAttributes,
    /// The declaring type for nested types.
    pub enclosing_type: Option<TypeDefId>,
    /// Nested types declared inside this type, in declaration order.
    pub nested_types: Vec<TypeDefId>,
    /// Fields declared by this type, in declaration order.
    pub fields: Vec<FieldId>,
    /// Methods declared by this type, in declaration order.
    pub methods: Vec<MethodId>,
    /// Events declared by this type, in declaration order.
    pub events: Vec<EventId>,
    /// Properties declared by this type, in declaration order.
    pub properties: Vec<PropertyId>,
    /// Generic type parameters, in declaration order.
    pub generic_params: Vec<GenericParamId>,
    /// Explicit interface-method implementation overrides.
    pub overrides: Vec<MethodImplOverride>,
}

impl TypeDef {
    /// Creates a bare type definition with the given identity data and no
    /// members. Members are attached through the module's `add_*` methods.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, flags: TypeAttributes) -> Self {
        TypeDef {
            name: name.into(),
            namespace: namespace.into(),
            flags,
            enclosing_type: None,
            nested_types: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            events: Vec::new(),
            properties: Vec::new(),
            generic_params: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Same as [`TypeDef::new`], declared inside `enclosing`.
    #[must_use]
    pub fn nested(
        name: impl Into<String>,
        flags: TypeAttributes,
        enclosing: TypeDefId,
    ) -> Self {
        let mut def = TypeDef::new("", name, flags);
        def.enclosing_type = Some(enclosing);
        def
    }
}

/// A field defined by this module.
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// ECMA-335 field attributes.
    pub flags: FieldAttributes,
}

/// A method defined by this module.
pub struct MethodDef {
    /// Method name.
    pub name: String,
    /// ECMA-335 method attributes.
    pub flags: MethodAttributes,
    /// Parameters, in signature order.
    pub params: Vec<ParamId>,
    /// Generic method parameters, in declaration order.
    pub generic_params: Vec<GenericParamId>,
}

impl MethodDef {
    /// Creates a method definition with no parameters attached yet.
    #[must_use]
    pub fn new(name: impl Into<String>, flags: MethodAttributes) -> Self {
        MethodDef {
            name: name.into(),
            flags,
            params: Vec::new(),
            generic_params: Vec::new(),
        }
    }
}

/// A parameter of a method defined by this module.
pub struct ParamDef {
    /// Parameter name.
    pub name: String,
    /// ECMA-335 parameter attributes.
    pub flags: ParamAttributes,
    /// Signature position, 1-based; 0 names the return value.
    pub sequence: u16,
}

/// An event defined by this module.
pub struct EventDef {
    /// Event name.
    pub name: String,
    /// ECMA-335 event attributes.
    pub flags: EventAttributes,
}

/// A property defined by this module.
pub struct PropertyDef {
    /// Property name.
    pub name: String,
    /// ECMA-335 property attributes.
    pub flags: PropertyAttributes,
}

/// A generic parameter declared by a type or a method.
pub struct GenericParamDef {
    /// Parameter name.
    pub name: String,
    /// ECMA-335 generic parameter attributes.
    pub flags: GenericParamAttributes,
    /// Position in the owner's generic parameter list, 0-based.
    pub number: u16,
}

/// A method named by a [`MethodImplOverride`], either defined here or
/// resolved externally.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MethodHandle {
    /// A method defined by this module.
    Def(MethodId),
    /// A member reference to an external method.
    Ref(MemberRefId),
}

/// An explicit interface-method implementation override declared by a type.
///
/// Collected during traversal in declaration order and resolved into
/// `MethodImpl` rows after all definitions are indexed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MethodImplOverride {
    /// The implementing method body.
    pub body: MethodHandle,
    /// The interface method being implemented.
    pub declaration: MethodHandle,
}
