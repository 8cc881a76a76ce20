//! ECMA-335 attribute flags carried by definitions.
//!
//! The writer does not interpret these; they travel from the front-end
//! through the finished rows to the physical writer unchanged. The constants
//! are the subsets of ECMA-335 II.23.1 that emitted definitions actually
//! carry.

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
    /// Type attribute flags (ECMA-335 II.23.1.15)
    pub struct TypeAttributes: u32 {
        /// Type is not visible outside the assembly
        const NOT_PUBLIC = 0x0000_0000;
        /// Type is visible outside the assembly
        const PUBLIC = 0x0000_0001;
        /// Nested type with public visibility
        const NESTED_PUBLIC = 0x0000_0002;
        /// Nested type with private visibility
        const NESTED_PRIVATE = 0x0000_0003;
        /// Fields are laid out sequentially
        const SEQUENTIAL_LAYOUT = 0x0000_0008;
        /// Fields are laid out at explicit offsets
        const EXPLICIT_LAYOUT = 0x0000_0010;
        /// Type is an interface
        const INTERFACE = 0x0000_0020;
        /// Type is abstract
        const ABSTRACT = 0x0000_0080;
        /// Type cannot be derived from
        const SEALED = 0x0000_0100;
        /// Name is special, the name describes how
        const SPECIAL_NAME = 0x0000_0400;
        /// Type has a static constructor run before first access
        const BEFORE_FIELD_INIT = 0x0010_0000;
    }
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
    /// Field attribute flags (ECMA-335 II.23.1.5)
    pub struct FieldAttributes: u32 {
        /// Accessible only by the declaring type
        const PRIVATE = 0x0001;
        /// Accessible by derived types
        const FAMILY = 0x0004;
        /// Accessible by anyone
        const PUBLIC = 0x0006;
        /// No instance required to access the field
        const STATIC = 0x0010;
        /// Field can only be initialized, not written after init
        const INIT_ONLY = 0x0020;
        /// Value is a compile-time constant
        const LITERAL = 0x0040;
        /// Name is special, the name describes how
        const SPECIAL_NAME = 0x0200;
        /// Field has an RVA pointing at initialized data
        const HAS_FIELD_RVA = 0x0100;
    }
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
    /// Method attribute flags (ECMA-335 II.23.1.10)
    pub struct MethodAttributes: u32 {
        /// Accessible only by the declaring type
        const PRIVATE = 0x0001;
        /// Accessible by derived types
        const FAMILY = 0x0004;
        /// Accessible by anyone
        const PUBLIC = 0x0006;
        /// No instance required to invoke the method
        const STATIC = 0x0010;
        /// Method cannot be overridden
        const FINAL = 0x0020;
        /// Method is virtual
        const VIRTUAL = 0x0040;
        /// Method hides by name and signature
        const HIDE_BY_SIG = 0x0080;
        /// Method always gets a new slot in the vtable
        const NEW_SLOT = 0x0100;
        /// Method does not provide an implementation
        const ABSTRACT = 0x0400;
        /// Name is special, the name describes how
        const SPECIAL_NAME = 0x0800;
        /// Name is reserved runtime special (`.ctor`, accessors)
        const RT_SPECIAL_NAME = 0x1000;
    }
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
    /// Parameter attribute flags (ECMA-335 II.23.1.13)
    pub struct ParamAttributes: u32 {
        /// Parameter is an input
        const IN = 0x0001;
        /// Parameter is an output
        const OUT = 0x0002;
        /// Parameter is optional
        const OPTIONAL = 0x0010;
        /// Parameter has a default value
        const HAS_DEFAULT = 0x1000;
    }
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
    /// Event attribute flags (ECMA-335 II.23.1.4)
    pub struct EventAttributes: u32 {
        /// Name is special, the name describes how
        const SPECIAL_NAME = 0x0200;
        /// Name is reserved runtime special
        const RT_SPECIAL_NAME = 0x0400;
    }
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
    /// Property attribute flags (ECMA-335 II.23.1.14)
    pub struct PropertyAttributes: u32 {
        /// Name is special, the name describes how
        const SPECIAL_NAME = 0x0200;
        /// Name is reserved runtime special
        const RT_SPECIAL_NAME = 0x0400;
        /// Property has a default value
        const HAS_DEFAULT = 0x1000;
    }
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
    /// Generic parameter attribute flags (ECMA-335 II.23.1.7)
    pub struct GenericParamAttributes: u32 {
        /// Parameter is covariant
        const COVARIANT = 0x0001;
        /// Parameter is contravariant
        const CONTRAVARIANT = 0x0002;
        /// Parameter is constrained to reference types
        const REFERENCE_TYPE_CONSTRAINT = 0x0004;
        /// Parameter is constrained to non-nullable value types
        const NOT_NULLABLE_VALUE_TYPE_CONSTRAINT = 0x0008;
        /// Parameter requires a parameterless constructor
        const DEFAULT_CONSTRUCTOR_CONSTRAINT = 0x0010;
    }
}
