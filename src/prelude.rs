//! Convenient re-exports of the most commonly used types.
//!
//! Import this module to get everything needed for a typical emission run:
//! build a [`Module`], hand it to a [`TableWriter`], read back rows and
//! ranges.
//!
//! # Example
//!
//! ```rust,no_run
//! use cilemit::prelude::*;
//! use uguid::guid;
//!
//! let module = Module::new("app.dll", guid!("01020304-0506-0708-090a-0b0c0d0e0f10"));
//! ```

/// The main error type for all cilemit operations
pub use crate::Error;

/// The result type used throughout cilemit
pub use crate::Result;

/// Row identifiers and per-owner row ranges
pub use crate::metadata::rid::{OwnershipRange, RowId};

/// Table identifiers and emitted auxiliary rows
pub use crate::metadata::tables::{
    EventMapRow, MethodDefOrRef, MethodImplRow, PropertyMapRow, TableId,
};

/// The front-end symbol graph contract
pub use crate::metadata::model::{
    AssemblyRef, EventDef, EventId, FieldDef, FieldId, GenericMethod, GenericParamDef,
    GenericParamId, MemberRef, MemberRefId, MemberRefParent, MethodDef, MethodHandle, MethodId,
    MethodImplOverride, MethodSpec, MethodSpecId, Module, ParamDef, ParamId, PropertyDef,
    PropertyId, ResolutionScope, SignatureEncoder, SignatureHandle, TypeDef, TypeDefId, TypeRef,
    TypeSpec, TypeSpecId,
};

/// Attribute flags carried by definitions
pub use crate::metadata::model::{
    EventAttributes, FieldAttributes, GenericParamAttributes, MethodAttributes, ParamAttributes,
    PropertyAttributes, TypeAttributes,
};

/// The emission driver
pub use crate::metadata::writer::{GenericParamOwner, TableWriter};
