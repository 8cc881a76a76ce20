//! The resolved symbol graph consumed by the table writer.
//!
//! Earlier compilation phases (parsing, binding, semantic analysis) are
//! external to this crate; what they hand over is a [`Module`]: arenas of
//! definition and reference objects plus the ordered top-level type list. The
//! writer walks this graph, it never mutates it.
//!
//! # Identity
//!
//! Every definition and reference object receives a `Copy` arena id
//! ([`TypeDefId`], [`MemberRefId`], ...) when it is created on the module.
//! That id is the object's *identity* for the rest of the pipeline: the
//! definition indices key on it, and the structural reference indices use it
//! for their identity fast path. Two calls to [`Module::add_member_ref`] with
//! identical content produce two distinct ids on purpose; collapsing such
//! duplicates to one emitted row is the writer's job, not the model's.
//!
//! # Components
//!
//! - [`Module`] - arena owner and traversal root
//! - [`TypeDef`], [`FieldDef`], [`MethodDef`], [`ParamDef`], [`EventDef`],
//!   [`PropertyDef`], [`GenericParamDef`] - definitions emitted by this module
//! - [`AssemblyRef`], [`TypeRef`], [`TypeSpec`], [`MemberRef`], [`MethodSpec`] -
//!   externally resolved references
//! - [`SignatureEncoder`] - the out-of-scope blob-encoding collaborator

mod definitions;
mod flags;
mod module;
mod references;
mod signatures;

pub use definitions::*;
pub use flags::*;
pub use module::*;
pub use references::*;
pub use signatures::*;
