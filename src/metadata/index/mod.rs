//! Row-index components backing the metadata tables.
//!
//! Three containers, one per table population policy:
//!
//! - [`DefinitionIndex`] - append-only bijection from a definition's identity
//!   to its permanent 1-based row; re-registration is an error. Backs every
//!   definition table.
//! - [`ReferenceIndex`] - deduplicating map over value equality; a repeated
//!   value returns the existing row. Backs the simple reference tables
//!   (assembly refs, module refs, type refs, standalone signatures).
//! - [`StructuralIndex`] - two-phase deduplicating map, identity first then
//!   structural key; backs the reference tables where distinct objects can
//!   denote one emitted entity (member refs, method specs, type specs).
//!
//! All three only ever append and only ever iterate their insertion-ordered
//! row vectors, never a hash map, so the produced tables are deterministic
//! given deterministic input order.

mod definition;
mod reference;
mod structural;

pub use definition::DefinitionIndex;
pub use reference::ReferenceIndex;
pub use structural::StructuralIndex;
