#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # cilemit
//!
//! Metadata table assembly for .NET module emission: the stage of a compiler
//! back-end that turns a fully resolved program model into an ECMA-335
//! metadata table set. Given the symbol graph produced by earlier phases,
//! `cilemit` assigns every definition its permanent 1-based row, collapses
//! reference objects by identity and by structural equality, and builds the
//! sparse ownership tables (event map, property map) and the
//! method-implementation list. The finished row sequences are consumed by an
//! external PE/COFF section writer; no physical encoding happens here.
//!
//! ## What lives where
//!
//! - **Input contract** - [`metadata::model`]: the module, its definitions
//!   and reference objects, and the [`metadata::model::SignatureEncoder`]
//!   boundary to the out-of-scope blob-encoding service.
//! - **Indices** - [`metadata::index`]: the append-only definition index and
//!   the two deduplicating reference indices.
//! - **Driver** - [`metadata::writer::TableWriter`]: one instance per
//!   emission run; traverses the type graph in the order the table format
//!   demands and populates the auxiliary tables.
//!
//! ## Guarantees
//!
//! - Row numbers start at 1, are assigned in first-visit order, and are
//!   never reused or renumbered.
//! - Every owner's children occupy one contiguous row block, recoverable as
//!   an [`metadata::rid::OwnershipRange`].
//! - Structurally equal references collapse to one row no matter how many
//!   distinct objects denote them.
//! - Output depends only on input order, never on hash-map iteration order,
//!   so deterministic input yields deterministic tables.
//!
//! ## Quick Start
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
//! let program = module.define_type(TypeDef::new("App", "Program", TypeAttributes::PUBLIC));
//! module.add_method(program, MethodDef::new("Main", MethodAttributes::STATIC));
//!
//! let encoder = NullEncoder;
//! let mut writer = TableWriter::new(&module, &encoder);
//! writer.index_module()?;
//!
//! assert_eq!(writer.type_defs().len(), 1);
//! assert_eq!(writer.method_defs().len(), 1);
//! # Ok::<(), cilemit::Error>(())
//! ```
//!
//! ## Error model
//!
//! Everything fatal, nothing retried: a duplicate definition, a missing row,
//! or a signature-encoding failure means the emission run is abandoned and
//! the error is reported as an internal emission defect. See [`Error`].

pub(crate) mod error;
pub mod metadata;
pub mod prelude;

/// Universal `Result` type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;
