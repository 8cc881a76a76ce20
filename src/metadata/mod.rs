//! Metadata table assembly for the module being emitted.
//!
//! This is the in-memory half of metadata emission: the symbol graph
//! produced by earlier phases goes in, ordered table row sequences with
//! 1-based cross-references come out, and the physical section writer turns
//! those into file bytes elsewhere.
//!
//! # Architecture
//!
//! Leaves first:
//!
//! - [`rid`] - row identifiers and per-owner [`rid::OwnershipRange`] blocks
//! - [`tables`] - table ids and the auxiliary row types the writer emits
//! - [`model`] - the front-end symbol graph contract (read-only input)
//! - [`index`] - the definition and reference row indices
//! - [`writer`] - the traversal driver and sparse-table population engine
//!
//! Everything here is single-threaded by construction: table correctness
//! depends on one specific, unbroken registration order, so the writer owns
//! its indices exclusively for the duration of one emission run.

pub mod index;
pub mod model;
/// Row identifiers and per-owner ownership ranges
pub mod rid;
pub mod tables;
pub mod writer;
