use thiserror::Error;

use crate::metadata::tables::TableId;

/// The error type covering every failure this library can surface.
///
/// Table assembly is all-or-nothing per emission run: none of these errors is
/// recoverable by skipping the offending entity, because a partially indexed
/// table set cannot be made consistent after the fact. Callers are expected to
/// abandon the run and report the failure as an internal emission defect,
/// distinct from user source diagnostics.
///
/// # Examples
///
/// ```rust
/// use cilemit::Error;
///
/// fn report(err: &Error) {
///     match err {
///         Error::DuplicateDefinition { table } => {
///             eprintln!("definition registered twice in {table} table");
///         }
///         Error::RowNotFound { table } => {
///             eprintln!("unregistered definition looked up in {table} table");
///         }
///         Error::SignatureEncoding(message) => {
///             eprintln!("signature encoder failed: {message}");
///         }
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A definition object was registered twice by identity.
    ///
    /// Row numbers are assigned exactly once per definition, so a repeated
    /// registration indicates an aliased definition handed over by the
    /// front-end, or a driver revisiting a type it already processed. The
    /// index that rejected the registration is identified by its [`TableId`].
    #[error("definition already assigned a row in the {table} table")]
    DuplicateDefinition {
        /// The table whose index rejected the registration
        table: TableId,
    },

    /// The row of a definition that was never registered was requested.
    ///
    /// Lookups against definition indices assume the traversal already
    /// visited the definition; a miss means the registration order was
    /// violated somewhere upstream, not that the caller should register it
    /// now.
    #[error("definition has no row in the {table} table")]
    RowNotFound {
        /// The table whose index had no row for the definition
        table: TableId,
    },

    /// The external signature-blob encoder failed.
    ///
    /// Structural comparison keys for member references, method
    /// instantiations, and type specifications are derived from encoded
    /// signature bytes. Encoding is performed by an external service; its
    /// failures propagate here unchanged and abort the run.
    #[error("signature encoding failed: {0}")]
    SignatureEncoding(String),
}
