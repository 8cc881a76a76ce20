//! The signature-blob encoding boundary.
//!
//! Signature encoding belongs to an upstream service (the blob heap builder
//! of the surrounding emission pipeline); this crate only consumes the bytes
//! it produces, as structural comparison keys for the deduplicating
//! reference indices. The trait is deliberately narrow: three methods, one
//! per reference kind whose structural identity is signature-derived.

use crate::metadata::model::{MemberRef, MethodSpec, Module, TypeSpec};
use crate::Result;

/// Produces encoded signature bytes for reference objects.
///
/// Implementations live outside this crate. Failures are reported as
/// [`crate::Error::SignatureEncoding`] and abort the emission run; a
/// half-built structural key must never be used for deduplication.
///
/// Encoding the same logical signature must be deterministic: the returned
/// bytes are compared for equality, and two references denoting the same
/// entity collapse to one row only if their bytes match.
pub trait SignatureEncoder {
    /// Encodes the field-or-method signature of a member reference.
    ///
    /// # Errors
    /// Returns an error if the signature behind the handle cannot be encoded.
    fn member_signature(&self, module: &Module, member: &MemberRef) -> Result<Vec<u8>>;

    /// Encodes the type-argument instantiation of a generic method instantiation.
    ///
    /// # Errors
    /// Returns an error if the signature behind the handle cannot be encoded.
    fn method_instantiation(&self, module: &Module, spec: &MethodSpec) -> Result<Vec<u8>>;

    /// Encodes the type signature of a type specification.
    ///
    /// # Errors
    /// Returns an error if the signature behind the handle cannot be encoded.
    fn type_signature(&self, module: &Module, spec: &TypeSpec) -> Result<Vec<u8>>;
}
