//! Error types for receipt verification.

use open_receipts_core::CoreError;
use thiserror::Error;

/// Errors that prevent a verification attempt.
///
/// A cryptographically rejected signature is NOT an error: it is the
/// `Ok(false)` result of [`crate::verify`]. Conflating the two would let
/// a malformed environment masquerade as a benign rejection.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The configured provider cannot perform Ed25519 verification.
    #[error("no usable Ed25519 provider")]
    ProviderUnavailable,

    /// Malformed receipt, hex, key, or signature.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The provider failed internally.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Result type for verification operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
