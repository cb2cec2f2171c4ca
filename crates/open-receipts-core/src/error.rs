//! Error types for the Open Receipts core.

use thiserror::Error;

/// Core errors that can occur while decoding or canonicalizing receipts.
///
/// None of these represent a cryptographically rejected signature; rejection
/// is a normal `false` verification result, not an error.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed hex: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    #[error("public key must be 32 bytes, got {0}")]
    KeyLength(usize),

    #[error("signature must be 64 bytes, got {0}")]
    SignatureLength(usize),

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("signature field must be a string")]
    NonStringSignature,

    #[error("receipt must be a JSON object")]
    NotAnObject,

    #[error("encoding error: {0}")]
    Encoding(String),
}
