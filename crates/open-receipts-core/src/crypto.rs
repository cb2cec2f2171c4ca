//! Hex decoding and strongly-typed Ed25519 material.
//!
//! Wraps ed25519-dalek verification with strong types. Key generation and
//! signing are deliberately absent: this crate only ever consumes public
//! keys and signatures supplied by a caller.

use ed25519_dalek::{Signature as DalekSignature, Verifier, VerifyingKey};
use std::fmt;

use crate::error::CoreError;

/// Decode a hex string into bytes.
///
/// Odd-length input is left-padded with one `0` nibble before decoding,
/// so `"abc"` and `"0abc"` decode identically. Non-hex characters are a
/// [`CoreError::MalformedHex`].
pub fn decode_hex_padded(input: &str) -> Result<Vec<u8>, CoreError> {
    if input.len() % 2 == 1 {
        let mut padded = String::with_capacity(input.len() + 1);
        padded.push('0');
        padded.push_str(input);
        Ok(hex::decode(padded)?)
    } else {
        Ok(hex::decode(input)?)
    }
}

/// A 32-byte Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; 32]);

impl PublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string (odd lengths are zero-padded).
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = decode_hex_padded(s)?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| CoreError::KeyLength(b.len()))?;
        Ok(Self(arr))
    }

    /// Verify a signature over a message.
    ///
    /// Returns `Ok(true)` when the signature is accepted and `Ok(false)`
    /// when it is cryptographically rejected. An `Err` means verification
    /// could not be attempted at all: the bytes are not a usable Ed25519
    /// public key. Callers must keep the two outcomes distinct.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<bool, CoreError> {
        let verifying_key =
            VerifyingKey::from_bytes(&self.0).map_err(|_| CoreError::InvalidPublicKey)?;

        let sig = DalekSignature::from_bytes(&signature.0);

        Ok(verifying_key.verify(message, &sig).is_ok())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A 64-byte Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature(pub [u8; 64]);

impl Signature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string (odd lengths are zero-padded).
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = decode_hex_padded(s)?;
        let arr: [u8; 64] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| CoreError::SignatureLength(b.len()))?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 64]> for Signature {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}
