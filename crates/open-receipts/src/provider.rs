//! The Ed25519 verification seam.
//!
//! Verification is delegated through [`CryptoProvider`] so the primitive
//! can be backed by different engines: the in-process default, an
//! OS-mediated keystore, a hardware token. The provider call is the sole
//! suspension point of a verification.

use async_trait::async_trait;
use open_receipts_core::{PublicKey, Signature};

use crate::error::Result;

/// An external Ed25519 verification capability.
///
/// Implementations must be stateless with respect to verification: no
/// retries, no caching of keys or results. Concurrent calls with
/// different inputs are independent.
#[async_trait]
pub trait CryptoProvider: Send + Sync {
    /// Whether the provider can perform Ed25519 verification at all.
    ///
    /// A provider that reports `false` makes every verification call fail
    /// with [`crate::VerifyError::ProviderUnavailable`] rather than
    /// reporting signatures as invalid.
    fn is_available(&self) -> bool {
        true
    }

    /// Verify `signature` over `message` with `public_key`.
    ///
    /// The raw key bytes are imported for verification only. Returns
    /// `Ok(false)` for a cryptographically rejected signature and `Err`
    /// when verification could not be attempted.
    async fn verify_signature(
        &self,
        public_key: &PublicKey,
        signature: &Signature,
        message: &[u8],
    ) -> Result<bool>;
}

/// The default in-process provider, backed by ed25519-dalek.
///
/// Always available. The key is imported on every call; nothing is
/// pooled or cached.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ed25519Provider;

#[async_trait]
impl CryptoProvider for Ed25519Provider {
    async fn verify_signature(
        &self,
        public_key: &PublicKey,
        signature: &Signature,
        message: &[u8],
    ) -> Result<bool> {
        Ok(public_key.verify(message, signature)?)
    }
}
