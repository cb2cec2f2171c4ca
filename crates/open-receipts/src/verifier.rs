//! Receipt verification: strip the signature, canonicalize, verify.

use serde_json::Value;

use open_receipts_core::{canonical_bytes, PublicKey, Receipt, Signature};

use crate::error::{Result, VerifyError};
use crate::provider::{CryptoProvider, Ed25519Provider};

/// Verifies receipts against a crypto provider.
///
/// Holds nothing but the provider: no key cache, no state across calls.
/// Concurrent `verify` calls are independent.
pub struct Verifier<P: CryptoProvider> {
    provider: P,
}

impl Verifier<Ed25519Provider> {
    /// A verifier over the default in-process provider.
    pub fn default_provider() -> Self {
        Self::new(Ed25519Provider)
    }
}

impl Default for Verifier<Ed25519Provider> {
    fn default() -> Self {
        Self::default_provider()
    }
}

impl<P: CryptoProvider> Verifier<P> {
    /// Create a verifier over a custom provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Check whether `receipt`'s `sig` field is a valid Ed25519 signature
    /// over the canonical form of the remaining fields.
    ///
    /// Resolves to `Ok(false)` when the signature is absent or rejected,
    /// and to an error when verification could not be attempted: provider
    /// unavailable, non-hex signature or key, wrong byte length. The
    /// receipt is only read, never modified; nothing is retained after
    /// the call returns.
    pub async fn verify(&self, receipt: &Receipt, public_key_hex: &str) -> Result<bool> {
        if !self.provider.is_available() {
            return Err(VerifyError::ProviderUnavailable);
        }

        let (sig_hex, payload) = receipt.detach_signature()?;
        let Some(sig_hex) = sig_hex else {
            tracing::debug!("receipt carries no signature");
            return Ok(false);
        };

        let message = canonical_bytes(&payload);
        let signature = Signature::from_hex(sig_hex)?;
        let public_key = PublicKey::from_hex(public_key_hex)?;

        let accepted = self
            .provider
            .verify_signature(&public_key, &signature, &message)
            .await?;
        tracing::debug!(accepted, "signature verification completed");
        Ok(accepted)
    }
}

/// Verify a receipt value with the default provider.
///
/// The single-call entry point: `receipt` is a JSON object whose `sig`
/// field holds the hex-encoded detached signature, and `public_key_hex`
/// is the 32-byte Ed25519 public key in hex. Resolves to `true` only if
/// the signature covers the canonical form of the receipt minus `sig`.
pub async fn verify(receipt: &Value, public_key_hex: &str) -> Result<bool> {
    let receipt = Receipt::from_value(receipt.clone())?;
    Verifier::default_provider()
        .verify(&receipt, public_key_hex)
        .await
}
