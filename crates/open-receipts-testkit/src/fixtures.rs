//! Test fixtures and helpers.
//!
//! Signing lives here, not in the product crates: the verifier only ever
//! consumes public keys and signatures.

use ed25519_dalek::{Signer, SigningKey};
use serde_json::{Map, Value};

use open_receipts_core::{canonical_bytes, PublicKey, SIG_FIELD};

/// A signing keypair for producing test receipts.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            signing_key: SigningKey::generate(&mut rng),
        }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Get the public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_bytes(self.signing_key.verifying_key().to_bytes())
    }

    /// Get the public key as hex, as a verifier caller would supply it.
    pub fn public_key_hex(&self) -> String {
        self.public_key().to_hex()
    }

    /// Sign the canonical form of `payload`, returning the signature hex.
    pub fn sign_payload(&self, payload: &Value) -> String {
        let sig = self.signing_key.sign(&canonical_bytes(payload));
        hex::encode(sig.to_bytes())
    }
}

/// A fixture bundling a keypair with receipt construction helpers.
pub struct TestFixture {
    pub keypair: Keypair,
}

impl TestFixture {
    /// Create a new test fixture with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
        }
    }

    /// Get the keypair's public key as hex.
    pub fn public_key_hex(&self) -> String {
        self.keypair.public_key_hex()
    }

    /// Build a receipt: the payload fields plus a valid `sig` over them.
    ///
    /// Any `sig` already present in `payload` is discarded before signing,
    /// since the signature never covers itself.
    ///
    /// Panics on non-object payloads; receipts are JSON objects.
    pub fn signed_receipt(&self, payload: Value) -> Value {
        let Value::Object(mut fields) = payload else {
            panic!("receipt payloads are JSON objects");
        };
        fields.remove(SIG_FIELD);

        let sig_hex = self.keypair.sign_payload(&Value::Object(fields.clone()));
        fields.insert(SIG_FIELD.to_string(), Value::String(sig_hex));
        Value::Object(fields)
    }

    /// Build a receipt whose signature does not match its payload.
    pub fn tampered_receipt(&self, payload: Value) -> Value {
        let mut receipt = self.signed_receipt(payload);
        let fields = receipt
            .as_object_mut()
            .expect("signed_receipt returns an object");
        // Toggle a marker field so the payload always differs from the
        // one that was signed, whatever it contained.
        if fields.remove("__tampered").is_none() {
            fields.insert("__tampered".to_string(), Value::Bool(true));
        }
        receipt
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-signer tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            TestFixture::with_seed(seed)
        })
        .collect()
}
