//! # Open Receipts
//!
//! Detached Ed25519 signature verification over canonical JSON.
//!
//! A receipt is a JSON object whose `sig` field holds a hex-encoded
//! Ed25519 signature over the canonical form of every other field.
//! [`verify`] answers a single question: was this object signed,
//! unmodified, by the holder of the supplied public key?
//!
//! ## Usage
//!
//! ```rust,no_run
//! use serde_json::json;
//!
//! async fn example() {
//!     let receipt = json!({
//!         "amount": 10,
//!         "currency": "EUR",
//!         "sig": "9f2c…",
//!     });
//!
//!     match open_receipts::verify(&receipt, "d75a980182b10ab7…").await {
//!         Ok(true) => println!("signed by the key holder"),
//!         Ok(false) => println!("signature absent or invalid"),
//!         Err(e) => eprintln!("could not attempt verification: {e}"),
//!     }
//! }
//! ```
//!
//! `Ok(false)` and `Err` are deliberately distinct outcomes: a rejected
//! signature is a normal result, while malformed hex, a wrong-length key,
//! or a missing crypto provider mean no verdict was reached at all.
//!
//! ## Custom providers
//!
//! The Ed25519 primitive sits behind [`CryptoProvider`], so verification
//! can be backed by something other than the in-process default (an OS
//! keystore, a hardware token). See [`Verifier::new`].

pub mod error;
pub mod provider;
pub mod verifier;

// Re-export the core crate
pub use open_receipts_core as core;

// Re-export main types for convenience
pub use error::{Result, VerifyError};
pub use provider::{CryptoProvider, Ed25519Provider};
pub use verifier::{verify, Verifier};

// Re-export commonly used core types
pub use open_receipts_core::{
    canonical_bytes, canonical_json, CoreError, PublicKey, Receipt, Signature, SIG_FIELD,
};
