//! # Open Receipts Core
//!
//! Pure primitives for Open Receipts verification: canonical JSON,
//! hex decoding, and strongly-typed Ed25519 material.
//!
//! This crate contains no I/O, no logging, no async. It is pure computation
//! over JSON values and byte arrays.
//!
//! ## Key Types
//!
//! - [`Receipt`] - A JSON object carrying a detached signature in its `sig` field
//! - [`PublicKey`] - A 32-byte Ed25519 public key
//! - [`Signature`] - A 64-byte Ed25519 signature
//!
//! ## Canonicalization
//!
//! Signatures cover the canonical JSON form of the receipt with the `sig`
//! field removed. See the [`canonical`] module.

pub mod canonical;
pub mod crypto;
pub mod error;
pub mod receipt;

pub use canonical::{canonical_bytes, canonical_json, to_canonical_json};
pub use crypto::{decode_hex_padded, PublicKey, Signature};
pub use error::CoreError;
pub use receipt::{Receipt, SIG_FIELD};
