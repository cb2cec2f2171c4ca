//! # Open Receipts Testkit
//!
//! Testing utilities for Open Receipts.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: signing keypairs and receipt construction helpers.
//!   Key generation and signing live here, outside the product crates,
//!   which only ever consume public keys.
//! - **Golden vectors**: known inputs with expected canonical forms for
//!   cross-implementation verification
//! - **Generators**: proptest strategies for property-based testing
//!
//! ## Fixtures
//!
//! Quickly produce a validly signed receipt:
//!
//! ```rust
//! use open_receipts_testkit::fixtures::TestFixture;
//! use serde_json::json;
//!
//! let fixture = TestFixture::with_seed([0x42; 32]);
//! let receipt = fixture.signed_receipt(json!({"amount": 10}));
//! let pk_hex = fixture.public_key_hex();
//! ```
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the canonical form byte for byte:
//!
//! ```rust
//! use open_receipts_testkit::vectors::canonical_vectors;
//! use open_receipts_core::canonical_json;
//!
//! for vector in canonical_vectors() {
//!     let value = serde_json::from_str(vector.input).unwrap();
//!     assert_eq!(canonical_json(&value), vector.canonical);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use open_receipts_testkit::generators::json_value;
//! use open_receipts_core::canonical_json;
//!
//! proptest! {
//!     #[test]
//!     fn canonical_form_parses_back(value in json_value()) {
//!         let reparsed = serde_json::from_str(&canonical_json(&value)).unwrap();
//!         prop_assert_eq!(value, reparsed);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, Keypair, TestFixture};
pub use generators::{json_payload, json_scalar, json_value};
pub use vectors::{canonical_vectors, signed_vectors, CanonicalVector, SignedVector};
