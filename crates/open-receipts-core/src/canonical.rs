//! Canonical JSON encoding for deterministic serialization.
//!
//! This module implements a JSON Canonicalization Scheme:
//! - Object keys sorted by UTF-16 code-unit comparison
//! - Array element order preserved
//! - Scalars rendered by serde_json's standard encoder
//! - No whitespace between tokens
//!
//! The canonical form is critical: it ensures that the same payload
//! produces identical bytes (and thus verifies against the same signature)
//! across all platforms.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;

/// Encode a JSON value to its canonical string form.
///
/// Total over `serde_json::Value`: every well-formed JSON value has a
/// canonical form. Recursion depth equals the input's nesting depth.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_value_to(&mut out, value);
    out
}

/// Encode a JSON value to the UTF-8 bytes of its canonical form.
///
/// These are the bytes a detached signature covers.
pub fn canonical_bytes(value: &Value) -> Vec<u8> {
    canonical_json(value).into_bytes()
}

/// Canonicalize any serializable type.
///
/// The value is converted to a JSON tree first. A failing serializer
/// (non-JSON-compatible input) surfaces as [`CoreError::Encoding`].
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String, CoreError> {
    let tree = serde_json::to_value(value).map_err(|e| CoreError::Encoding(e.to_string()))?;
    Ok(canonical_json(&tree))
}

/// Recursively write a value's canonical form.
fn write_value_to(out: &mut String, value: &Value) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value_to(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_by(|a, b| cmp_code_units(a, b));

            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string_to(out, key);
                out.push(':');
                write_value_to(out, &map[key]);
            }
            out.push('}');
        }
        scalar => write_scalar_to(out, scalar),
    }
}

/// Write a null, boolean, number, or string via serde_json's encoder.
fn write_scalar_to(out: &mut String, value: &Value) {
    let encoded = serde_json::to_string(value).expect("JSON scalar encoding cannot fail");
    out.push_str(&encoded);
}

/// Write a JSON-escaped string literal (used for object keys).
fn write_string_to(out: &mut String, s: &str) {
    let encoded = serde_json::to_string(s).expect("JSON string encoding cannot fail");
    out.push_str(&encoded);
}

/// Compare two keys by UTF-16 code units.
///
/// Rust's native `str` ordering compares Unicode scalar values, which
/// disagrees with UTF-16 code-unit order for supplementary-plane keys.
/// Receipts signed elsewhere sort keys as UTF-16, so the comparison must
/// be explicit.
fn cmp_code_units(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}
