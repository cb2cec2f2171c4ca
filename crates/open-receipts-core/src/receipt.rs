//! Receipt: a JSON object carrying a detached signature.
//!
//! The signature in the `sig` field covers the canonical form of every
//! OTHER field. Verification therefore starts by splitting the receipt
//! into its signature and a signature-free payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// The reserved field holding the hex-encoded detached signature.
pub const SIG_FIELD: &str = "sig";

/// A receipt: a JSON object whose `sig` field holds a detached Ed25519
/// signature over the canonical form of the remaining fields.
///
/// All fields other than `sig` are application payload of arbitrary JSON
/// shape. A receipt is constructed fresh per verification call and holds
/// no state of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Receipt(Map<String, Value>);

impl Receipt {
    /// Wrap a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(CoreError::NotAnObject),
        }
    }

    /// The receipt's fields, `sig` included.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Unwrap back into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Split into the signature hex and the signature-free payload.
    ///
    /// Builds a new map; the receipt itself is left untouched. A missing,
    /// `null`, or empty `sig` field yields `None` (verification reports
    /// `false` for such receipts). Any other non-string `sig` value is
    /// rejected with [`CoreError::NonStringSignature`].
    pub fn detach_signature(&self) -> Result<(Option<&str>, Value), CoreError> {
        let mut payload = Map::with_capacity(self.0.len());
        let mut sig_hex = None;

        for (key, value) in &self.0 {
            if key == SIG_FIELD {
                sig_hex = match value {
                    Value::String(s) if s.is_empty() => None,
                    Value::String(s) => Some(s.as_str()),
                    Value::Null => None,
                    _ => return Err(CoreError::NonStringSignature),
                };
            } else {
                payload.insert(key.clone(), value.clone());
            }
        }

        Ok((sig_hex, Value::Object(payload)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn receipt(value: Value) -> Receipt {
        Receipt::from_value(value).unwrap()
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        for value in [json!(null), json!(42), json!("x"), json!([1, 2])] {
            assert!(matches!(
                Receipt::from_value(value),
                Err(CoreError::NotAnObject)
            ));
        }
    }

    #[test]
    fn test_detach_removes_only_the_signature_field() {
        let r = receipt(json!({"amount": 10, "sig": "abcd", "note": "x"}));
        let (sig, payload) = r.detach_signature().unwrap();

        assert_eq!(sig, Some("abcd"));
        assert_eq!(payload, json!({"amount": 10, "note": "x"}));
    }

    #[test]
    fn test_detach_leaves_the_receipt_unmodified() {
        let original = json!({"amount": 10, "sig": "abcd"});
        let r = receipt(original.clone());
        let _ = r.detach_signature().unwrap();

        assert_eq!(r.clone().into_value(), original);
    }

    #[test]
    fn test_missing_signature_yields_none() {
        let r = receipt(json!({"amount": 10}));
        let (sig, payload) = r.detach_signature().unwrap();

        assert_eq!(sig, None);
        assert_eq!(payload, json!({"amount": 10}));
    }

    #[test]
    fn test_empty_and_null_signatures_yield_none() {
        let r_empty = receipt(json!({"a": 1, "sig": ""}));
        let (sig, _) = r_empty.detach_signature().unwrap();
        assert_eq!(sig, None);

        let r_null = receipt(json!({"a": 1, "sig": null}));
        let (sig, payload) = r_null.detach_signature().unwrap();
        assert_eq!(sig, None);
        // The null sig is still stripped from the payload.
        assert_eq!(payload, json!({"a": 1}));
    }

    #[test]
    fn test_non_string_signature_is_rejected() {
        for bad in [json!(7), json!(true), json!([1]), json!({"k": 1})] {
            let r = receipt(json!({"a": 1, "sig": bad}));
            assert!(matches!(
                r.detach_signature(),
                Err(CoreError::NonStringSignature)
            ));
        }
    }

    #[test]
    fn test_serde_is_transparent() {
        let r: Receipt = serde_json::from_str(r#"{"amount":10,"sig":"ab"}"#).unwrap();
        assert_eq!(r.fields().len(), 2);

        let back = serde_json::to_value(&r).unwrap();
        assert_eq!(back, json!({"amount": 10, "sig": "ab"}));
    }
}
