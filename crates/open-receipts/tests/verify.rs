//! End-to-end verification tests.
//!
//! Receipts here are signed with ed25519-dalek directly, the way any
//! external signer would: canonicalize the payload, sign the UTF-8 bytes,
//! attach the signature hex under `sig`.

use ed25519_dalek::{Signer, SigningKey};
use serde_json::{json, Value};

use open_receipts::{canonical_bytes, canonical_json, verify, SIG_FIELD};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn keypair(seed: u8) -> SigningKey {
    SigningKey::from_bytes(&[seed; 32])
}

fn public_key_hex(key: &SigningKey) -> String {
    hex::encode(key.verifying_key().to_bytes())
}

/// Sign `payload` and return the receipt carrying the signature.
fn signed_receipt(key: &SigningKey, payload: Value) -> Value {
    let sig = key.sign(&canonical_bytes(&payload));
    let Value::Object(mut fields) = payload else {
        panic!("receipt payloads are JSON objects");
    };
    fields.insert(SIG_FIELD.into(), Value::String(hex::encode(sig.to_bytes())));
    Value::Object(fields)
}

#[tokio::test]
async fn valid_receipt_verifies() {
    init_tracing();
    let key = keypair(0x42);
    let receipt = signed_receipt(
        &key,
        json!({
            "amount": 10,
            "currency": "EUR",
            "items": ["a", "b"],
            "meta": {"issued": 1736870400000i64, "node": null},
        }),
    );

    assert!(verify(&receipt, &public_key_hex(&key)).await.unwrap());
}

#[tokio::test]
async fn field_order_in_source_text_does_not_matter() {
    let key = keypair(0x42);

    // Signed over one spelling, verified against another.
    let signed: Value = {
        let payload: Value = serde_json::from_str(r#"{"b":1,"a":2}"#).unwrap();
        signed_receipt(&key, payload)
    };
    let reordered: Value = serde_json::from_str(&format!(
        r#"{{"a":2,"sig":{},"b":1}}"#,
        serde_json::to_string(&signed["sig"]).unwrap()
    ))
    .unwrap();

    assert!(verify(&reordered, &public_key_hex(&key)).await.unwrap());
}

#[tokio::test]
async fn tampering_with_any_field_invalidates() {
    let key = keypair(0x42);
    let pk = public_key_hex(&key);
    let receipt = signed_receipt(&key, json!({"amount": 10, "note": "ok", "tags": [1, 2]}));

    let mut tampered_value = receipt.clone();
    tampered_value["amount"] = json!(11);
    assert!(!verify(&tampered_value, &pk).await.unwrap());

    let mut tampered_array = receipt.clone();
    tampered_array["tags"] = json!([2, 1]);
    assert!(!verify(&tampered_array, &pk).await.unwrap());

    let mut added_field = receipt.clone();
    added_field["extra"] = json!(true);
    assert!(!verify(&added_field, &pk).await.unwrap());

    let mut removed_field = receipt.clone();
    removed_field.as_object_mut().unwrap().remove("note");
    assert!(!verify(&removed_field, &pk).await.unwrap());

    // Untampered control.
    assert!(verify(&receipt, &pk).await.unwrap());
}

#[tokio::test]
async fn wrong_key_is_a_rejection_not_an_error() {
    let key = keypair(0x42);
    let other = keypair(0x43);
    let receipt = signed_receipt(&key, json!({"amount": 10}));

    assert!(!verify(&receipt, &public_key_hex(&other)).await.unwrap());
}

#[tokio::test]
async fn caller_receipt_is_not_modified() {
    let key = keypair(0x42);
    let receipt = signed_receipt(&key, json!({"amount": 10, "nested": {"x": [1]}}));
    let before = receipt.clone();

    verify(&receipt, &public_key_hex(&key)).await.unwrap();

    assert_eq!(receipt, before);
    assert!(receipt.get(SIG_FIELD).is_some());
}

#[tokio::test]
async fn odd_length_signature_hex_still_verifies() {
    // A signature whose hex starts with '0' may arrive with that nibble
    // dropped; the decoder re-pads it. Scan seeds for such a signature.
    let payload = json!({"amount": 10});
    let (key, sig_full) = (0u8..=255)
        .map(|seed| {
            let key = keypair(seed);
            let sig = hex::encode(key.sign(&canonical_bytes(&payload)).to_bytes());
            (key, sig)
        })
        .find(|(_, sig)| sig.starts_with('0'))
        .expect("some seed yields a leading-zero signature");

    let receipt = json!({"amount": 10, "sig": &sig_full[1..]});
    assert!(verify(&receipt, &public_key_hex(&key)).await.unwrap());
}

#[tokio::test]
async fn unicode_payloads_verify() {
    let key = keypair(0x07);
    let receipt = signed_receipt(
        &key,
        json!({
            "müller": "straße",
            "emoji": "\u{1F600}",
            "quotes": "say \"hi\"\n",
        }),
    );

    assert!(verify(&receipt, &public_key_hex(&key)).await.unwrap());
}

#[tokio::test]
async fn canonical_form_matches_reference_example() {
    // The documented shape: {"b":1,"a":2} canonicalizes with sorted keys
    // and no whitespace.
    let value: Value = serde_json::from_str(r#"{"b":1,"a":2}"#).unwrap();
    assert_eq!(canonical_json(&value), r#"{"a":2,"b":1}"#);
}
