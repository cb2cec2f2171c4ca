//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::{Map, Number, Value};

/// Generate an object key.
///
/// Mostly identifier-ish, with occasional arbitrary Unicode to exercise
/// escaping and code-unit ordering.
pub fn json_key() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z_][a-z0-9_]{0,7}",
        1 => ".{1,4}",
    ]
}

/// Generate an arbitrary JSON scalar.
pub fn json_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        any::<u64>().prop_map(|n| Value::Number(n.into())),
        // JSON has no NaN or infinity
        prop::num::f64::NORMAL
            .prop_map(|f| Value::Number(Number::from_f64(f).expect("normal floats are finite"))),
        ".*".prop_map(Value::String),
    ]
}

/// Generate an arbitrary JSON value with bounded depth and size.
pub fn json_value() -> impl Strategy<Value = Value> {
    json_scalar().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec((json_key(), inner), 0..8).prop_map(collect_object),
        ]
    })
}

/// Generate a JSON object suitable as a receipt payload.
pub fn json_payload() -> impl Strategy<Value = Value> {
    prop::collection::vec((json_key(), json_value()), 0..8).prop_map(collect_object)
}

fn collect_object(entries: Vec<(String, Value)>) -> Value {
    let mut map = Map::new();
    for (key, value) in entries {
        map.insert(key, value);
    }
    Value::Object(map)
}

/// Generate a 32-byte signing seed.
pub fn seed() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}
