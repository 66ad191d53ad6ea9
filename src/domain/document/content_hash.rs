//! Order-independent hashing of JSON content.
//!
//! `serde_json::Map` equality ignores insertion order when `preserve_order`
//! is enabled, so the hash must too: entry hashes are combined with a
//! wrapping sum.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde_json::{Map, Number, Value};

/// Hash of a content map, consistent with `Map` equality.
pub(crate) fn content_hash(content: &Map<String, Value>) -> u64 {
    content.iter().fold(0u64, |acc, (key, value)| {
        acc.wrapping_add(entry_hash(key, value))
    })
}

fn entry_hash(key: &str, value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hash_value(value, &mut hasher);
    hasher.finish()
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => 0u8.hash(state),
        Value::Bool(b) => {
            1u8.hash(state);
            b.hash(state);
        }
        Value::Number(n) => {
            2u8.hash(state);
            hash_number(n, state);
        }
        Value::String(s) => {
            3u8.hash(state);
            s.hash(state);
        }
        Value::Array(items) => {
            4u8.hash(state);
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            5u8.hash(state);
            content_hash(map).hash(state);
        }
    }
}

// Integers and floats never compare equal to each other, so they hash
// under separate tags. 0.0 and -0.0 compare equal and must hash alike.
fn hash_number<H: Hasher>(n: &Number, state: &mut H) {
    if let Some(u) = n.as_u64() {
        0u8.hash(state);
        u.hash(state);
    } else if let Some(i) = n.as_i64() {
        1u8.hash(state);
        i.hash(state);
    } else if let Some(f) = n.as_f64() {
        let f = if f == 0.0 { 0.0 } else { f };
        2u8.hash(state);
        f.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn insertion_order_does_not_change_hash() {
        let a = object(json!({"a": 1, "b": "two", "c": [true]}));
        let b = object(json!({"c": [true], "b": "two", "a": 1}));
        assert_eq!(a, b);
        assert_eq!(content_hash(&a), content_hash(&b));
    }

    #[test]
    fn nested_object_order_does_not_change_hash() {
        let a = object(json!({"outer": {"x": 1, "y": 2}}));
        let b = object(json!({"outer": {"y": 2, "x": 1}}));
        assert_eq!(content_hash(&a), content_hash(&b));
    }

    #[test]
    fn different_values_hash_differently() {
        let a = object(json!({"a": 1}));
        let b = object(json!({"a": 2}));
        assert_ne!(content_hash(&a), content_hash(&b));
    }

    #[test]
    fn array_order_changes_hash() {
        let a = object(json!({"list": [1, 2]}));
        let b = object(json!({"list": [2, 1]}));
        assert_ne!(content_hash(&a), content_hash(&b));
    }

    #[test]
    fn signed_zero_hashes_alike() {
        let a = object(json!({"z": 0.0}));
        let b = object(json!({"z": -0.0}));
        assert_eq!(a, b);
        assert_eq!(content_hash(&a), content_hash(&b));
    }

    #[test]
    fn empty_content_hashes_to_zero() {
        assert_eq!(content_hash(&Map::new()), 0);
    }
}
