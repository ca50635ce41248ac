//! Structured side-data attached to a single log call

use serde::Serialize;
use serde_json::{Map, Value};

/// String-keyed map of JSON values; key order is not significant
pub type LogMeta = Map<String, Value>;

/// Convert caller-supplied meta into JSON.
///
/// Returns `None` when there is nothing worth appending: serialization failed
/// or the value carries no entries (see [`meta_present`]).
pub(crate) fn meta_value<T: Serialize + ?Sized>(meta: &T) -> Option<Value> {
    serde_json::to_value(meta).ok().filter(meta_present)
}

/// Whether a meta value has entries to show.
///
/// Non-empty objects, arrays and strings count; `null`, numbers, bools and
/// empty containers do not.
pub(crate) fn meta_present(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_empty_meta_is_dropped() {
        assert!(meta_value(&LogMeta::new()).is_none());
        assert!(meta_value(&Option::<u8>::None).is_none());
    }

    #[test]
    fn test_empty_non_objects_are_dropped() {
        assert!(meta_value(&json!([])).is_none());
        assert!(meta_value(&json!("")).is_none());
        assert!(meta_value(&json!(0)).is_none());
        assert!(meta_value(&json!(true)).is_none());
    }

    #[test]
    fn test_non_empty_sequences_kept() {
        assert_eq!(meta_value(&json!(["a"])).unwrap().to_string(), r#"["a"]"#);
        assert_eq!(meta_value(&"tag").unwrap().to_string(), r#""tag""#);
    }

    #[test]
    fn test_object_meta() {
        let value = meta_value(&json!({"a": 1})).unwrap();
        assert_eq!(value.to_string(), r#"{"a":1}"#);
    }

    #[test]
    fn test_unserializable_meta() {
        // JSON object keys must be strings
        let mut bad = HashMap::new();
        bad.insert(vec![1u8, 2], "x");
        assert!(meta_value(&bad).is_none());
    }
}
