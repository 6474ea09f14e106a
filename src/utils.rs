//! Utility helpers shared across the module.

use serde_json::Value;

/// Drop the keys of a JSON object whose values are `null` or an empty
/// string. Applied to PATCH payloads before they go out so a partial form
/// submit does not blank out server-side fields.
///
/// The scrub is shallow: only top-level keys are inspected, and non-object
/// values pass through untouched.
pub fn remove_empty_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !is_empty_value(v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn strips_null_and_empty_string_values() {
        let payload = json!({ "a": 1, "b": "", "c": null, "d": "x" });
        assert_eq!(remove_empty_keys(&payload), json!({ "a": 1, "d": "x" }));
    }

    #[test]
    fn keeps_false_zero_and_empty_collections() {
        let payload = json!({ "active": false, "count": 0, "tags": [], "meta": {} });
        assert_eq!(remove_empty_keys(&payload), payload);
    }

    #[test]
    fn non_object_values_pass_through() {
        assert_eq!(remove_empty_keys(&json!([1, 2])), json!([1, 2]));
        assert_eq!(remove_empty_keys(&json!("")), json!(""));
        assert_eq!(remove_empty_keys(&json!(null)), json!(null));
    }

    proptest! {
        #[test]
        fn scrubbed_objects_contain_no_empty_values(
            entries in prop::collection::hash_map("[a-z]{1,8}", "[a-z]{0,8}", 0..16)
        ) {
            let payload = Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            );
            let scrubbed = remove_empty_keys(&payload);
            let map = scrubbed.as_object().unwrap();

            for value in map.values() {
                prop_assert_ne!(value, &Value::Null);
                prop_assert!(value.as_str().map_or(true, |s| !s.is_empty()));
            }
            for (key, value) in &entries {
                if !value.is_empty() {
                    prop_assert_eq!(map.get(key), Some(&Value::String(value.clone())));
                }
            }
        }
    }
}
