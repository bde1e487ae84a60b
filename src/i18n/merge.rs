//! Deep merge of JSON objects
//!
//! Used to layer caller overrides on top of a base bundle and to accumulate
//! successive override registrations for the same locale.

use serde_json::{Map, Value};

/// Merge `overlay` into a copy of `base`.
///
/// Keys where both sides hold an object are merged recursively; any other
/// overlay value (string, array, null, ...) replaces the base value outright.
/// Neither input is modified.
pub fn deep_merge(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, overlay_value) in overlay {
        let value = match (merged.get(key), overlay_value) {
            (Some(Value::Object(base_nested)), Value::Object(overlay_nested)) => {
                Value::Object(deep_merge(base_nested, overlay_nested))
            }
            _ => overlay_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}
