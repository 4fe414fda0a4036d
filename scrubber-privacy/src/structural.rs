//! Walks JSON-like values, rewriting string leaves and nothing else.

use serde_json::{Map, Value};

use scrubber_core::constants::{METADATA_FIELD, TEST_CASE_PII_FIELDS};

/// Rebuild `value` with `f` applied to every string leaf. Keys, array order
/// and non-string scalars are kept as they are.
pub fn map_strings<F>(value: &Value, f: &mut F) -> Value
where
    F: FnMut(&str) -> String,
{
    match value {
        Value::String(s) => Value::String(f(s)),
        Value::Array(items) => Value::Array(map_array(items, f)),
        Value::Object(map) => Value::Object(map_object(map, f)),
        other => other.clone(),
    }
}

pub fn map_object<F>(map: &Map<String, Value>, f: &mut F) -> Map<String, Value>
where
    F: FnMut(&str) -> String,
{
    map.iter()
        .map(|(key, value)| (key.clone(), map_strings(value, f)))
        .collect()
}

pub fn map_array<F>(items: &[Value], f: &mut F) -> Vec<Value>
where
    F: FnMut(&str) -> String,
{
    items.iter().map(|item| map_strings(item, f)).collect()
}

/// Copy of a test case record with `f` applied to its free-text fields and
/// to the string values directly under `metadata`. Non-string values in
/// those fields, and every other field, pass through.
pub fn map_test_case<F>(record: &Map<String, Value>, f: &mut F) -> Map<String, Value>
where
    F: FnMut(&str) -> String,
{
    let mut out = record.clone();
    for field in TEST_CASE_PII_FIELDS {
        if let Some(Value::String(text)) = out.get_mut(field) {
            let rewritten = f(text);
            *text = rewritten;
        }
    }
    if let Some(Value::Object(metadata)) = out.get_mut(METADATA_FIELD) {
        for value in metadata.values_mut() {
            if let Value::String(text) = value {
                let rewritten = f(text);
                *text = rewritten;
            }
        }
    }
    out
}
