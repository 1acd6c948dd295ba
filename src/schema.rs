//! Schema canonicalization - stable ordering for `required`, `properties` and `items`.

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::types::{REF_KEY, SCHEMA_KEYWORDS, SCHEMA_PARENT_KEYS};

/// Canonicalize a schema in place and return it.
///
/// Sorts `required`, rebuilds `properties` in key order and recurses into
/// every property and into `items`. Non-mappings, and mappings still holding
/// a `$ref`, are left untouched.
pub fn canonicalize_schema(schema: &mut Value) -> &mut Value {
    if let Value::Object(map) = &mut *schema {
        canonicalize_object(map);
    }
    schema
}

/// Whether a mapping should be treated as a schema.
///
/// A mapping qualifies by carrying a schema keyword (`type`, `properties`,
/// `items`, a composition keyword or `$ref`), or by sitting under a key
/// that always holds a schema (`schema`, `items`, `additionalProperties`, ...).
pub fn is_schema_node(map: &Map<String, Value>, parent_key: Option<&str>) -> bool {
    SCHEMA_KEYWORDS.iter().any(|k| map.contains_key(*k))
        || parent_key.is_some_and(|key| SCHEMA_PARENT_KEYS.contains(&key))
}

/// Canonicalize every schema-shaped mapping in a subtree.
///
/// Catches schemas nested in `allOf`/`oneOf`/`anyOf`, `additionalProperties`
/// and other places the operation pass does not visit directly.
pub fn sweep_schemas(value: &mut Value) {
    sweep(value, None);
}

fn sweep(value: &mut Value, parent_key: Option<&str>) {
    match value {
        Value::Object(map) => {
            if is_schema_node(map, parent_key) {
                canonicalize_object(map);
            }
            for (key, child) in map.iter_mut() {
                sweep(child, Some(key.as_str()));
            }
        }
        // Elements inherit the key holding the sequence (e.g. allOf branches).
        Value::Array(items) => {
            for item in items {
                sweep(item, parent_key);
            }
        }
        _ => {}
    }
}

fn canonicalize_object(map: &mut Map<String, Value>) {
    if map.contains_key(REF_KEY) {
        return;
    }

    if let Some(Value::Array(required)) = map.get_mut("required") {
        sort_strings_first(required);
    }

    if let Some(Value::Object(properties)) = map.get_mut("properties") {
        let mut entries: Vec<(String, Value)> = std::mem::take(properties).into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (_, property) in entries.iter_mut() {
            canonicalize_schema(property);
        }
        *properties = entries.into_iter().collect();
    }

    if let Some(items) = map.get_mut("items") {
        canonicalize_schema(items);
    }
}

/// Sort strings lexicographically; other values keep their relative order after them.
pub(crate) fn sort_strings_first(values: &mut [Value]) {
    values.sort_by(|a, b| match (a.as_str(), b.as_str()) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
