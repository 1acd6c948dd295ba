//! Document normalization - the full pipeline over one OpenAPI document.
//!
//! # Pipeline
//!
//! `expand refs → strip volatile fields → components → operations → schema sweep → examples → tags`
//!
//! Normalizing an already normalized document returns it unchanged.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::operation::{canonicalize_operation, normalize_parameters};
use crate::resolver::expand_refs;
use crate::schema::{canonicalize_schema, sweep_schemas};
use crate::types::{NormalizeOptions, DROPPED_COMPONENTS, HTTP_METHODS, VOLATILE_INFO_FIELDS};

/// Normalize an OpenAPI document for comparison.
///
/// Never fails: shapes the pipeline does not understand are left as they are.
pub fn normalize(document: Value, options: &NormalizeOptions) -> Value {
    let mut document = expand_refs(&document);
    if let Value::Object(root) = &mut document {
        normalize_root(root, options);
    }
    document
}

/// Normalize with [`NormalizeOptions::default`].
pub fn normalize_with_defaults(document: Value) -> Value {
    normalize(document, &NormalizeOptions::default())
}

/// Whether two documents normalize to the same tree.
pub fn equivalent(left: &Value, right: &Value, options: &NormalizeOptions) -> bool {
    normalize(left.clone(), options) == normalize(right.clone(), options)
}

/// Recursively remove every `example` and `examples` key.
pub fn strip_examples(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.shift_remove("examples");
            map.shift_remove("example");
            for child in map.values_mut() {
                strip_examples(child);
            }
        }
        Value::Array(items) => {
            for item in items {
                strip_examples(item);
            }
        }
        _ => {}
    }
}

// --- Internal implementation ---

fn normalize_root(root: &mut Map<String, Value>, options: &NormalizeOptions) {
    root.shift_remove("servers");

    if let Some(Value::Object(info)) = root.get_mut("info") {
        for field in VOLATILE_INFO_FIELDS {
            info.insert(field.to_string(), Value::String(options.sentinel.clone()));
        }
    }

    if let Some(Value::Object(components)) = root.get_mut("components") {
        normalize_components(components);
    }

    if let Some(paths) = root.get_mut("paths") {
        if let Value::Object(items) = &mut *paths {
            debug!(paths = items.len(), "normalizing path items");
            for (path, item) in items.iter_mut() {
                normalize_path_item(path, item, options);
            }
        }
        sweep_schemas(paths);
        strip_examples(paths);
    }

    if let Some(Value::Array(tags)) = root.get_mut("tags") {
        tags.sort_by_key(tag_sort_key);
    }
}

fn normalize_components(components: &mut Map<String, Value>) {
    for section in DROPPED_COMPONENTS {
        components.shift_remove(*section);
    }

    if let Some(Value::Object(schemas)) = components.get_mut("schemas") {
        for schema in schemas.values_mut() {
            canonicalize_schema(schema);
            if let Value::Object(map) = schema {
                map.shift_remove("example");
            }
        }
    }
}

fn normalize_path_item(path: &str, item: &mut Value, options: &NormalizeOptions) {
    let Value::Object(map) = item else {
        return;
    };

    for &method in HTTP_METHODS {
        if let Some(operation) = map.get_mut(method) {
            trace!(path, method, "canonicalizing operation");
            canonicalize_operation(method, operation, options);
        }
    }

    if let Some(Value::Array(parameters)) = map.get_mut("parameters") {
        normalize_parameters(parameters);
    }
}

fn tag_sort_key(tag: &Value) -> String {
    match tag {
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}
