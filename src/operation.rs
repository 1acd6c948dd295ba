//! Operation canonicalization - parameters, bodies, responses and tags.

use std::cmp::Ordering;

use serde_json::{Map, Value};
use tracing::debug;

use crate::schema::{canonicalize_schema, sort_strings_first};
use crate::types::NormalizeOptions;

/// Description of the response most generators emit for a bare 404.
const GENERATED_NOT_FOUND: &str = "Not Found";

/// Normalize free-text descriptions.
///
/// Leading whitespace and any trailing run of periods and whitespace are
/// removed, so `"Bad Request."` and `"Bad Request"` compare equal while a
/// longer description stays distinct.
pub fn normalize_description(description: &str) -> String {
    description
        .trim_start()
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .to_string()
}

/// Map the wildcard media type onto `application/json`.
pub fn normalize_content_type(content_type: &str) -> &str {
    if content_type == "*/*" {
        "application/json"
    } else {
        content_type
    }
}

/// Canonical form of a tag name.
///
/// `-` and `_` become word breaks, every word starts with a capital and the
/// breaks are dropped: `country-controller` becomes `CountryController`.
pub fn canonicalize_tag(tag: &str) -> String {
    title_case(&tag.replace(['-', '_'], " ")).replace(' ', "")
}

/// Order response keys: integer status codes numerically, then everything else.
pub fn compare_status_codes(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Sort parameters by `(in, name)` and normalize each one.
///
/// Query parameters with `required: false` drop the key, since that is the
/// default. Parameter schemas are canonicalized.
pub fn normalize_parameters(parameters: &mut [Value]) {
    parameters.sort_by(|a, b| parameter_key(a).cmp(&parameter_key(b)));

    for parameter in parameters.iter_mut() {
        let Value::Object(map) = parameter else {
            continue;
        };
        normalize_description_field(map);

        let is_query = map.get("in").and_then(Value::as_str) == Some("query");
        if is_query && map.get("required") == Some(&Value::Bool(false)) {
            map.shift_remove("required");
        }

        if let Some(schema) = map.get_mut("schema") {
            canonicalize_schema(schema);
        }
    }
}

/// Canonicalize one operation in place.
///
/// `method` is the lowercase HTTP method the operation is registered under.
pub fn canonicalize_operation(method: &str, operation: &mut Value, options: &NormalizeOptions) {
    let Value::Object(map) = operation else {
        return;
    };

    normalize_description_field(map);

    if let Some(Value::Array(parameters)) = map.get_mut("parameters") {
        normalize_parameters(parameters);
    }

    if let Some(body) = map.get_mut("requestBody") {
        normalize_body(body);
    }

    if let Some(Value::Object(responses)) = map.get_mut("responses") {
        normalize_responses(responses);
    }

    if let Some(Value::Array(tags)) = map.get_mut("tags") {
        for tag in tags.iter_mut() {
            if let Value::String(name) = tag {
                *name = canonicalize_tag(name);
            }
        }
        sort_strings_first(tags);
    }

    if options.prune_list_not_found && method == "get" {
        if let Some(Value::Object(responses)) = map.get_mut("responses") {
            prune_list_not_found(responses);
        }
    }
}

// --- Internal implementation ---

fn parameter_key(parameter: &Value) -> (&str, &str) {
    let location = parameter.get("in").and_then(Value::as_str).unwrap_or("");
    let name = parameter.get("name").and_then(Value::as_str).unwrap_or("");
    (location, name)
}

fn normalize_description_field(map: &mut Map<String, Value>) {
    if let Some(Value::String(description)) = map.get_mut("description") {
        *description = normalize_description(description);
    }
}

/// Shared by request bodies and responses.
fn normalize_body(body: &mut Value) {
    let Value::Object(map) = body else {
        return;
    };
    normalize_description_field(map);

    if let Some(Value::Object(content)) = map.get_mut("content") {
        normalize_content(content);
    }
}

fn normalize_content(content: &mut Map<String, Value>) {
    let mut normalized = Map::new();
    for (media_type, mut entry) in std::mem::take(content) {
        if let Some(schema) = entry.get_mut("schema") {
            canonicalize_schema(schema);
        }
        // A later duplicate (`*/*` next to `application/json`) wins.
        normalized.insert(normalize_content_type(&media_type).to_string(), entry);
    }

    let mut entries: Vec<(String, Value)> = normalized.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    *content = entries.into_iter().collect();
}

fn normalize_responses(responses: &mut Map<String, Value>) {
    let mut entries: Vec<(String, Value)> = std::mem::take(responses).into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| compare_status_codes(a, b));
    for (_, response) in entries.iter_mut() {
        normalize_body(response);
    }
    *responses = entries.into_iter().collect();
}

fn prune_list_not_found(responses: &mut Map<String, Value>) {
    if !returns_array(responses) {
        return;
    }
    if responses.get("404").is_some_and(is_generated_not_found) {
        debug!("dropping generated 404 from list endpoint");
        responses.shift_remove("404");
    }
}

fn returns_array(responses: &Map<String, Value>) -> bool {
    responses
        .get("200")
        .and_then(|ok| ok.get("content"))
        .and_then(Value::as_object)
        .is_some_and(|content| {
            content.values().any(|entry| {
                entry
                    .get("schema")
                    .and_then(|schema| schema.get("type"))
                    .and_then(Value::as_str)
                    == Some("array")
            })
        })
}

fn is_generated_not_found(response: &Value) -> bool {
    let Value::Object(map) = response else {
        return false;
    };
    match map.get("description") {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty() || text == GENERATED_NOT_FOUND,
        // Empty values count as a missing description.
        Some(Value::Bool(flag)) => !flag,
        Some(Value::Number(number)) => number.as_f64() == Some(0.0),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(fields)) => fields.is_empty(),
    }
}

/// Uppercase the first cased character of each word; the rest is kept as written.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && !previous_cased {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        previous_cased = cased;
    }
    result
}
