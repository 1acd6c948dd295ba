//! Reading OpenAPI documents and writing their canonical JSON form.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::NormalizeError;

/// Load a document from a JSON file.
///
/// # Errors
///
/// Returns `NormalizeError::FileNotFound` if the file doesn't exist,
/// or `NormalizeError::InvalidJson` if the file isn't valid JSON.
pub fn load_document(path: &Path) -> Result<Value, NormalizeError> {
    if !path.exists() {
        return Err(NormalizeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| NormalizeError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_document_str(&content)
}

/// Load a document from a JSON string.
///
/// # Errors
///
/// Returns `NormalizeError::InvalidJson` if the string isn't valid JSON.
pub fn load_document_str(content: &str) -> Result<Value, NormalizeError> {
    serde_json::from_str(content).map_err(|source| NormalizeError::InvalidJson { source })
}

/// Rebuild every mapping with its keys in lexicographic order.
pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// Serialize with sorted keys and two-space indentation.
///
/// Two documents that normalize to the same tree produce identical text.
pub fn to_canonical_string(value: &Value) -> Result<String, NormalizeError> {
    serde_json::to_string_pretty(&sort_keys(value))
        .map_err(|source| NormalizeError::Serialize { source })
}

/// Write a document to `path` in canonical form.
///
/// # Errors
///
/// Returns `NormalizeError::WriteError` if the file cannot be written.
pub fn write_document(path: &Path, value: &Value) -> Result<(), NormalizeError> {
    let content = to_canonical_string(value)?;
    std::fs::write(path, content).map_err(|source| NormalizeError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}
