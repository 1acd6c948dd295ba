//! Core types and vocabulary for OpenAPI normalization.

use serde::{Deserialize, Serialize};

/// Key marking a reference node.
pub const REF_KEY: &str = "$ref";

/// Only document-local pointers are resolved.
pub const LOCAL_REF_PREFIX: &str = "#/";

/// HTTP methods recognized as operations under a path item.
pub const HTTP_METHODS: &[&str] = &[
    "get", "post", "put", "delete", "patch", "head", "options", "trace",
];

/// Keys whose presence marks a mapping as a schema.
pub const SCHEMA_KEYWORDS: &[&str] = &[
    "type",
    "properties",
    "items",
    "allOf",
    "oneOf",
    "anyOf",
    REF_KEY,
];

/// Parent keys whose values are schemas regardless of shape.
pub const SCHEMA_PARENT_KEYS: &[&str] = &[
    "schema",
    "items",
    "additionalProperties",
    "allOf",
    "oneOf",
    "anyOf",
];

/// `components` sections dropped before comparison.
pub const DROPPED_COMPONENTS: &[&str] = &["examples", "requestBodies", "responses"];

/// `info` fields overwritten with the sentinel.
pub const VOLATILE_INFO_FIELDS: &[&str] = &["title", "version", "description"];

/// Value written over volatile `info` fields by default.
pub const DEFAULT_SENTINEL: &str = "COMPARED";

/// Options for document normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizeOptions {
    /// Replacement for `info.title`, `info.version` and `info.description`.
    pub sentinel: String,
    /// Drop generated `404 Not Found` responses from GET endpoints returning arrays.
    pub prune_list_not_found: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            prune_list_not_found: true,
        }
    }
}

impl NormalizeOptions {
    /// Create options with the default sentinel and 404 pruning enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sentinel written over volatile `info` fields.
    pub fn sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    /// Enable or disable pruning of `404` responses on list endpoints.
    pub fn prune_list_not_found(mut self, prune: bool) -> Self {
        self.prune_list_not_found = prune;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = NormalizeOptions::new();
        assert_eq!(opts.sentinel, "COMPARED");
        assert!(opts.prune_list_not_found);
    }

    #[test]
    fn builder_overrides() {
        let opts = NormalizeOptions::new()
            .sentinel("IGNORED")
            .prune_list_not_found(false);
        assert_eq!(opts.sentinel, "IGNORED");
        assert!(!opts.prune_list_not_found);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: NormalizeOptions =
            serde_json::from_str(r#"{"pruneListNotFound": false}"#).unwrap();
        assert_eq!(opts.sentinel, DEFAULT_SENTINEL);
        assert!(!opts.prune_list_not_found);
    }
}
