//! OpenAPI Normalizer
//!
//! Canonicalizes OpenAPI 3 documents so that specs produced by different
//! generators can be compared by plain structural equality.
//!
//! Normalization inlines every local `$ref`, drops volatile and reusable
//! sections, sorts parameters, responses, tags, `required` lists and
//! `properties`, and erases generator-specific noise such as trailing
//! periods in descriptions or `*/*` media types.
//!
//! # Example
//!
//! ```
//! use openapi_normalize::{normalize, NormalizeOptions};
//! use serde_json::json;
//!
//! let document = json!({
//!     "openapi": "3.0.1",
//!     "info": { "title": "Pets", "version": "1.0" },
//!     "paths": {
//!         "/pets": {
//!             "get": {
//!                 "responses": {
//!                     "200": {
//!                         "description": "OK.",
//!                         "content": {
//!                             "*/*": { "schema": { "$ref": "#/components/schemas/Pet" } }
//!                         }
//!                     }
//!                 }
//!             }
//!         }
//!     },
//!     "components": {
//!         "schemas": {
//!             "Pet": { "type": "object", "required": ["name", "id"] }
//!         }
//!     }
//! });
//!
//! let normalized = normalize(document, &NormalizeOptions::default());
//! let ok = &normalized["paths"]["/pets"]["get"]["responses"]["200"];
//!
//! assert_eq!(ok["description"], "OK");
//! assert_eq!(ok["content"]["application/json"]["schema"]["required"], json!(["id", "name"]));
//! assert_eq!(normalized["info"]["title"], "COMPARED");
//! ```
//!
//! # Rules
//!
//! | Element | Normal form |
//! |---------|-------------|
//! | `$ref` | Inlined copy of the target, siblings merged |
//! | `required`, `properties` | Sorted lexicographically |
//! | `parameters` | Sorted by `(in, name)`; query `required: false` dropped |
//! | `responses` | Numeric status codes first, then `default` |
//! | media types | `*/*` becomes `application/json`, keys sorted |
//! | `tags` | `country-controller` becomes `CountryController`, sorted |
//! | descriptions | Trailing periods and whitespace removed |

mod error;
mod loader;
mod normalizer;
mod operation;
mod resolver;
mod schema;
mod types;

pub use error::NormalizeError;
pub use loader::{load_document, load_document_str, sort_keys, to_canonical_string, write_document};
pub use normalizer::{equivalent, normalize, normalize_with_defaults, strip_examples};
pub use operation::{
    canonicalize_operation, canonicalize_tag, compare_status_codes, normalize_content_type,
    normalize_description, normalize_parameters,
};
pub use resolver::{expand_refs, resolve_pointer};
pub use schema::{canonicalize_schema, is_schema_node, sweep_schemas};
pub use types::{NormalizeOptions, DEFAULT_SENTINEL, HTTP_METHODS};
