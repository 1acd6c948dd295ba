//! Reference resolution - inlines local `$ref` pointers into independent copies.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::debug;

use crate::types::{LOCAL_REF_PREFIX, REF_KEY};

/// Resolve a local pointer (`#/components/schemas/Pet`) against the document root.
///
/// Each segment is a literal mapping key; sequences are not indexed.
/// Returns a deep copy of the target, or `None` if the pointer is not local
/// or any segment is missing.
pub fn resolve_pointer(pointer: &str, root: &Value) -> Option<Value> {
    let path = pointer.strip_prefix(LOCAL_REF_PREFIX)?;

    let mut current = root;
    for segment in path.split('/') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current.clone())
}

/// Expand every reference node in the document.
///
/// References are replaced by the recursively expanded target, with sibling
/// keys of the reference node merged in when the target lacks them.
/// Unresolvable references lose their `$ref` key and keep their siblings.
///
/// Cycles are tracked per descent, so the result does not depend on the
/// order in which sibling branches are visited. A pointer already being
/// expanded further up the tree is expanded once more; a third encounter on
/// the same descent is left in place. A schema referencing itself is
/// therefore inlined twice before the innermost `$ref` remains.
pub fn expand_refs(root: &Value) -> Value {
    Expander::new(root).expand(root)
}

struct Expander<'a> {
    root: &'a Value,
    /// Pointers being expanded on the active descent.
    active: HashSet<String>,
    /// Pointers expanded a second time on the active descent.
    reentered: HashSet<String>,
}

impl<'a> Expander<'a> {
    fn new(root: &'a Value) -> Self {
        Self {
            root,
            active: HashSet::new(),
            reentered: HashSet::new(),
        }
    }

    fn expand(&mut self, value: &Value) -> Value {
        match value {
            Value::Object(map) if map.contains_key(REF_KEY) => self.expand_reference(map),
            Value::Object(map) => {
                let mut result = Map::new();
                for (key, child) in map {
                    let expanded = self.expand(child);
                    result.insert(key.clone(), expanded);
                }
                Value::Object(result)
            }
            Value::Array(items) => Value::Array(items.iter().map(|v| self.expand(v)).collect()),
            other => other.clone(),
        }
    }

    fn expand_reference(&mut self, node: &Map<String, Value>) -> Value {
        let pointer = node.get(REF_KEY).and_then(Value::as_str);
        let resolved = pointer.and_then(|p| resolve_pointer(p, self.root).map(|t| (p, t)));

        let Some((pointer, target)) = resolved else {
            debug!(pointer = ?node.get(REF_KEY), "dropping unresolvable reference");
            return Value::Object(self.expand_siblings(node));
        };

        let mut expanded = if self.active.insert(pointer.to_string()) {
            let expanded = self.expand(&target);
            self.active.remove(pointer);
            expanded
        } else if self.reentered.insert(pointer.to_string()) {
            let expanded = self.expand(&target);
            self.reentered.remove(pointer);
            expanded
        } else {
            debug!(pointer, "leaving cyclic reference unexpanded");
            let mut cut = self.expand_siblings(node);
            cut.insert(REF_KEY.to_string(), Value::String(pointer.to_string()));
            return Value::Object(cut);
        };

        // Siblings such as a description override only fill gaps in the target.
        if let Value::Object(expanded_map) = &mut expanded {
            for (key, value) in node {
                if key != REF_KEY && !expanded_map.contains_key(key) {
                    let sibling = self.expand(value);
                    expanded_map.insert(key.clone(), sibling);
                }
            }
        }

        expanded
    }

    fn expand_siblings(&mut self, node: &Map<String, Value>) -> Map<String, Value> {
        let mut siblings = Map::new();
        for (key, value) in node {
            if key != REF_KEY {
                let expanded = self.expand(value);
                siblings.insert(key.clone(), expanded);
            }
        }
        siblings
    }
}
