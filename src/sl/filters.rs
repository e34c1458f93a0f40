//! Object filter construction
//!
//! The API accepts an `objectFilter` query parameter: a JSON document whose
//! structure mirrors the relational path being filtered, with `operation`
//! leaves describing the match. This module builds those documents from
//! dotted property paths.

use serde_json::{json, Map, Value};

/// Builder for API object filters
///
/// Paths are dotted property chains relative to the called service, e.g.
/// `dedicatedHosts.datacenter.name` when listing through the account service.
#[derive(Debug, Default)]
pub struct ObjectFilter {
    root: Map<String, Value>,
}

impl ObjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match condition
    pub fn eq(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.insert(path, json!({ "operation": value.into() }));
        self
    }

    /// Substring condition (`*= value`)
    pub fn query(mut self, path: &str, value: &str) -> Self {
        self.insert(path, json!({ "operation": format!("*= {}", value) }));
        self
    }

    /// Membership condition (`in` against a list of values)
    pub fn in_values(mut self, path: &str, values: &[String]) -> Self {
        self.insert(
            path,
            json!({
                "operation": "in",
                "options": [{ "name": "data", "value": values }]
            }),
        );
        self
    }

    /// Ascending sort directive on a property
    pub fn order_by(mut self, path: &str) -> Self {
        self.insert(
            path,
            json!({
                "operation": "orderBy",
                "options": [{ "name": "sort", "value": ["ASC"] }]
            }),
        );
        self
    }

    /// True when no conditions have been added
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Finish the builder, returning the filter document
    pub fn build(self) -> Value {
        Value::Object(self.root)
    }

    /// Insert a leaf at a dotted path, creating intermediate objects and
    /// merging with branches added by earlier conditions.
    fn insert(&mut self, path: &str, leaf: Value) {
        let mut current = &mut self.root;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                current.insert(segment.to_string(), leaf);
                return;
            }
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            current = entry.as_object_mut().unwrap();
        }
    }
}
