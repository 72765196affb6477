//! Graph indexing and permissive JSON-LD node accessors.
//!
//! The ontology-description format is a flat JSON array of node objects,
//! not a `@graph`-wrapped document. [`GraphIndex`] partitions the array
//! into IRI-keyed and blank-node-keyed lookup tables; blank nodes are only
//! locally resolvable (referenced by other nodes in the same document,
//! never by downstream data), so they live in a separate side table.
//!
//! All value accessors are permissive: a missing key, a non-array value, or
//! a literal of the wrong shape yields `None`/empty rather than an error.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::ExtractError;
use crate::vocab::BLANK_NODE_PREFIX;

/// A node in the JSON-LD graph: `@id`, `@type`, plus arbitrary
/// property-IRI keys.
pub type RdfNode = serde_json::Map<String, Value>;

/// Lookup tables over one parsed ontology document.
///
/// Built fresh for every extraction call — the tables are call-scoped
/// state, never shared across inputs.
#[derive(Debug, Default)]
pub struct GraphIndex {
    nodes: HashMap<String, RdfNode>,
    blank_nodes: HashMap<String, RdfNode>,
}

impl GraphIndex {
    /// Parses the raw bytes of an ontology document and indexes its nodes.
    ///
    /// Nodes without an `@id` are silently dropped; malformed entries do
    /// not abort extraction.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Unmarshal`] when the top level is not a JSON
    /// array of objects.
    pub fn from_slice(data: &[u8]) -> Result<Self, ExtractError> {
        let raw: Vec<RdfNode> = serde_json::from_slice(data)?;

        let mut index = Self::default();
        for node in raw {
            let Some(id) = node.get("@id").and_then(Value::as_str) else {
                continue;
            };
            let id = id.to_owned();
            if id.starts_with(BLANK_NODE_PREFIX) {
                index.blank_nodes.insert(id, node);
            } else {
                index.nodes.insert(id, node);
            }
        }
        Ok(index)
    }

    /// Reads and indexes an ontology file.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Read`] when the file cannot be read and
    /// [`ExtractError::Unmarshal`] when its content is not a JSON array of
    /// objects.
    pub fn from_file(path: &Path) -> Result<Self, ExtractError> {
        let data = std::fs::read(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&data)
    }

    /// Iterates over all IRI-identified nodes.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &RdfNode)> {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }

    /// Looks up an IRI-identified node.
    #[must_use]
    pub fn node(&self, iri: &str) -> Option<&RdfNode> {
        self.nodes.get(iri)
    }

    /// Looks up a blank node by its `_:` label.
    #[must_use]
    pub fn blank_node(&self, id: &str) -> Option<&RdfNode> {
        self.blank_nodes.get(id)
    }
}

/// Returns the node's `@type` IRIs, normalizing the single-string and
/// array forms into one ordered sequence.
#[must_use]
pub fn type_list(node: &RdfNode) -> Vec<&str> {
    match node.get("@type") {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(arr)) => arr.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Returns the array of values under a property-IRI key, or an empty slice
/// when the key is absent or its value is not an array.
#[must_use]
pub fn values<'a>(node: &'a RdfNode, key: &str) -> &'a [Value] {
    match node.get(key) {
        Some(Value::Array(arr)) => arr,
        _ => &[],
    }
}

/// Returns the `@id` of the first value under `key`, for object-reference
/// statements of the form `{"@id": "<iri>"}`.
#[must_use]
pub fn first_iri<'a>(node: &'a RdfNode, key: &str) -> Option<&'a str> {
    values(node, key)
        .first()
        .and_then(|v| v.get("@id"))
        .and_then(Value::as_str)
}

/// Returns the `@value` string of the first value under `key`, for literal
/// statements of the form `{"@value": "...", "@language"?: "..."}`.
#[must_use]
pub fn first_literal_str<'a>(node: &'a RdfNode, key: &str) -> Option<&'a str> {
    values(node, key)
        .first()
        .and_then(|v| v.get("@value"))
        .and_then(Value::as_str)
}

/// Returns the `@value` integer of the first value under `key`.
#[must_use]
pub fn first_literal_int(node: &RdfNode, key: &str) -> Option<i64> {
    values(node, key)
        .first()
        .and_then(|v| v.get("@value"))
        .and_then(Value::as_i64)
}

/// Returns the ordered `@id` list of the first value under `key`, for
/// `{"@list": [{"@id": ...}, ...]}` statements.
#[must_use]
pub fn iri_list(node: &RdfNode, key: &str) -> Vec<String> {
    let Some(list) = values(node, key)
        .first()
        .and_then(|v| v.get("@list"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };
    list.iter()
        .filter_map(|item| item.get("@id").and_then(Value::as_str))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node_from(value: Value) -> RdfNode {
        match value {
            Value::Object(map) => map,
            _ => RdfNode::new(),
        }
    }

    #[test]
    fn indexes_iri_and_blank_nodes_separately() {
        let data = json!([
            {"@id": "https://x/terms/Core/Foo"},
            {"@id": "_:b0"},
            {"no_id": true}
        ]);
        let index = GraphIndex::from_slice(data.to_string().as_bytes()).unwrap();
        assert!(index.node("https://x/terms/Core/Foo").is_some());
        assert!(index.blank_node("_:b0").is_some());
        assert!(index.node("_:b0").is_none());
        assert_eq!(index.nodes().count(), 1);
    }

    #[test]
    fn non_array_top_level_is_unmarshal_error() {
        let err = GraphIndex::from_slice(b"{}").unwrap_err();
        assert!(matches!(err, ExtractError::Unmarshal(_)));
    }

    #[test]
    fn array_of_non_objects_is_unmarshal_error() {
        let err = GraphIndex::from_slice(b"[1, 2]").unwrap_err();
        assert!(matches!(err, ExtractError::Unmarshal(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = GraphIndex::from_file(Path::new("/nonexistent/model.json-ld")).unwrap_err();
        match err {
            ExtractError::Read { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/model.json-ld"));
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn type_list_normalizes_string_and_array() {
        let single = node_from(json!({"@type": "http://a"}));
        assert_eq!(type_list(&single), vec!["http://a"]);

        let many = node_from(json!({"@type": ["http://a", "http://b"]}));
        assert_eq!(type_list(&many), vec!["http://a", "http://b"]);

        let none = node_from(json!({}));
        assert!(type_list(&none).is_empty());
    }

    #[test]
    fn first_iri_reads_object_reference() {
        let node = node_from(json!({"p": [{"@id": "http://a"}, {"@id": "http://b"}]}));
        assert_eq!(first_iri(&node, "p"), Some("http://a"));
        assert_eq!(first_iri(&node, "missing"), None);
    }

    #[test]
    fn literal_accessors_tolerate_wrong_shapes() {
        let node = node_from(json!({
            "s": [{"@value": "text", "@language": "en"}],
            "n": [{"@value": 3}],
            "bad": ["plain string"]
        }));
        assert_eq!(first_literal_str(&node, "s"), Some("text"));
        assert_eq!(first_literal_int(&node, "n"), Some(3));
        assert_eq!(first_literal_str(&node, "bad"), None);
        assert_eq!(first_literal_int(&node, "s"), None);
    }

    #[test]
    fn iri_list_reads_list_form() {
        let node = node_from(json!({
            "in": [{"@list": [{"@id": "http://a"}, {"@id": "http://b"}]}]
        }));
        assert_eq!(iri_list(&node, "in"), vec!["http://a", "http://b"]);
        assert!(iri_list(&node, "missing").is_empty());
    }
}
