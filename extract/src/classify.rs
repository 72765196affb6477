//! Per-node type classification.
//!
//! A node's `@type` list is tested against the known vocabulary terms. The
//! predicates are deliberately **not** mutually exclusive: an SPDX class
//! node typically carries `owl:Class` and `sh:NodeShape` at once, and an
//! enumeration's enclosing type can look like a class and be named by its
//! members' type lists simultaneously. The classification is computed once
//! per node and consulted by each pass, preserving the non-exclusive
//! semantics explicitly instead of re-testing predicates in every scan.

use crate::graph::{type_list, RdfNode};
use crate::vocab::{
    OWL_CLASS, OWL_DATATYPE_PROPERTY, OWL_NAMED_INDIVIDUAL, OWL_OBJECT_PROPERTY, SH_NODE_SHAPE,
};

/// Multi-label classification of one graph node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// All `@type` IRIs, in document order.
    pub types: Vec<String>,
    /// Carries `owl:Class`.
    pub is_class: bool,
    /// Carries `owl:ObjectProperty`.
    pub is_object_property: bool,
    /// Carries `owl:DatatypeProperty`.
    pub is_datatype_property: bool,
    /// Carries `owl:NamedIndividual`.
    pub is_named_individual: bool,
    /// Carries `sh:NodeShape`.
    pub is_node_shape: bool,
}

/// Classifies a node by its normalized `@type` list.
#[must_use]
pub fn classify(node: &RdfNode) -> Classification {
    let types: Vec<String> = type_list(node).into_iter().map(str::to_owned).collect();
    let has = |target: &str| types.iter().any(|t| t == target);
    Classification {
        is_class: has(OWL_CLASS),
        is_object_property: has(OWL_OBJECT_PROPERTY),
        is_datatype_property: has(OWL_DATATYPE_PROPERTY),
        is_named_individual: has(OWL_NAMED_INDIVIDUAL),
        is_node_shape: has(SH_NODE_SHAPE),
        types,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node_with_types(types: serde_json::Value) -> RdfNode {
        match json!({ "@type": types }) {
            serde_json::Value::Object(map) => map,
            _ => RdfNode::new(),
        }
    }

    #[test]
    fn class_and_shape_are_not_exclusive() {
        let node = node_with_types(json!([OWL_CLASS, SH_NODE_SHAPE]));
        let c = classify(&node);
        assert!(c.is_class);
        assert!(c.is_node_shape);
        assert!(!c.is_named_individual);
    }

    #[test]
    fn single_string_type_form() {
        let node = node_with_types(json!(OWL_NAMED_INDIVIDUAL));
        let c = classify(&node);
        assert!(c.is_named_individual);
        assert_eq!(c.types, vec![OWL_NAMED_INDIVIDUAL.to_owned()]);
    }

    #[test]
    fn untyped_node_matches_nothing() {
        let c = classify(&RdfNode::new());
        assert_eq!(c, Classification::default());
    }

    #[test]
    fn individual_keeps_enclosing_type_in_list() {
        let enclosing = "https://spdx.org/rdf/3.0.1/terms/Core/HashAlgorithm";
        let node = node_with_types(json!([OWL_NAMED_INDIVIDUAL, enclosing]));
        let c = classify(&node);
        assert!(c.is_named_individual);
        assert!(c.types.iter().any(|t| t == enclosing));
    }
}
