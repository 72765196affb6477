//! Pass 1: materialize `Class` and `Property` records from classified
//! nodes.

use spdx_model::{Class, Model, Property};

use crate::classify::Classification;
use crate::graph::{first_iri, first_literal_str, GraphIndex, RdfNode};
use crate::names::{local_name, namespace_of};
use crate::vocab::{RDFS_COMMENT, RDFS_LABEL, RDFS_RANGE, RDFS_SUB_CLASS_OF, SH_NODE_KIND};

/// Builds every class and property named by the classification scan.
///
/// A node that is both an object and a datatype property keeps the
/// datatype reading (last write wins, matching the established extractor
/// behavior for overlapping classifications).
pub(crate) fn run(classified: &[(String, Classification)], index: &GraphIndex, model: &mut Model) {
    for (id, c) in classified {
        let Some(node) = index.node(id) else {
            continue;
        };

        if c.is_class {
            model.classes.insert(id.clone(), build_class(id, node));
        }
        if c.is_object_property {
            model
                .properties
                .insert(id.clone(), build_property(id, node, true));
        }
        if c.is_datatype_property {
            model
                .properties
                .insert(id.clone(), build_property(id, node, false));
        }
    }
}

/// Materializes a `Class` from an `owl:Class` node. Only the first
/// `rdfs:subClassOf` statement is honored.
fn build_class(id: &str, node: &RdfNode) -> Class {
    Class {
        id: id.to_owned(),
        name: local_name(id).to_owned(),
        namespace: namespace_of(id).to_owned(),
        comment: comment_of(node),
        parent: first_iri(node, RDFS_SUB_CLASS_OF).map(str::to_owned),
        node_kind: first_iri(node, SH_NODE_KIND).map(str::to_owned),
        properties: Vec::new(),
        is_abstract: false,
    }
}

/// Materializes a `Property` from an `owl:ObjectProperty` or
/// `owl:DatatypeProperty` node.
fn build_property(id: &str, node: &RdfNode, is_object: bool) -> Property {
    Property {
        id: id.to_owned(),
        name: local_name(id).to_owned(),
        namespace: namespace_of(id).to_owned(),
        comment: comment_of(node),
        range: first_iri(node, RDFS_RANGE).map(str::to_owned),
        is_object,
    }
}

/// First `rdfs:comment` literal, or empty.
pub(crate) fn comment_of(node: &RdfNode) -> String {
    first_literal_str(node, RDFS_COMMENT)
        .unwrap_or_default()
        .to_owned()
}

/// First `rdfs:label` literal, or empty.
pub(crate) fn label_of(node: &RdfNode) -> String {
    first_literal_str(node, RDFS_LABEL)
        .unwrap_or_default()
        .to_owned()
}
