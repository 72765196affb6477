//! Normalized SPDX schema model.
//!
//! These types are the implementation-agnostic output of the ontology
//! extractor: the set of record types (classes), their fields with
//! cardinality and type constraints, their inheritance parent, and their
//! enumerations. The extractor in `spdx-extract` builds one [`Model`] per
//! ontology file; the generator in `spdx-codegen` consumes it read-only.
//!
//! Every map is keyed by full IRI, and every key equals the `id` field of
//! its value. Maps are `BTreeMap` so downstream code generation iterates in
//! a deterministic order.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel for an unbounded `sh:maxCount`. The only negative value a
/// [`PropertyRef::max_count`] ever holds.
pub const UNBOUNDED: i64 = -1;

/// The parsed SPDX specification model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Specification version, e.g. `"3.0.1"`.
    pub spec_version: String,
    /// All classes, keyed by full IRI.
    pub classes: BTreeMap<String, Class>,
    /// All properties, keyed by full IRI.
    pub properties: BTreeMap<String, Property>,
    /// All enumerations, keyed by the IRI of the enclosing type.
    pub enums: BTreeMap<String, Enum>,
}

impl Model {
    /// Creates an empty model for the given specification version.
    #[must_use]
    pub fn new(spec_version: impl Into<String>) -> Self {
        Self {
            spec_version: spec_version.into(),
            classes: BTreeMap::new(),
            properties: BTreeMap::new(),
            enums: BTreeMap::new(),
        }
    }
}

/// An SPDX class definition (`owl:Class`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Full IRI, e.g. `https://spdx.org/rdf/3.0.1/terms/Core/Element`.
    pub id: String,
    /// Local name, e.g. `Element`.
    pub name: String,
    /// Schema sub-area, e.g. `Core` or `Software`. Empty when the IRI is
    /// outside the SPDX base URI.
    pub namespace: String,
    /// `rdfs:comment` literal, if present.
    pub comment: String,
    /// IRI of the superclass (`rdfs:subClassOf`), if any. Only the first
    /// statement is honored when multiple are present.
    pub parent: Option<String>,
    /// Fields resolved from the class's SHACL node shape, in shape order.
    pub properties: Vec<PropertyRef>,
    /// True when the class's shape carries an abstract-class marker.
    pub is_abstract: bool,
    /// `sh:nodeKind` IRI declared on the class node, if any.
    pub node_kind: Option<String>,
}

/// An SPDX property definition (`owl:ObjectProperty` or
/// `owl:DatatypeProperty`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Full IRI.
    pub id: String,
    /// Local name.
    pub name: String,
    /// Schema sub-area; empty outside the SPDX base URI.
    pub namespace: String,
    /// `rdfs:comment` literal, if present.
    pub comment: String,
    /// `rdfs:range` IRI — the value type, if declared.
    pub range: Option<String>,
    /// True for `owl:ObjectProperty` (reference-valued), false for
    /// `owl:DatatypeProperty` (literal-valued).
    pub is_object: bool,
}

/// A field of a class, resolved from one SHACL property shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRef {
    /// `sh:path` — the property IRI.
    pub path: String,
    /// Local name of the path IRI.
    pub name: String,
    /// `sh:datatype` IRI, if present.
    pub data_type: Option<String>,
    /// `sh:class` IRI — set when the field's value is itself a typed node.
    pub class_ref: Option<String>,
    /// `sh:minCount`; 0 unless an explicit literal is present.
    pub min_count: i64,
    /// `sh:maxCount`; [`UNBOUNDED`] unless an explicit literal is present.
    pub max_count: i64,
    /// `sh:nodeKind` IRI, if present.
    pub node_kind: Option<String>,
    /// `sh:in` — ordered closed value set, for property-level enumeration
    /// constraints.
    pub in_values: Vec<String>,
}

impl Default for PropertyRef {
    fn default() -> Self {
        Self {
            path: String::new(),
            name: String::new(),
            data_type: None,
            class_ref: None,
            min_count: 0,
            max_count: UNBOUNDED,
            node_kind: None,
            in_values: Vec::new(),
        }
    }
}

impl PropertyRef {
    /// Returns true when the field admits any number of values.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.max_count == UNBOUNDED
    }
}

/// An enumeration type, assembled from `owl:NamedIndividual` nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    /// Full IRI of the enclosing type.
    pub id: String,
    /// Local name.
    pub name: String,
    /// Schema sub-area; empty outside the SPDX base URI.
    pub namespace: String,
    /// Comment copied from the corresponding class node, if one exists.
    pub comment: String,
    /// Member values, in the order individuals were encountered.
    pub values: Vec<EnumValue>,
}

/// A single enumeration member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// The individual's full IRI.
    pub id: String,
    /// Local name, e.g. `sha256`.
    pub name: String,
    /// `rdfs:label` literal, if present.
    pub label: String,
    /// `rdfs:comment` literal, if present.
    pub comment: String,
}
