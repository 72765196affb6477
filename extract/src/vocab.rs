//! OWL, RDFS, SHACL, and SPDX vocabulary IRIs used by the extractor.

/// `owl:Class`.
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
/// `owl:NamedIndividual` — marks enumeration members.
pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
/// `owl:ObjectProperty` — reference-valued property.
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
/// `owl:DatatypeProperty` — literal-valued property.
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";

/// `rdfs:subClassOf`.
pub const RDFS_SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
/// `rdfs:comment`.
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `rdfs:label`.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:range`.
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

/// `sh:NodeShape`.
pub const SH_NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";
/// `sh:property` — links a node shape to its property shapes.
pub const SH_PROPERTY: &str = "http://www.w3.org/ns/shacl#property";
/// `sh:path`.
pub const SH_PATH: &str = "http://www.w3.org/ns/shacl#path";
/// `sh:datatype`.
pub const SH_DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";
/// `sh:class`.
pub const SH_CLASS: &str = "http://www.w3.org/ns/shacl#class";
/// `sh:minCount`.
pub const SH_MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";
/// `sh:maxCount`.
pub const SH_MAX_COUNT: &str = "http://www.w3.org/ns/shacl#maxCount";
/// `sh:nodeKind`.
pub const SH_NODE_KIND: &str = "http://www.w3.org/ns/shacl#nodeKind";
/// `sh:in` — closed value set, `@list` form.
pub const SH_IN: &str = "http://www.w3.org/ns/shacl#in";
/// `sh:message` — free text; the abstract-class marker lives here.
pub const SH_MESSAGE: &str = "http://www.w3.org/ns/shacl#message";

/// Base URI of the SPDX terms namespace. IRIs under this prefix carry a
/// schema sub-area as their next path segment (`Core`, `Software`, ...).
pub const SPDX_BASE_URI: &str = "https://spdx.org/rdf/3.0.1/terms/";

/// Prefix marking locally-scoped blank node identifiers.
pub const BLANK_NODE_PREFIX: &str = "_:";

/// Returns the specification version embedded in the SPDX base URI
/// (the path segment after `rdf/`), e.g. `"3.0.1"`.
#[must_use]
pub fn spec_version() -> &'static str {
    SPDX_BASE_URI
        .split('/')
        .skip_while(|seg| *seg != "rdf")
        .nth(1)
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_comes_from_base_uri() {
        assert_eq!(spec_version(), "3.0.1");
    }
}
