//! Pure IRI helpers: local names and schema namespaces.

use crate::vocab::SPDX_BASE_URI;

/// Extracts the local name from an IRI: the substring after the last `/`,
/// or, when the IRI contains no `/` at all, after the last `#`.
///
/// `https://spdx.org/rdf/3.0.1/terms/Core/Element` → `Element`;
/// `urn:example#frag` → `frag`. The `#` branch never applies to
/// hierarchical IRIs, so `http://www.w3.org/2001/XMLSchema#string` yields
/// `XMLSchema#string`.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    if let Some(idx) = iri.rfind('/') {
        return &iri[idx + 1..];
    }
    if let Some(idx) = iri.rfind('#') {
        return &iri[idx + 1..];
    }
    iri
}

/// Extracts the schema sub-area from an SPDX IRI: the path segment
/// immediately after the base URI.
///
/// `https://spdx.org/rdf/3.0.1/terms/Core/Element` → `Core`. Returns an
/// empty string for IRIs outside the SPDX base URI — callers must not
/// conflate that with "no namespace metadata" without also checking the
/// prefix.
#[must_use]
pub fn namespace_of(iri: &str) -> &str {
    let Some(rest) = iri.strip_prefix(SPDX_BASE_URI) else {
        return "";
    };
    match rest.find('/') {
        Some(idx) => &rest[..idx],
        None => rest,
    }
}

/// Extracts an enumeration member name from an individual's IRI: the final
/// path segment.
///
/// `https://spdx.org/rdf/3.0.1/terms/Core/HashAlgorithm/sha256` → `sha256`.
#[must_use]
pub fn enum_value_name(iri: &str) -> &str {
    match iri.rfind('/') {
        Some(idx) => &iri[idx + 1..],
        None => iri,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_name_after_slash() {
        assert_eq!(
            local_name("https://spdx.org/rdf/3.0.1/terms/Core/Element"),
            "Element"
        );
    }

    #[test]
    fn local_name_hash_branch_needs_a_slash_free_iri() {
        assert_eq!(local_name("urn:example#frag"), "frag");
        // A `/` anywhere wins over `#`.
        assert_eq!(
            local_name("http://www.w3.org/2001/XMLSchema#string"),
            "XMLSchema#string"
        );
    }

    #[test]
    fn local_name_plain() {
        assert_eq!(local_name("Element"), "Element");
    }

    #[test]
    fn namespace_inside_base() {
        assert_eq!(
            namespace_of("https://spdx.org/rdf/3.0.1/terms/Core/Element"),
            "Core"
        );
        assert_eq!(
            namespace_of("https://spdx.org/rdf/3.0.1/terms/Software/Package"),
            "Software"
        );
    }

    #[test]
    fn namespace_outside_base_is_empty() {
        assert_eq!(namespace_of("http://www.w3.org/2002/07/owl#Class"), "");
    }

    #[test]
    fn namespace_of_bare_segment() {
        assert_eq!(namespace_of("https://spdx.org/rdf/3.0.1/terms/Core"), "Core");
    }

    #[test]
    fn enum_value_name_is_last_segment() {
        assert_eq!(
            enum_value_name("https://spdx.org/rdf/3.0.1/terms/Core/HashAlgorithm/sha256"),
            "sha256"
        );
        assert_eq!(enum_value_name("sha256"), "sha256");
    }
}
