//! SPDX ontology extractor.
//!
//! Ingests an SPDX model ontology file — OWL classes and properties, SHACL
//! shape constraints, and enumerated individuals, expressed as an unordered
//! JSON array of JSON-LD graph nodes — and produces the normalized
//! [`Model`](spdx_model::Model) the code generator consumes.
//!
//! Extraction is a single synchronous three-pass traversal over an indexed
//! graph:
//!
//! 1. [`builders`] — materializes `Class` and `Property` records.
//! 2. [`enums`] — groups named individuals into `Enum` records, applying
//!    the enum-vs-subclass disambiguation rule against pass 1's classes.
//! 3. [`shapes`] — resolves SHACL node shapes into ordered field lists on
//!    pass 1's classes, dereferencing property-shape blank nodes and
//!    detecting abstract-class markers.
//!
//! The pass order is a correctness invariant, not an optimization: passes 2
//! and 3 both read classes built in pass 1. All indexing state is owned by
//! a single extraction call, so repeated or interleaved calls never alias.
//!
//! # Example
//!
//! ```
//! let data = br#"[
//!     {"@id": "https://spdx.org/rdf/3.0.1/terms/Core/Element",
//!      "@type": ["http://www.w3.org/2002/07/owl#Class"]}
//! ]"#;
//! let model = spdx_extract::extract_slice(data)?;
//! assert!(model.classes.contains_key("https://spdx.org/rdf/3.0.1/terms/Core/Element"));
//! # Ok::<(), spdx_extract::ExtractError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod classify;
pub mod error;
pub mod graph;
pub mod names;
pub mod vocab;

mod builders;
mod enums;
mod shapes;

use std::path::Path;

use spdx_model::Model;

use classify::{classify, Classification};
use graph::GraphIndex;

pub use error::ExtractError;

/// Extracts the schema model from an ontology file on disk.
///
/// # Errors
///
/// Returns [`ExtractError::Read`] when the file cannot be read and
/// [`ExtractError::Unmarshal`] when its top level is not a JSON array of
/// node objects. Missing statements inside individual nodes are absorbed
/// locally and never abort extraction.
pub fn extract_file(path: impl AsRef<Path>) -> Result<Model, ExtractError> {
    let index = GraphIndex::from_file(path.as_ref())?;
    Ok(extract_from_index(&index))
}

/// Extracts the schema model from raw ontology bytes.
///
/// # Errors
///
/// Returns [`ExtractError::Unmarshal`] when the top level is not a JSON
/// array of node objects.
pub fn extract_slice(data: &[u8]) -> Result<Model, ExtractError> {
    let index = GraphIndex::from_slice(data)?;
    Ok(extract_from_index(&index))
}

/// Runs the three passes over a freshly built index. The classification is
/// computed once per node and consulted by every pass; the predicates are
/// non-exclusive, so one node may participate in several passes.
fn extract_from_index(index: &GraphIndex) -> Model {
    let classified: Vec<(String, Classification)> = index
        .nodes()
        .map(|(id, node)| (id.to_owned(), classify(node)))
        .collect();

    let mut model = Model::new(vocab::spec_version());
    builders::run(&classified, index, &mut model);
    enums::run(&classified, index, &mut model);
    shapes::run(&classified, index, &mut model);
    model
}
