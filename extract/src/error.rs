//! Extraction error taxonomy.
//!
//! Only file-level and document-level failures are fatal. Missing
//! statements, dangling blank-node references, and malformed literals are
//! absorbed locally during the passes: the affected field keeps its zero
//! value and extraction continues (ontology files are hand-maintained, and
//! aborting on the first gap would make the tool too brittle for iterative
//! schema authoring).

use std::path::PathBuf;

use thiserror::Error;

/// A fatal extraction failure.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The ontology file could not be read.
    #[error("read ontology file {}", path.display())]
    Read {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The top-level JSON is malformed or not an array of node objects.
    #[error("unmarshal JSON-LD node array")]
    Unmarshal(#[from] serde_json::Error),
}
