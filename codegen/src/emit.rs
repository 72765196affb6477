//! Rust source emission helpers.

use std::fmt::Write as FmtWrite;
use std::path::Path;

use anyhow::{Context, Result};

/// Marker line placed at the top of every generated file.
const GENERATED_NOTICE: &str = "// Code generated by spdx-gen. DO NOT EDIT.";

/// An in-memory Rust source file under construction.
#[derive(Debug)]
pub struct RustFile {
    /// The accumulated source text.
    pub buf: String,
}

impl RustFile {
    /// Starts a file with the generated-code notice and a `//!` header.
    #[must_use]
    pub fn new(header: &str) -> Self {
        let mut buf = String::new();
        let _ = writeln!(buf, "{GENERATED_NOTICE}");
        let _ = writeln!(buf, "//! {header}");
        buf.push('\n');
        Self { buf }
    }

    /// Appends one line.
    pub fn line(&mut self, s: &str) {
        let _ = writeln!(self.buf, "{s}");
    }

    /// Appends a blank line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends a `///` doc comment at top level.
    pub fn doc_comment(&mut self, s: &str) {
        if s.is_empty() {
            let _ = writeln!(self.buf, "///");
        } else {
            let _ = writeln!(self.buf, "/// {s}");
        }
    }

    /// Appends a `///` doc comment indented one level.
    pub fn indented_doc_comment(&mut self, s: &str) {
        if s.is_empty() {
            let _ = writeln!(self.buf, "    ///");
        } else {
            let _ = writeln!(self.buf, "    /// {s}");
        }
    }

    /// Returns the finished source text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Writes a generated file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error when a directory or the file itself cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("write {}", path.display()))
}

/// Collapses an ontology comment into a single doc-comment line: internal
/// newlines and runs of whitespace become single spaces.
#[must_use]
pub fn normalize_comment(comment: &str) -> String {
    comment.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn file_starts_with_notice_and_header() {
        let f = RustFile::new("Generated types.");
        let out = f.finish();
        assert!(out.starts_with(GENERATED_NOTICE));
        assert!(out.contains("//! Generated types."));
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(
            normalize_comment("An Element  is\na thing.\n"),
            "An Element is a thing."
        );
    }
}
