//! SPDX code generator.
//!
//! Consumes the [`Model`](spdx_model::Model) produced by `spdx-extract` and
//! emits a Rust module tree: one struct per class, fields per resolved
//! property shape, one enum per enumeration, one module per schema
//! namespace, plus a `lib.rs` tying them together. Output is fully
//! deterministic — the model's maps iterate in IRI order and member lists
//! are sorted before emission — so regenerating from an unchanged ontology
//! is a no-op diff.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod enums;
pub mod mapping;
pub mod structs;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use spdx_model::{Class, Model};

use emit::RustFile;
use mapping::module_name;

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of structs generated.
    pub struct_count: usize,
    /// Number of struct fields generated.
    pub field_count: usize,
    /// Number of enums generated.
    pub enum_count: usize,
    /// Number of enum variants generated.
    pub variant_count: usize,
    /// Files written, relative to the output directory.
    pub files: Vec<String>,
}

/// Generates the complete model crate source for `pkg` into `out_dir`.
///
/// # Errors
///
/// Returns an error if any output file cannot be written.
pub fn generate(model: &Model, pkg: &str, out_dir: &Path) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();

    // 1. enums.rs
    let enums_content = enums::generate_enums_file(model);
    emit::write_file(&out_dir.join("enums.rs"), &enums_content)?;
    report.files.push("enums.rs".to_owned());
    report.enum_count = model.enums.len();
    report.variant_count = model.enums.values().map(|e| e.values.len()).sum();

    // 2. One module per schema namespace
    let by_namespace = classes_by_namespace(model);
    for (namespace, classes) in &by_namespace {
        let content = structs::generate_namespace_module(namespace, classes, model);
        let file = format!("{}.rs", module_name(namespace));
        emit::write_file(&out_dir.join(&file), &content)?;
        report.files.push(file);

        report.struct_count += classes.len();
        report.field_count += classes
            .iter()
            .copied()
            .map(structs::field_count)
            .sum::<usize>();
    }

    // 3. lib.rs
    let modules: Vec<String> = by_namespace.keys().map(|ns| module_name(ns)).collect();
    let lib_content = generate_lib_rs(model, pkg, &modules);
    emit::write_file(&out_dir.join("lib.rs"), &lib_content)?;
    report.files.push("lib.rs".to_owned());

    Ok(report)
}

/// Groups generatable classes by schema namespace, sorted by class name.
///
/// Classes outside the SPDX base URI (empty namespace) are foreign terms
/// and are skipped. Classes whose IRI was promoted to an enumeration are
/// represented by the enum, not a struct — the extractor guarantees such
/// an IRI never names a parented class.
fn classes_by_namespace(model: &Model) -> BTreeMap<String, Vec<&Class>> {
    let mut by_namespace: BTreeMap<String, Vec<&Class>> = BTreeMap::new();
    for class in model.classes.values() {
        if class.namespace.is_empty() || model.enums.contains_key(&class.id) {
            continue;
        }
        by_namespace
            .entry(class.namespace.clone())
            .or_default()
            .push(class);
    }
    for classes in by_namespace.values_mut() {
        classes.sort_by(|a, b| a.name.cmp(&b.name));
    }
    by_namespace
}

/// Generates the crate root `lib.rs` of the generated package.
fn generate_lib_rs(model: &Model, pkg: &str, modules: &[String]) -> String {
    let mut f = RustFile::new(&format!(
        "`{pkg}` — SPDX {} model types generated from the ontology.",
        model.spec_version
    ));

    f.line("pub mod enums;");
    for module in modules {
        f.line(&format!("pub mod {module};"));
    }
    f.blank();
    f.line("pub use enums::*;");
    f.blank();
    f.doc_comment("SPDX specification version these types implement.");
    f.line(&format!(
        "pub const SPEC_VERSION: &str = \"{}\";",
        model.spec_version
    ));

    f.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use spdx_model::{Enum, EnumValue, PropertyRef};

    const BASE: &str = "https://spdx.org/rdf/3.0.1/terms/";

    fn sample_model() -> Model {
        let mut model = Model::new("3.0.1");

        let element = format!("{BASE}Core/Element");
        model.classes.insert(
            element.clone(),
            Class {
                id: element.clone(),
                name: "Element".to_owned(),
                namespace: "Core".to_owned(),
                is_abstract: true,
                properties: vec![PropertyRef {
                    path: format!("{BASE}Core/name"),
                    name: "name".to_owned(),
                    max_count: 1,
                    ..PropertyRef::default()
                }],
                ..Class::default()
            },
        );

        let package = format!("{BASE}Software/Package");
        model.classes.insert(
            package.clone(),
            Class {
                id: package.clone(),
                name: "Package".to_owned(),
                namespace: "Software".to_owned(),
                parent: Some(element),
                ..Class::default()
            },
        );

        let algo = format!("{BASE}Core/HashAlgorithm");
        model.enums.insert(
            algo.clone(),
            Enum {
                id: algo.clone(),
                name: "HashAlgorithm".to_owned(),
                namespace: "Core".to_owned(),
                comment: String::new(),
                values: vec![EnumValue {
                    id: format!("{algo}/sha256"),
                    name: "sha256".to_owned(),
                    label: String::new(),
                    comment: String::new(),
                }],
            },
        );

        model
    }

    #[test]
    fn grouping_skips_enum_promoted_classes() {
        let mut model = sample_model();
        let algo = format!("{BASE}Core/HashAlgorithm");
        model.classes.insert(
            algo.clone(),
            Class {
                id: algo,
                name: "HashAlgorithm".to_owned(),
                namespace: "Core".to_owned(),
                ..Class::default()
            },
        );

        let grouped = classes_by_namespace(&model);
        let core: Vec<&str> = grouped["Core"].iter().map(|c| c.name.as_str()).collect();
        assert_eq!(core, vec!["Element"]);
    }

    #[test]
    fn lib_rs_declares_modules_and_version() {
        let model = sample_model();
        let out = generate_lib_rs(&model, "spdx", &["core".to_owned(), "software".to_owned()]);
        assert!(out.contains("pub mod enums;"));
        assert!(out.contains("pub mod core;"));
        assert!(out.contains("pub mod software;"));
        assert!(out.contains("pub const SPEC_VERSION: &str = \"3.0.1\";"));
    }

    #[test]
    fn generate_writes_all_files_and_counts() {
        let out_dir = std::env::temp_dir().join(format!(
            "spdx-codegen-test-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        let model = sample_model();

        let report = generate(&model, "spdx", &out_dir).unwrap();
        assert_eq!(report.struct_count, 2);
        assert_eq!(report.field_count, 1);
        assert_eq!(report.enum_count, 1);
        assert_eq!(report.variant_count, 1);
        assert!(report.files.contains(&"enums.rs".to_owned()));
        assert!(report.files.contains(&"core.rs".to_owned()));
        assert!(report.files.contains(&"software.rs".to_owned()));
        assert!(report.files.contains(&"lib.rs".to_owned()));

        let core = std::fs::read_to_string(out_dir.join("core.rs")).unwrap();
        assert!(core.contains("pub struct Element {"));

        // Regenerating from the same model must be byte-identical.
        let again = generate(&model, "spdx", &out_dir).unwrap();
        assert_eq!(report.files, again.files);
        let core_again = std::fs::read_to_string(out_dir.join("core.rs")).unwrap();
        assert_eq!(core, core_again);

        let _ = std::fs::remove_dir_all(&out_dir);
    }
}
