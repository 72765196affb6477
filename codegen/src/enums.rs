//! Enum generation: one Rust enum per extracted enumeration.

use spdx_model::Model;

use crate::emit::{normalize_comment, RustFile};
use crate::mapping::to_pascal_case;

/// Generates the `enums.rs` file content: every enumeration in the model,
/// in IRI order, with variants sorted by member name. Serde renames
/// preserve the ontology-facing member names.
#[must_use]
pub fn generate_enums_file(model: &Model) -> String {
    let mut f = RustFile::new(&format!(
        "Enumerations extracted from the SPDX {} ontology.",
        model.spec_version
    ));

    f.line("use std::fmt;");
    f.blank();
    f.line("use serde::{Deserialize, Serialize};");
    f.blank();

    for en in model.enums.values() {
        let mut values: Vec<_> = en.values.iter().collect();
        values.sort_by(|a, b| a.name.cmp(&b.name));

        let comment = normalize_comment(&en.comment);
        if comment.is_empty() {
            f.doc_comment(&format!("`{}` enumeration.", en.name));
        } else {
            f.doc_comment(&comment);
        }
        f.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]");
        f.line(&format!("pub enum {} {{", en.name));
        for value in &values {
            let vcomment = normalize_comment(&value.comment);
            if vcomment.is_empty() {
                f.indented_doc_comment(&format!("`{}`.", value.name));
            } else {
                f.indented_doc_comment(&vcomment);
            }
            f.line(&format!("    #[serde(rename = \"{}\")]", value.name));
            f.line(&format!("    {},", to_pascal_case(&value.name)));
        }
        f.line("}");
        f.blank();

        f.line(&format!("impl fmt::Display for {} {{", en.name));
        f.line("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {");
        f.line("        match self {");
        for value in &values {
            f.line(&format!(
                "            Self::{} => f.write_str(\"{}\"),",
                to_pascal_case(&value.name),
                value.name
            ));
        }
        f.line("        }");
        f.line("    }");
        f.line("}");
        f.blank();
    }

    f.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use spdx_model::{Enum, EnumValue};

    fn sample_model() -> Model {
        let mut model = Model::new("3.0.1");
        let id = "https://spdx.org/rdf/3.0.1/terms/Core/HashAlgorithm".to_owned();
        model.enums.insert(
            id.clone(),
            Enum {
                id: id.clone(),
                name: "HashAlgorithm".to_owned(),
                namespace: "Core".to_owned(),
                comment: "A mathematical algorithm that maps data.".to_owned(),
                values: vec![
                    EnumValue {
                        id: format!("{id}/sha256"),
                        name: "sha256".to_owned(),
                        label: "sha256".to_owned(),
                        comment: String::new(),
                    },
                    EnumValue {
                        id: format!("{id}/sha1"),
                        name: "sha1".to_owned(),
                        label: "sha1".to_owned(),
                        comment: String::new(),
                    },
                ],
            },
        );
        model
    }

    #[test]
    fn emits_enum_with_renamed_variants() {
        let out = generate_enums_file(&sample_model());
        assert!(out.contains("pub enum HashAlgorithm {"));
        assert!(out.contains("#[serde(rename = \"sha256\")]"));
        assert!(out.contains("    Sha256,"));
        assert!(out.contains("impl fmt::Display for HashAlgorithm"));
    }

    #[test]
    fn variants_are_sorted_by_member_name() {
        let out = generate_enums_file(&sample_model());
        let sha1 = out.find("    Sha1,").unwrap_or(usize::MAX);
        let sha256 = out.find("    Sha256,").unwrap_or(0);
        assert!(sha1 < sha256, "sha1 should be emitted before sha256");
    }
}
