//! Struct generation: one Rust struct per extracted class, fields per
//! resolved property shape.

use spdx_model::{Class, Model, PropertyRef, UNBOUNDED};

use crate::emit::{normalize_comment, RustFile};
use crate::mapping::{module_name, rust_type_for_xsd, to_snake_case};

/// Generates one namespace module file containing the given classes.
/// Callers pass the classes sorted by name.
#[must_use]
pub fn generate_namespace_module(namespace: &str, classes: &[&Class], model: &Model) -> String {
    let mut f = RustFile::new(&format!("`{namespace}` namespace types."));

    f.line("use serde::{Deserialize, Serialize};");
    f.blank();

    for class in classes.iter().copied() {
        generate_struct(&mut f, class, model);
    }

    f.finish()
}

/// Counts the fields the struct for `class` will carry, for reporting.
#[must_use]
pub fn field_count(class: &Class) -> usize {
    class.properties.iter().filter(|pr| !pr.name.is_empty()).count()
}

fn generate_struct(f: &mut RustFile, class: &Class, model: &Model) {
    let comment = normalize_comment(&class.comment);
    if comment.is_empty() {
        f.doc_comment(&format!("`{}` class.", class.name));
    } else {
        f.doc_comment(&comment);
    }
    if class.is_abstract {
        f.doc_comment("");
        f.doc_comment("Abstract: instantiated only through its concrete subclasses.");
    }
    f.line("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]");
    f.line(&format!("pub struct {} {{", class.name));

    // Inherited fields arrive through a flattened base struct, mirroring
    // the embedded-parent layout of the generated document types.
    // Enum-promoted parents have no struct to flatten.
    if let Some(parent) = class.parent.as_ref().and_then(|iri| model.classes.get(iri)) {
        if !parent.namespace.is_empty() && !model.enums.contains_key(&parent.id) {
            f.indented_doc_comment(&format!("Fields inherited from `{}`.", parent.name));
            f.line("    #[serde(flatten)]");
            f.line(&format!(
                "    pub base: crate::{}::{},",
                module_name(&parent.namespace),
                parent.name
            ));
        }
    }

    for pr in &class.properties {
        if pr.name.is_empty() {
            // Shape without a resolvable sh:path; nothing to name a field by.
            continue;
        }
        let field = to_snake_case(&pr.name);
        let ty = field_type(pr, model);

        if let Some(prop) = model.properties.get(&pr.path) {
            let pcomment = normalize_comment(&prop.comment);
            if !pcomment.is_empty() {
                f.indented_doc_comment(&pcomment);
            } else {
                f.indented_doc_comment(&format!("`{}`.", pr.name));
            }
        } else {
            f.indented_doc_comment(&format!("`{}`.", pr.name));
        }
        if field != pr.name {
            f.line(&format!("    #[serde(rename = \"{}\")]", pr.name));
        }
        f.line(&format!("    pub {field}: {ty},"));
    }

    f.line("}");
    f.blank();
}

/// Resolves a field's Rust type from its shape constraints and wraps it by
/// cardinality: unbounded → `Vec`, optional single → `Option`, required
/// single → bare type.
fn field_type(pr: &PropertyRef, model: &Model) -> String {
    let base = match &pr.class_ref {
        Some(class_ref) => match model.enums.get(class_ref) {
            Some(en) => format!("crate::enums::{}", en.name),
            // Element references stay IRI strings; relationship indexing
            // over instances is the document reader's concern.
            None => "String".to_owned(),
        },
        None => match &pr.data_type {
            Some(dt) => rust_type_for_xsd(dt).to_owned(),
            None => "String".to_owned(),
        },
    };

    match (pr.min_count, pr.max_count) {
        (_, UNBOUNDED) => format!("Vec<{base}>"),
        (min, 1) if min >= 1 => base,
        (_, 1) => format!("Option<{base}>"),
        _ => format!("Vec<{base}>"),
    }
}
