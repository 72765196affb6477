//! Pass 3: resolve SHACL node shapes into ordered field lists.
//!
//! Each `sh:property` entry on a node shape references a blank node
//! holding one property shape. The blank node is dereferenced through the
//! graph index side table; the constructed `PropertyRef` owns its data and
//! never aliases the index. Dangling references are skipped silently.

use spdx_model::{Model, PropertyRef};

use crate::classify::Classification;
use crate::graph::{first_iri, first_literal_int, first_literal_str, iri_list, values, GraphIndex, RdfNode};
use crate::names::local_name;
use crate::vocab::{
    SH_CLASS, SH_DATATYPE, SH_IN, SH_MAX_COUNT, SH_MESSAGE, SH_MIN_COUNT, SH_NODE_KIND, SH_PATH,
    SH_PROPERTY,
};

/// Attaches resolved property shapes to the classes built in pass 1.
/// Shapes targeting unknown classes are skipped.
pub(crate) fn run(classified: &[(String, Classification)], index: &GraphIndex, model: &mut Model) {
    for (id, c) in classified {
        if !c.is_node_shape {
            continue;
        }
        let Some(node) = index.node(id) else {
            continue;
        };
        let Some(class) = model.classes.get_mut(id) else {
            continue;
        };

        for entry in values(node, SH_PROPERTY) {
            let Some(ref_id) = entry.get("@id").and_then(serde_json::Value::as_str) else {
                continue;
            };
            let Some(shape) = index.blank_node(ref_id) else {
                continue;
            };

            if is_abstract_marker(shape) {
                // The shape exists only to mark the class abstract; it is
                // not a real field. Idempotent across multiple markers.
                class.is_abstract = true;
                continue;
            }
            class.properties.push(build_property_ref(shape));
        }
    }
}

/// Builds one field from a property-shape blank node. Absent statements
/// leave the corresponding field at its zero value.
fn build_property_ref(shape: &RdfNode) -> PropertyRef {
    let mut pr = PropertyRef::default();

    if let Some(path) = first_iri(shape, SH_PATH) {
        pr.path = path.to_owned();
        pr.name = local_name(path).to_owned();
    }
    pr.data_type = first_iri(shape, SH_DATATYPE).map(str::to_owned);
    pr.class_ref = first_iri(shape, SH_CLASS).map(str::to_owned);
    if let Some(min) = first_literal_int(shape, SH_MIN_COUNT) {
        pr.min_count = min;
    }
    if let Some(max) = first_literal_int(shape, SH_MAX_COUNT) {
        pr.max_count = max;
    }
    pr.node_kind = first_iri(shape, SH_NODE_KIND).map(str::to_owned);
    pr.in_values = iri_list(shape, SH_IN);

    pr
}

/// True when the shape's `sh:message` contains the case-insensitive
/// substring "abstract". Heuristic carried over from the existing ontology
/// files; TODO: switch to an explicit marker vocabulary once the SPDX
/// model publishes one.
fn is_abstract_marker(shape: &RdfNode) -> bool {
    first_literal_str(shape, SH_MESSAGE)
        .is_some_and(|msg| msg.to_lowercase().contains("abstract"))
}
