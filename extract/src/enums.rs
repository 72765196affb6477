//! Pass 2: group named individuals into enumerations.
//!
//! An individual's `@type` list names both the `owl:NamedIndividual`
//! marker and the enclosing type. The first type IRI under the SPDX base
//! URI identifies the enumeration the individual belongs to.
//!
//! Disambiguation: the SPDX ontology encodes both flat enumerations and
//! proper subclass hierarchies through named individuals. When the
//! candidate type already exists as a class *with a parent*, the
//! individual is presumed to belong to a subclass hierarchy and no enum is
//! promoted for that candidate — the downstream generator emits a struct
//! for it, not an enum. An IRI is therefore never both an enum key and a
//! parented class.

use spdx_model::{Enum, EnumValue, Model};

use crate::builders::{comment_of, label_of};
use crate::classify::Classification;
use crate::graph::GraphIndex;
use crate::names::{enum_value_name, local_name, namespace_of};
use crate::vocab::{OWL_NAMED_INDIVIDUAL, SPDX_BASE_URI};

/// Resolves every named individual into at most one enum membership. The
/// first qualifying candidate type wins.
pub(crate) fn run(classified: &[(String, Classification)], index: &GraphIndex, model: &mut Model) {
    for (id, c) in classified {
        if !c.is_named_individual {
            continue;
        }
        let Some(node) = index.node(id) else {
            continue;
        };

        for candidate in &c.types {
            if !candidate.starts_with(SPDX_BASE_URI) || candidate == OWL_NAMED_INDIVIDUAL {
                continue;
            }

            if !model.enums.contains_key(candidate) {
                if model
                    .classes
                    .get(candidate)
                    .is_some_and(|class| class.parent.is_some())
                {
                    // Subclass hierarchy, not a flat enumeration.
                    continue;
                }
                let comment = index.node(candidate).map(comment_of).unwrap_or_default();
                model.enums.insert(
                    candidate.clone(),
                    Enum {
                        id: candidate.clone(),
                        name: local_name(candidate).to_owned(),
                        namespace: namespace_of(candidate).to_owned(),
                        comment,
                        values: Vec::new(),
                    },
                );
            }

            if let Some(en) = model.enums.get_mut(candidate) {
                en.values.push(EnumValue {
                    id: id.clone(),
                    name: enum_value_name(id).to_owned(),
                    label: label_of(node),
                    comment: comment_of(node),
                });
            }
            break;
        }
    }
}
