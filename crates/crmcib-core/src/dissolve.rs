//! Constraint dissolution
//!
//! Before resources are deleted, every edge that names them has to go:
//! ordering, colocation and location constraints (including those that list
//! the resource in a `resource_set`), and the per-node operation history the
//! status section keeps for it.

use crate::document::Document;
use crate::errors::Result;
use crate::model::{attrs, tags, Constraint};
use crate::path::{attribute, find_all, find_first_mut, remove_children, Step};
use crate::queries::constraints_referencing;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;
use xmltree::{Element, XMLNode};

/// One detached element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedEdge {
    pub tag: String,
    pub id: String,
}

/// Everything a dissolution detached, in removal order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dissolution {
    pub removed: Vec<RemovedEdge>,
}

impl Dissolution {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.removed.len()
    }

    /// Ids of removed elements with the given tag
    pub fn ids_with_tag(&self, tag: &str) -> Vec<&str> {
        self.removed
            .iter()
            .filter(|edge| edge.tag == tag)
            .map(|edge| edge.id.as_str())
            .collect()
    }

    fn record(&mut self, elements: Vec<Element>) {
        for element in elements {
            let id = attribute(&element, attrs::ID).unwrap_or_default().to_string();
            debug!(tag = %element.name, id = %id, "Deleting dependency");
            self.removed.push(RemovedEdge {
                tag: element.name,
                id,
            });
        }
    }
}

/// Remove every constraint and status record that names one of `resources`
///
/// Names are compared for exact equality against the referencing attributes.
/// Unrelated constraints are left in place.
///
/// # Errors
///
/// Returns `MissingRoot` if the document is not rooted at `<cib>`.
pub fn dissolve_constraints<S: AsRef<str>>(doc: &mut Document, resources: &[S]) -> Result<Dissolution> {
    let names: BTreeSet<&str> = resources.iter().map(AsRef::as_ref).collect();
    let cib = doc.cib_mut()?;
    let mut dissolution = Dissolution::default();

    let constraints_path = [Step::tag(tags::CONFIGURATION), Step::tag(tags::CONSTRAINTS)];
    if let Some(constraints) = find_first_mut(cib, &constraints_path) {
        let removed = remove_children(constraints, |element| {
            Constraint::from_element(element)
                .is_some_and(|constraint| names.iter().any(|name| constraint.references(name)))
        });
        dissolution.record(removed);
    }

    if let Some(status) = find_first_mut(cib, &[Step::tag(tags::STATUS)]) {
        for node_state in element_children_mut(status, tags::NODE_STATE) {
            let lrm_path = [Step::tag(tags::LRM), Step::tag(tags::LRM_RESOURCES)];
            let Some(lrm_resources) = find_first_mut(node_state, &lrm_path) else {
                continue;
            };
            let removed = remove_children(lrm_resources, |element| {
                element.name == tags::LRM_RESOURCE
                    && attribute(element, attrs::ID).is_some_and(|id| names.contains(id))
            });
            dissolution.record(removed);
        }
    }

    Ok(dissolution)
}

/// Whether anything in the document still names `resource`
pub fn has_references(doc: &Document, resource: &str) -> bool {
    let Ok(cib) = doc.cib() else {
        return false;
    };
    let status_path = [
        Step::tag(tags::STATUS),
        Step::tag(tags::NODE_STATE),
        Step::tag(tags::LRM),
        Step::tag(tags::LRM_RESOURCES),
        Step::with_attr(tags::LRM_RESOURCE, attrs::ID, resource),
    ];
    !constraints_referencing(doc, resource).is_empty() || !find_all(cib, &status_path).is_empty()
}

fn element_children_mut<'e>(parent: &'e mut Element, tag: &'e str) -> impl Iterator<Item = &'e mut Element> {
    parent.children.iter_mut().filter_map(move |node| match node {
        XMLNode::Element(child) if child.name == tag => Some(child),
        _ => None,
    })
}
