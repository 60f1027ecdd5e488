use crate::document::Document;
use crate::errors::{CibError, Result};
use crate::model::{attrs, tags};
use crate::path::{attribute, ensure_child, find_first_mut, remove_children, set_attribute, Step};
use tracing::debug;
use xmltree::{Element, XMLNode};

fn configured_node_mut<'d>(cib: &'d mut Element, uname: &str) -> Result<&'d mut Element> {
    let path = [
        Step::tag(tags::CONFIGURATION),
        Step::tag(tags::NODES),
        Step::with_attr(tags::NODE, attrs::UNAME, uname),
    ];
    find_first_mut(cib, &path).ok_or_else(|| CibError::NodeNotFound {
        uname: uname.to_string(),
    })
}

fn is_standby_pair(element: &Element) -> bool {
    element.name == tags::NVPAIR && attribute(element, attrs::NAME) == Some(attrs::STANDBY)
}

/// Put a node into standby
///
/// An existing standby pair is switched to `on`. Otherwise the pair is added
/// to the node's first `instance_attributes`, which is created with id
/// `nodes-<node id>` if the node has none.
///
/// # Errors
///
/// Returns `NodeNotFound` if no node has that uname, or `MissingAttribute`
/// if the node entry has no id to derive the container ids from.
pub fn set_standby(doc: &mut Document, uname: &str) -> Result<()> {
    let node = configured_node_mut(doc.cib_mut()?, uname)?;

    let existing = [
        Step::tag(tags::INSTANCE_ATTRIBUTES),
        Step::with_attr(tags::NVPAIR, attrs::NAME, attrs::STANDBY),
    ];
    if let Some(pair) = find_first_mut(node, &existing) {
        set_attribute(pair, attrs::VALUE, attrs::STANDBY_ON);
        debug!(node = uname, "standby pair switched on");
        return Ok(());
    }

    let node_id = attribute(node, attrs::ID)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| CibError::MissingAttribute {
            element: format!("node {}", uname),
            attribute: attrs::ID.to_string(),
        })?
        .to_string();

    let container_id = format!("nodes-{}", node_id);
    let container = ensure_child(
        node,
        &Step::tag(tags::INSTANCE_ATTRIBUTES),
        &[(attrs::ID, &container_id)],
    );
    let pair_id = format!("{}-{}", container_id, attrs::STANDBY);
    let pair = ensure_child(
        container,
        &Step::with_attr(tags::NVPAIR, attrs::NAME, attrs::STANDBY),
        &[(attrs::ID, &pair_id)],
    );
    set_attribute(pair, attrs::VALUE, attrs::STANDBY_ON);
    debug!(node = uname, container = %container_id, "standby pair added");
    Ok(())
}

/// Take a node out of standby
///
/// Standby pairs are removed from the node's `instance_attributes`; the
/// containers themselves stay. A node that is not in standby is left as is.
///
/// # Errors
///
/// Returns `NodeNotFound` if no node has that uname.
pub fn clear_standby(doc: &mut Document, uname: &str) -> Result<()> {
    let node = configured_node_mut(doc.cib_mut()?, uname)?;
    let mut removed = 0;
    for child in node.children.iter_mut() {
        if let XMLNode::Element(container) = child {
            if container.name == tags::INSTANCE_ATTRIBUTES {
                removed += remove_children(container, is_standby_pair).len();
            }
        }
    }
    debug!(node = uname, removed, "standby pairs removed");
    Ok(())
}
