use crate::document::Document;
use crate::errors::{CibError, Result};
use crate::model::{attrs, tags, ConfiguredNode, Node, NodeState};
use crate::path::{attribute, child_elements, find_all, find_first, Step};
use xmltree::Element;

/// The `configuration/nodes/node[@uname]` element of a node
///
/// # Errors
///
/// Returns `NodeNotFound` if there is no such node entry.
pub fn find_configured_node<'d>(cib: &'d Element, uname: &str) -> Result<&'d Element> {
    let path = [
        Step::tag(tags::CONFIGURATION),
        Step::tag(tags::NODES),
        Step::with_attr(tags::NODE, attrs::UNAME, uname),
    ];
    find_first(cib, &path).ok_or_else(|| CibError::NodeNotFound {
        uname: uname.to_string(),
    })
}

/// Value of the `instance_attributes/nvpair[@name]` pair directly under `element`
pub fn nvpair_value<'e>(element: &'e Element, name: &str) -> Option<&'e str> {
    let path = [
        Step::tag(tags::INSTANCE_ATTRIBUTES),
        Step::with_attr(tags::NVPAIR, attrs::NAME, name),
    ];
    find_first(element, &path).and_then(|nvpair| attribute(nvpair, attrs::VALUE))
}

/// Whether a node is in standby
///
/// # Errors
///
/// Returns `MissingRoot` or `NodeNotFound`.
pub fn is_standby(doc: &Document, uname: &str) -> Result<bool> {
    let node = find_configured_node(doc.cib()?, uname)?;
    Ok(nvpair_value(node, attrs::STANDBY) == Some(attrs::STANDBY_ON))
}

/// Every node entry in `configuration/nodes`
///
/// Entries without an id or uname are skipped.
///
/// # Errors
///
/// Returns `MissingRoot` if the document is not rooted at `<cib>`.
pub fn list_configured_nodes(doc: &Document) -> Result<Vec<ConfiguredNode>> {
    let cib = doc.cib()?;
    let path = [Step::tag(tags::CONFIGURATION), Step::tag(tags::NODES)];
    let nodes = find_first(cib, &path)
        .map(|nodes| {
            child_elements(nodes)
                .filter(|node| node.name == tags::NODE)
                .filter_map(|node| {
                    Some(ConfiguredNode {
                        id: attribute(node, attrs::ID)?.to_string(),
                        uname: attribute(node, attrs::UNAME)?.to_string(),
                        standby: nvpair_value(node, attrs::STANDBY) == Some(attrs::STANDBY_ON),
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    Ok(nodes)
}

/// Live state of a node from `status/node_state[@uname]`
///
/// # Errors
///
/// Returns `NodeStateNotFound` if the node has no status entry, or the
/// parse errors of [`NodeState::from_element`].
pub fn find_node_state(doc: &Document, uname: &str) -> Result<NodeState> {
    let path = [
        Step::tag(tags::STATUS),
        Step::with_attr(tags::NODE_STATE, attrs::UNAME, uname),
    ];
    let element = find_first(doc.cib()?, &path).ok_or_else(|| CibError::NodeStateNotFound {
        uname: uname.to_string(),
    })?;
    NodeState::from_element(element)
}

/// Every node reported in the status section
///
/// # Errors
///
/// Fails on the first `node_state` that lacks a uname or does not parse.
pub fn list_nodes(doc: &Document) -> Result<Vec<Node>> {
    let path = [Step::tag(tags::STATUS), Step::tag(tags::NODE_STATE)];
    find_all(doc.cib()?, &path)
        .into_iter()
        .enumerate()
        .map(|(index, element)| -> Result<Node> {
            let state = NodeState::from_element(element)?;
            let host_name = attribute(element, attrs::UNAME)
                .filter(|uname| !uname.is_empty())
                .ok_or_else(|| CibError::MissingAttribute {
                    element: format!("node element #{}", index),
                    attribute: attrs::UNAME.to_string(),
                })?;
            Ok(Node {
                host_name: host_name.to_string(),
                state,
            })
        })
        .collect()
}
