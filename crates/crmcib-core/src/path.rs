//! Structural path queries over the CIB tree
//!
//! A path is a slice of [`Step`]s, each naming a child tag and optionally an
//! attribute that must equal a given value. Values are compared, never spliced
//! into query text, so identifiers containing quotes or brackets match
//! literally.

use xmltree::{Element, XMLNode};

/// One level of a structural path: `tag` or `tag[@attr='value']`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    tag: &'a str,
    predicate: Option<(&'a str, &'a str)>,
}

impl<'a> Step<'a> {
    /// Match any child element with this tag
    pub fn tag(tag: &'a str) -> Self {
        Self {
            tag,
            predicate: None,
        }
    }

    /// Match a child element with this tag whose `attr` equals `value`
    pub fn with_attr(tag: &'a str, attr: &'a str, value: &'a str) -> Self {
        Self {
            tag,
            predicate: Some((attr, value)),
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        if element.name != self.tag {
            return false;
        }
        match self.predicate {
            Some((attr, value)) => attribute(element, attr) == Some(value),
            None => true,
        }
    }
}

/// Child elements in document order, skipping text and comments
pub fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(|node| match node {
        XMLNode::Element(child) => Some(child),
        _ => None,
    })
}

/// Attribute value by name
pub fn attribute<'e>(element: &'e Element, name: &str) -> Option<&'e str> {
    element.attributes.get(name).map(String::as_str)
}

/// Create or overwrite an attribute
pub fn set_attribute(element: &mut Element, name: &str, value: &str) {
    element
        .attributes
        .insert(name.to_string(), value.to_string());
}

/// First element reached by following `path` from `element`
///
/// Backtracks across siblings: if the first `a` has no `b` child, later `a`
/// siblings are searched too. An empty path yields `element` itself.
pub fn find_first<'e>(element: &'e Element, path: &[Step<'_>]) -> Option<&'e Element> {
    let Some((step, rest)) = path.split_first() else {
        return Some(element);
    };
    child_elements(element)
        .filter(|child| step.matches(child))
        .find_map(|child| find_first(child, rest))
}

/// Every element reached by following `path`, in document order
pub fn find_all<'e>(element: &'e Element, path: &[Step<'_>]) -> Vec<&'e Element> {
    let mut found = Vec::new();
    collect_all(element, path, &mut found);
    found
}

fn collect_all<'e>(element: &'e Element, path: &[Step<'_>], found: &mut Vec<&'e Element>) {
    let Some((step, rest)) = path.split_first() else {
        found.push(element);
        return;
    };
    for child in child_elements(element).filter(|child| step.matches(child)) {
        collect_all(child, rest, found);
    }
}

/// Mutable counterpart of [`find_first`]
pub fn find_first_mut<'e>(element: &'e mut Element, path: &[Step<'_>]) -> Option<&'e mut Element> {
    let Some((step, rest)) = path.split_first() else {
        return Some(element);
    };
    for node in element.children.iter_mut() {
        if let XMLNode::Element(child) = node {
            if !step.matches(child) {
                continue;
            }
            if let Some(found) = find_first_mut(child, rest) {
                return Some(found);
            }
        }
    }
    None
}

/// First descendant (any depth, pre-order) matching `step`
pub fn find_descendant<'e>(element: &'e Element, step: &Step<'_>) -> Option<&'e Element> {
    for child in child_elements(element) {
        if step.matches(child) {
            return Some(child);
        }
        if let Some(found) = find_descendant(child, step) {
            return Some(found);
        }
    }
    None
}

/// Every descendant matching `step`, pre-order
pub fn find_descendants<'e>(element: &'e Element, step: &Step<'_>) -> Vec<&'e Element> {
    let mut found = Vec::new();
    for child in child_elements(element) {
        if step.matches(child) {
            found.push(child);
        }
        found.extend(find_descendants(child, step));
    }
    found
}

/// Mutable counterpart of [`find_descendant`]
pub fn find_descendant_mut<'e>(element: &'e mut Element, step: &Step<'_>) -> Option<&'e mut Element> {
    for node in element.children.iter_mut() {
        if let XMLNode::Element(child) = node {
            if step.matches(child) {
                return Some(child);
            }
            if let Some(found) = find_descendant_mut(child, step) {
                return Some(found);
            }
        }
    }
    None
}

/// Return the first child matching `step`, appending it if absent
///
/// A created child carries the step's predicate attribute plus `attrs`.
/// Existing children are returned untouched, so repeated calls never
/// duplicate a container.
pub fn ensure_child<'e>(
    parent: &'e mut Element,
    step: &Step<'_>,
    attrs: &[(&str, &str)],
) -> &'e mut Element {
    let existing = parent
        .children
        .iter()
        .position(|node| matches!(node, XMLNode::Element(child) if step.matches(child)));

    let index = match existing {
        Some(index) => index,
        None => {
            let mut child = Element::new(step.tag);
            if let Some((attr, value)) = step.predicate {
                set_attribute(&mut child, attr, value);
            }
            for (attr, value) in attrs {
                set_attribute(&mut child, attr, value);
            }
            parent.children.push(XMLNode::Element(child));
            parent.children.len() - 1
        }
    };

    match &mut parent.children[index] {
        XMLNode::Element(child) => child,
        _ => unreachable!("index was selected from an element node"),
    }
}

/// Detach every child element for which `predicate` holds
///
/// Returns the detached elements in document order.
pub fn remove_children<F>(parent: &mut Element, mut predicate: F) -> Vec<Element>
where
    F: FnMut(&Element) -> bool,
{
    let mut removed = Vec::new();
    let mut kept = Vec::with_capacity(parent.children.len());
    for node in parent.children.drain(..) {
        match node {
            XMLNode::Element(child) if predicate(&child) => removed.push(child),
            other => kept.push(other),
        }
    }
    parent.children = kept;
    removed
}
