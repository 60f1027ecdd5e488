//! Constraint domain model
//!
//! Constraints are the edges of the resource dependency graph. Ordering and
//! colocation constraints name two resources directly; location constraints
//! name one directly or several through a nested `resource_set`. Any kind may
//! carry resource sets, so set members are collected for every kind.

use crate::model::{attrs, tags};
use crate::path::{attribute, child_elements};
use serde::Serialize;
use std::fmt;
use xmltree::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConstraintKind {
    Order,
    Colocation,
    Location,
}

impl ConstraintKind {
    /// Kind for a child of `configuration/constraints`; `None` for other tags
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            tags::ORDER => Some(ConstraintKind::Order),
            tags::COLOCATION => Some(ConstraintKind::Colocation),
            tags::LOCATION => Some(ConstraintKind::Location),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ConstraintKind::Order => tags::ORDER,
            ConstraintKind::Colocation => tags::COLOCATION,
            ConstraintKind::Location => tags::LOCATION,
        }
    }

    /// Attributes through which this kind references resources directly
    pub fn reference_attributes(&self) -> &'static [&'static str] {
        match self {
            ConstraintKind::Order => &[attrs::FIRST, attrs::THEN],
            ConstraintKind::Colocation => &[attrs::RSC, attrs::WITH_RSC],
            ConstraintKind::Location => &[attrs::RSC],
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A constraint entry with every resource it references
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constraint {
    pub id: String,
    pub kind: ConstraintKind,
    /// Resources named by the kind's direct reference attributes, in attribute order
    pub direct: Vec<String>,
    /// Resources named by `resource_set/resource_ref` members
    pub set_members: Vec<String>,
}

impl Constraint {
    /// Build the view from a constraint element; `None` for non-constraint tags
    pub fn from_element(element: &Element) -> Option<Self> {
        let kind = ConstraintKind::from_tag(&element.name)?;
        let direct = kind
            .reference_attributes()
            .iter()
            .filter_map(|name| attribute(element, name))
            .map(str::to_string)
            .collect();

        Some(Self {
            id: attribute(element, attrs::ID).unwrap_or_default().to_string(),
            kind,
            direct,
            set_members: resource_set_members(element)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }

    /// Whether this constraint is an edge touching `resource`
    pub fn references(&self, resource: &str) -> bool {
        self.direct.iter().any(|r| r == resource) || self.set_members.iter().any(|r| r == resource)
    }
}

/// Ids of `resource_set/resource_ref` members under a constraint element
pub fn resource_set_members(element: &Element) -> Vec<&str> {
    child_elements(element)
        .filter(|child| child.name == tags::RESOURCE_SET)
        .flat_map(child_elements)
        .filter(|member| member.name == tags::RESOURCE_REF)
        .filter_map(|member| attribute(member, attrs::ID))
        .collect()
}
