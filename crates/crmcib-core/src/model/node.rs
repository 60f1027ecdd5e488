//! Node domain model
//!
//! Two views of a node exist in the CIB: its configuration entry under
//! `configuration/nodes` (id, uname, standby attribute) and its live status
//! under `status/node_state` (membership, controller, join phases).

use crate::errors::{CibError, Result};
use crate::model::attrs;
use crate::path::attribute;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use xmltree::Element;

/// Join phase of a node in the controller's membership protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinState {
    Down,
    Pending,
    Member,
    Banned,
}

impl JoinState {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinState::Down => "down",
            JoinState::Pending => "pending",
            JoinState::Member => "member",
            JoinState::Banned => "banned",
        }
    }
}

impl FromStr for JoinState {
    type Err = CibError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "down" => Ok(JoinState::Down),
            "pending" => Ok(JoinState::Pending),
            "member" => Ok(JoinState::Member),
            "banned" => Ok(JoinState::Banned),
            other => Err(CibError::UnrecognizedJoinState {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for JoinState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live state of a node as recorded in `status/node_state`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeState {
    /// Node is part of the cluster membership
    pub in_ccm: bool,
    /// Controller daemon is online
    pub crmd: bool,
    pub join: JoinState,
    pub join_expected: JoinState,
}

impl NodeState {
    /// Parse a `node_state` element
    ///
    /// # Errors
    ///
    /// Returns `MissingAttribute` if any of `in_ccm`, `crmd`, `join`,
    /// `expected` is absent or empty, and `UnrecognizedJoinState` for a join
    /// phase outside the known set.
    pub fn from_element(element: &Element) -> Result<Self> {
        let in_ccm = required_state_attr(element, attrs::IN_CCM)?;
        let crmd = required_state_attr(element, attrs::CRMD)?;
        let join = required_state_attr(element, attrs::JOIN)?;
        let expected = required_state_attr(element, attrs::EXPECTED)?;

        Ok(Self {
            in_ccm: in_ccm == "true",
            crmd: crmd == "online",
            join: join.parse()?,
            join_expected: expected.parse()?,
        })
    }

    /// Member of the cluster with a running controller and completed join
    pub fn is_online(&self) -> bool {
        self.in_ccm && self.crmd && self.join == JoinState::Member
    }
}

fn required_state_attr<'e>(element: &'e Element, name: &str) -> Result<&'e str> {
    match attribute(element, name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CibError::MissingAttribute {
            element: format!(
                "state of node {}",
                attribute(element, attrs::UNAME).unwrap_or("<unknown>")
            ),
            attribute: name.to_string(),
        }),
    }
}

/// A node reported in the status section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub host_name: String,
    pub state: NodeState,
}

/// A node entry in `configuration/nodes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfiguredNode {
    pub id: String,
    pub uname: String,
    pub standby: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_join_state_round_trips_known_values() {
        for state in [
            JoinState::Down,
            JoinState::Pending,
            JoinState::Member,
            JoinState::Banned,
        ] {
            assert_eq!(state.as_str().parse::<JoinState>().unwrap(), state);
        }
    }

    #[test]
    fn test_join_state_rejects_unknown_value() {
        let err = "joining".parse::<JoinState>().unwrap_err();
        assert_eq!(
            err,
            CibError::UnrecognizedJoinState {
                value: "joining".to_string()
            }
        );
    }

    #[test]
    fn test_node_state_from_element() {
        let state = NodeState::from_element(&element(
            r#"<node_state id="1" uname="li0" in_ccm="true" crmd="online" join="member" expected="member"/>"#,
        ))
        .unwrap();
        assert!(state.is_online());
        assert_eq!(state.join_expected, JoinState::Member);
    }

    #[test]
    fn test_node_state_offline_controller() {
        let state = NodeState::from_element(&element(
            r#"<node_state uname="li1" in_ccm="false" crmd="offline" join="down" expected="member"/>"#,
        ))
        .unwrap();
        assert!(!state.in_ccm);
        assert!(!state.crmd);
        assert!(!state.is_online());
    }

    #[test]
    fn test_node_state_missing_attribute_names_node() {
        let err = NodeState::from_element(&element(
            r#"<node_state uname="li2" in_ccm="true" join="member" expected="member"/>"#,
        ))
        .unwrap_err();
        assert_eq!(
            err,
            CibError::MissingAttribute {
                element: "state of node li2".to_string(),
                attribute: "crmd".to_string(),
            }
        );
    }
}
