//! Resource domain model
//!
//! A resource is a `primitive` in the configuration section; its history is
//! the set of `lrm_rsc_op` records the local resource manager keeps per node
//! under `status/node_state/lrm/lrm_resources/lrm_resource`.

use crate::model::{attrs, tags};
use crate::path::{attribute, child_elements};
use serde::Serialize;
use std::fmt;
use xmltree::Element;

/// Desired administrative state of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetRole {
    Started,
    Stopped,
}

impl TargetRole {
    pub fn from_started(started: bool) -> Self {
        if started {
            TargetRole::Started
        } else {
            TargetRole::Stopped
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetRole::Started => "Started",
            TargetRole::Stopped => "Stopped",
        }
    }

    /// Parse the nvpair value; roles other than Started/Stopped are not modeled
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Started" => Some(TargetRole::Started),
            "Stopped" => Some(TargetRole::Stopped),
            _ => None,
        }
    }
}

impl fmt::Display for TargetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured primitive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub id: String,
    pub target_role: Option<TargetRole>,
}

impl Resource {
    /// Build the view from a `primitive` element; `None` if it has no id
    pub fn from_element(element: &Element) -> Option<Self> {
        let id = attribute(element, attrs::ID)?.to_string();
        let target_role = child_elements(element)
            .filter(|child| child.name == tags::META_ATTRIBUTES)
            .flat_map(child_elements)
            .find(|pair| {
                pair.name == tags::NVPAIR && attribute(pair, attrs::NAME) == Some(attrs::TARGET_ROLE)
            })
            .and_then(|pair| attribute(pair, attrs::VALUE))
            .and_then(TargetRole::parse);
        Some(Self { id, target_role })
    }
}

/// Operation kinds that carry run-state information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Start,
    Stop,
    Monitor,
}

impl OperationKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "start" => Some(OperationKind::Start),
            "stop" => Some(OperationKind::Stop),
            "monitor" => Some(OperationKind::Monitor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Start => "start",
            OperationKind::Stop => "stop",
            OperationKind::Monitor => "monitor",
        }
    }
}

/// One historical operation outcome
///
/// `rc_code` is `None` when the record has no usable `rc-code` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationRecord {
    pub operation: OperationKind,
    pub rc_code: Option<i32>,
}

impl OperationRecord {
    pub fn new(operation: OperationKind, rc_code: i32) -> Self {
        Self {
            operation,
            rc_code: Some(rc_code),
        }
    }

    /// A record whose result code is missing or unreadable
    pub fn malformed(operation: OperationKind) -> Self {
        Self {
            operation,
            rc_code: None,
        }
    }

    /// Parse an `lrm_rsc_op` element
    ///
    /// Operations other than start/stop/monitor (promote, notify, migrate...)
    /// yield `None`.
    pub fn from_element(element: &Element) -> Option<Self> {
        let operation = OperationKind::parse(attribute(element, attrs::OPERATION)?)?;
        let rc_code = attribute(element, attrs::RC_CODE).and_then(|rc| rc.trim().parse().ok());
        Some(Self { operation, rc_code })
    }

    /// Records of an `lrm_resource` element in document order
    pub fn list_from(lrm_resource: &Element) -> Vec<Self> {
        child_elements(lrm_resource)
            .filter(|child| child.name == tags::LRM_RSC_OP)
            .filter_map(Self::from_element)
            .collect()
    }
}

/// Operation history of one resource on one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceHistory {
    pub node: String,
    pub resource: String,
    pub records: Vec<OperationRecord>,
}
