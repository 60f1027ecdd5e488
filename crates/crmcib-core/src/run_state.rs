//! Run-state inference from operation history
//!
//! A resource is considered stopped when there is either a successful stop
//! record, or no stop record and a monitor record reporting "not running".
//! A stop record outranks the monitor record: after a stop the last cached
//! monitor result can still read "running" although the resource is down.
//!
//! Per-node evaluations are folded across nodes starting from
//! [`RunState::Unknown`]. A determined state never falls back to `Unknown`.

use crate::document::Document;
use crate::model::{attrs, tags, OperationKind, OperationRecord};
use crate::path::{attribute, find_all, find_first, Step};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};
use xmltree::Element;

/// OCF resource agent exit codes consulted by the inference
pub mod ocf {
    pub const SUCCESS: i32 = 0;
    pub const ERR_GENERIC: i32 = 1;
    pub const NOT_RUNNING: i32 = 7;
    pub const RUNNING_MASTER: i32 = 8;
    pub const FAILED_MASTER: i32 = 9;
}

/// Inferred state of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RunState {
    /// No usable operation history
    #[default]
    Unknown,
    /// Verified as running
    Running,
    /// Verified as stopped
    Stopped,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Unknown => "Unknown",
            RunState::Running => "Running",
            RunState::Stopped => "Stopped",
        };
        f.write_str(name)
    }
}

/// Fold one node's operation records into `prior`
///
/// Only the highest-precedence kind present (stop, then monitor, then start)
/// is consulted, using its first record. A "positive" outcome only replaces
/// `Unknown`; a contrary outcome always wins. A record without a usable
/// result code leaves `prior` unchanged; records of lower-precedence kinds
/// are deliberately not consulted in its place.
pub fn update_run_state(resource: &str, records: &[OperationRecord], prior: RunState) -> RunState {
    let first_of = |kind: OperationKind| records.iter().find(|r| r.operation == kind);

    let (record, settled, settled_state, contrary_state) =
        if let Some(record) = first_of(OperationKind::Stop) {
            (record, &[ocf::SUCCESS][..], RunState::Stopped, RunState::Running)
        } else if let Some(record) = first_of(OperationKind::Monitor) {
            (record, &[ocf::NOT_RUNNING][..], RunState::Stopped, RunState::Running)
        } else if let Some(record) = first_of(OperationKind::Start) {
            (
                record,
                &[ocf::SUCCESS, ocf::RUNNING_MASTER][..],
                RunState::Running,
                RunState::Stopped,
            )
        } else {
            return prior;
        };

    let Some(rc) = record.rc_code else {
        warn!(
            resource,
            operation = record.operation.as_str(),
            "Found LRM resource operation data without a status code"
        );
        return prior;
    };

    if settled.contains(&rc) {
        if prior == RunState::Unknown {
            settled_state
        } else {
            prior
        }
    } else {
        contrary_state
    }
}

/// Run state of a resource on a single node, from its `lrm_resource` element
pub fn node_run_state(resource: &str, lrm_resource: &Element, prior: RunState) -> RunState {
    update_run_state(resource, &OperationRecord::list_from(lrm_resource), prior)
}

/// `lrm/lrm_resources/lrm_resource[@id=resource]`, relative to a `node_state`
pub fn lrm_resource_path(resource: &str) -> [Step<'_>; 3] {
    [
        Step::tag(tags::LRM),
        Step::tag(tags::LRM_RESOURCES),
        Step::with_attr(tags::LRM_RESOURCE, attrs::ID, resource),
    ]
}

/// Cluster-wide run state of a resource
///
/// Folds every node's `lrm_resource` entry for `resource`, in document order.
/// A document without a `<cib>` root or without status yields `Unknown`.
pub fn cluster_run_state(doc: &Document, resource: &str) -> RunState {
    let Ok(cib) = doc.cib() else {
        return RunState::Unknown;
    };
    let path = lrm_resource_path(resource);
    find_all(cib, &[Step::tag(tags::STATUS), Step::tag(tags::NODE_STATE)])
        .into_iter()
        .flat_map(|node| find_all(node, &path))
        .fold(RunState::Unknown, |state, lrm_resource| {
            node_run_state(resource, lrm_resource, state)
        })
}

/// Host name of the first node on which `resource` is running
///
/// `None` means the resource is not running anywhere (or is not configured),
/// which is a valid answer rather than an error.
pub fn node_of_resource(doc: &Document, resource: &str) -> Option<String> {
    let cib = doc.cib().ok()?;
    let path = lrm_resource_path(resource);

    for node in find_all(cib, &[Step::tag(tags::STATUS), Step::tag(tags::NODE_STATE)]) {
        let Some(uname) = attribute(node, attrs::UNAME).filter(|u| !u.is_empty()) else {
            debug!("could not find uname for node, ignoring");
            continue;
        };
        let Some(lrm_resource) = find_first(node, &path) else {
            debug!(resource, node = uname, "resource not present on node, skipping");
            continue;
        };
        let state = node_run_state(resource, lrm_resource, RunState::Unknown);
        debug!(resource, node = uname, %state, "run state on node");
        if state == RunState::Running {
            return Some(uname.to_string());
        }
    }

    None
}
