//! Command inventory for document mutations
//!
//! Each command names one idempotent mutation; [`crate::apply::apply`] is the
//! single entry point that executes them.

use crate::model::ClusterProperty;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set a resource's `target-role` to `Started` or `Stopped`
    SetTargetRole { resource_id: String, started: bool },

    /// Put a node into standby
    SetStandby { uname: String },

    /// Take a node out of standby
    ClearStandby { uname: String },

    /// Set a property in the bootstrap property set
    SetClusterProperty {
        property: ClusterProperty,
        value: String,
    },
}

impl Command {
    /// Short operation name used in log events
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::SetTargetRole { started: true, .. } => "start_resource",
            Command::SetTargetRole { started: false, .. } => "stop_resource",
            Command::SetStandby { .. } => "standby_node",
            Command::ClearStandby { .. } => "unstandby_node",
            Command::SetClusterProperty { .. } => "set_cluster_property",
        }
    }

    /// Identifier of the entity the command targets
    pub fn entity_id(&self) -> &str {
        match self {
            Command::SetTargetRole { resource_id, .. } => resource_id,
            Command::SetStandby { uname } | Command::ClearStandby { uname } => uname,
            Command::SetClusterProperty { property, .. } => property.name(),
        }
    }
}
