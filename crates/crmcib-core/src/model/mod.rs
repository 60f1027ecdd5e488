//! Typed views over CIB subtrees
//!
//! Views are computed on demand from a [`crate::Document`] and hold owned
//! copies of the values they expose; they never borrow the tree.

pub mod constraint;
pub mod node;
pub mod property;
pub mod resource;

pub use constraint::{Constraint, ConstraintKind};
pub use node::{ConfiguredNode, JoinState, Node, NodeState};
pub use property::{ClusterProperty, BOOTSTRAP_SET_ID};
pub use resource::{OperationKind, OperationRecord, Resource, ResourceHistory, TargetRole};

/// Pacemaker CIB element names
pub mod tags {
    pub const CIB: &str = "cib";
    pub const CONFIGURATION: &str = "configuration";
    pub const STATUS: &str = "status";
    pub const CRM_CONFIG: &str = "crm_config";
    pub const CLUSTER_PROPERTY_SET: &str = "cluster_property_set";
    pub const NODES: &str = "nodes";
    pub const NODE: &str = "node";
    pub const NODE_STATE: &str = "node_state";
    pub const RESOURCES: &str = "resources";
    pub const PRIMITIVE: &str = "primitive";
    pub const CONSTRAINTS: &str = "constraints";
    pub const LOCATION: &str = "rsc_location";
    pub const COLOCATION: &str = "rsc_colocation";
    pub const ORDER: &str = "rsc_order";
    pub const RESOURCE_SET: &str = "resource_set";
    pub const RESOURCE_REF: &str = "resource_ref";
    pub const META_ATTRIBUTES: &str = "meta_attributes";
    pub const INSTANCE_ATTRIBUTES: &str = "instance_attributes";
    pub const NVPAIR: &str = "nvpair";
    pub const LRM: &str = "lrm";
    pub const LRM_RESOURCES: &str = "lrm_resources";
    pub const LRM_RESOURCE: &str = "lrm_resource";
    pub const LRM_RSC_OP: &str = "lrm_rsc_op";
}

/// Pacemaker CIB attribute names and fixed values
pub mod attrs {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const VALUE: &str = "value";
    pub const UNAME: &str = "uname";
    pub const OPERATION: &str = "operation";
    pub const RC_CODE: &str = "rc-code";
    pub const RSC: &str = "rsc";
    pub const WITH_RSC: &str = "with-rsc";
    pub const FIRST: &str = "first";
    pub const THEN: &str = "then";
    pub const IN_CCM: &str = "in_ccm";
    pub const CRMD: &str = "crmd";
    pub const JOIN: &str = "join";
    pub const EXPECTED: &str = "expected";
    pub const TARGET_ROLE: &str = "target-role";
    pub const STANDBY: &str = "standby";
    pub const STANDBY_ON: &str = "on";
}
