//! crmcib core - in-memory model of a Pacemaker cluster information base
//!
//! This crate provides the document tree and everything that works on it
//! without talking to the cluster:
//! - typed views over nodes, resources, constraints and cluster properties
//! - idempotent mutations (target-role, standby, cluster properties)
//! - run-state inference from the status section's operation history
//! - constraint dissolution ahead of resource deletion
//! - the error taxonomy and structured logging facility shared with the engine
//!
//! Reading and committing documents is the engine crate's job.

pub mod apply;
pub mod commands;
pub mod dissolve;
pub mod document;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod path;
pub mod queries;
pub mod run_state;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use dissolve::{dissolve_constraints, Dissolution, RemovedEdge};
pub use document::Document;
pub use errors::{CibError, ExError, ExErrorKind, Result};
pub use model::{ClusterProperty, Constraint, ConstraintKind, JoinState, Node, NodeState, Resource, TargetRole};
pub use run_state::{cluster_run_state, node_of_resource, RunState};
