//! Read-only queries over a CIB document
//!
//! Absence is an answer, not a failure: an unset property reads as the empty
//! string, a node without a standby pair is not in standby, a resource that is
//! not running anywhere has no node. Errors are reserved for lookups that name
//! something the document does not contain and for malformed structure.

pub mod constraints;
pub mod nodes;
pub mod properties;
pub mod resources;

pub use constraints::{constraints_referencing, list_constraints};
pub use nodes::{find_configured_node, find_node_state, is_standby, list_configured_nodes, list_nodes, nvpair_value};
pub use properties::{cluster_name, cluster_property, stonith_enabled};
pub use resources::{find_resource, list_resources, resource, resource_history};
