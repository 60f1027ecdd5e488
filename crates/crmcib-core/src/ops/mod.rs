//! In-place mutations of a cluster configuration document
//!
//! Every mutation is idempotent: containers are created only when absent and
//! applying the same mutation twice yields the same document as applying it
//! once. A mutation that fails leaves the document untouched.

pub mod node_ops;
pub mod property_ops;
pub mod resource_ops;

pub use node_ops::{clear_standby, set_standby};
pub use property_ops::{set_cluster_name, set_cluster_property, set_stonith_enabled};
pub use resource_ops::set_target_role;
