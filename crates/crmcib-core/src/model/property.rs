//! Cluster properties stored in the bootstrap property set

use std::fmt;

/// Id of the `cluster_property_set` holding cluster-wide options
pub const BOOTSTRAP_SET_ID: &str = "cib-bootstrap-options";

/// A cluster option inside the bootstrap property set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClusterProperty {
    StonithEnabled,
    ClusterName,
    /// Any other option, by its bare name (e.g. `no-quorum-policy`)
    Other(String),
}

impl ClusterProperty {
    /// The `name` attribute of the property's nvpair
    pub fn name(&self) -> &str {
        match self {
            ClusterProperty::StonithEnabled => "stonith-enabled",
            ClusterProperty::ClusterName => "cluster-name",
            ClusterProperty::Other(name) => name,
        }
    }

    /// Deterministic nvpair id: `<set-id>-<name>`
    pub fn nvpair_id(&self) -> String {
        format!("{}-{}", BOOTSTRAP_SET_ID, self.name())
    }
}

impl From<&str> for ClusterProperty {
    fn from(name: &str) -> Self {
        match name {
            "stonith-enabled" => ClusterProperty::StonithEnabled,
            "cluster-name" => ClusterProperty::ClusterName,
            other => ClusterProperty::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ClusterProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a boolean property value
///
/// Accepts the spellings `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
