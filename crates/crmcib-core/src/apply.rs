//! Functional-boundary apply function
//!
//! `apply()` takes ownership of a document, executes one command and returns
//! the mutated document. Every mutation validates its target before touching
//! the tree, so on `Err` no partial change has been made.
//!
//! ```
//! use crmcib_core::{apply, Command, Document};
//!
//! let doc = Document::parse(r#"<cib><configuration><resources><primitive id="p1"/></resources></configuration></cib>"#).unwrap();
//! let cmd = Command::SetTargetRole {
//!     resource_id: "p1".to_string(),
//!     started: false,
//! };
//! let doc = apply(doc, &cmd).unwrap();
//! assert!(doc.to_xml_string().unwrap().contains("Stopped"));
//! ```

use crate::commands::Command;
use crate::document::Document;
use crate::errors::Result;
use crate::ops::{node_ops, property_ops, resource_ops};

/// Apply a command to a document, returning the mutated document
///
/// # Errors
///
/// Returns the error of the underlying mutation: `ResourceNotFound`,
/// `NodeNotFound`, `MissingAttribute` or `MissingRoot`.
pub fn apply(mut doc: Document, command: &Command) -> Result<Document> {
    match command {
        Command::SetTargetRole {
            resource_id,
            started,
        } => resource_ops::set_target_role(&mut doc, resource_id, *started)?,
        Command::SetStandby { uname } => node_ops::set_standby(&mut doc, uname)?,
        Command::ClearStandby { uname } => node_ops::clear_standby(&mut doc, uname)?,
        Command::SetClusterProperty { property, value } => {
            property_ops::set_cluster_property(&mut doc, property, value)?
        }
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CibError;
    use crate::model::ClusterProperty;
    use crate::queries::{is_standby, stonith_enabled};

    const CIB: &str = r#"<cib><configuration>
        <nodes><node id="1" uname="li0"/></nodes>
        <resources><primitive id="p1"/></resources>
    </configuration></cib>"#;

    #[test]
    fn test_apply_each_command() {
        let doc = Document::parse(CIB).unwrap();
        let doc = apply(doc, &Command::SetStandby { uname: "li0".to_string() }).unwrap();
        assert!(is_standby(&doc, "li0").unwrap());

        let doc = apply(
            doc,
            &Command::SetClusterProperty {
                property: ClusterProperty::StonithEnabled,
                value: "false".to_string(),
            },
        )
        .unwrap();
        assert_eq!(stonith_enabled(&doc).unwrap(), Some(false));

        let doc = apply(doc, &Command::ClearStandby { uname: "li0".to_string() }).unwrap();
        assert!(!is_standby(&doc, "li0").unwrap());
    }

    #[test]
    fn test_apply_propagates_not_found() {
        let doc = Document::parse(CIB).unwrap();
        let cmd = Command::SetTargetRole {
            resource_id: "p9".to_string(),
            started: true,
        };
        assert_eq!(
            apply(doc, &cmd).unwrap_err(),
            CibError::ResourceNotFound {
                resource_id: "p9".to_string()
            }
        );
    }

    #[test]
    fn test_command_log_names() {
        let cmd = Command::SetTargetRole {
            resource_id: "p1".to_string(),
            started: false,
        };
        assert_eq!(cmd.op_name(), "stop_resource");
        assert_eq!(cmd.entity_id(), "p1");
    }
}
