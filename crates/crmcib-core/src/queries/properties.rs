use crate::document::Document;
use crate::errors::{CibError, Result};
use crate::model::property::parse_bool;
use crate::model::{attrs, tags, ClusterProperty, BOOTSTRAP_SET_ID};
use crate::path::{attribute, find_first, Step};

/// Value of a property in the bootstrap property set
///
/// An absent `configuration`, `crm_config`, property set or nvpair all mean
/// "no value" and yield the empty string.
///
/// # Errors
///
/// Returns `MissingRoot` if the document is not rooted at `<cib>`.
pub fn cluster_property(doc: &Document, property: &ClusterProperty) -> Result<String> {
    let cib = doc.cib()?;
    let nvpair_id = property.nvpair_id();
    let path = [
        Step::tag(tags::CONFIGURATION),
        Step::tag(tags::CRM_CONFIG),
        Step::with_attr(tags::CLUSTER_PROPERTY_SET, attrs::ID, BOOTSTRAP_SET_ID),
        Step::with_attr(tags::NVPAIR, attrs::ID, &nvpair_id),
    ];

    Ok(find_first(cib, &path)
        .and_then(|nvpair| attribute(nvpair, attrs::VALUE))
        .unwrap_or_default()
        .to_string())
}

/// Whether fencing is enabled; `None` when the property is unset
///
/// # Errors
///
/// Returns `InvalidPropertyValue` if the value is not a boolean spelling.
pub fn stonith_enabled(doc: &Document) -> Result<Option<bool>> {
    let value = cluster_property(doc, &ClusterProperty::StonithEnabled)?;
    if value.is_empty() {
        return Ok(None);
    }
    parse_bool(&value)
        .map(Some)
        .ok_or_else(|| CibError::InvalidPropertyValue {
            property: ClusterProperty::StonithEnabled.name().to_string(),
            value,
        })
}

/// The configured cluster name, empty if unset
///
/// # Errors
///
/// Returns `MissingRoot` if the document is not rooted at `<cib>`.
pub fn cluster_name(doc: &Document) -> Result<String> {
    cluster_property(doc, &ClusterProperty::ClusterName)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(xml: &str) -> Document {
        Document::parse(xml).unwrap()
    }

    const CONFIGURED: &str = r#"<cib><configuration><crm_config>
        <cluster_property_set id="cib-bootstrap-options">
            <nvpair id="cib-bootstrap-options-stonith-enabled" name="stonith-enabled" value="false"/>
            <nvpair id="cib-bootstrap-options-cluster-name" name="cluster-name" value="linstor"/>
        </cluster_property_set>
    </crm_config></configuration></cib>"#;

    #[test]
    fn test_reads_configured_values() {
        let d = doc(CONFIGURED);
        assert_eq!(stonith_enabled(&d).unwrap(), Some(false));
        assert_eq!(cluster_name(&d).unwrap(), "linstor");
    }

    #[test]
    fn test_absent_property_is_empty() {
        let d = doc("<cib><configuration/></cib>");
        assert_eq!(cluster_name(&d).unwrap(), "");
        assert_eq!(stonith_enabled(&d).unwrap(), None);
    }

    #[test]
    fn test_property_in_other_set_is_ignored() {
        let d = doc(
            r#"<cib><configuration><crm_config>
                <cluster_property_set id="other">
                    <nvpair id="cib-bootstrap-options-cluster-name" name="cluster-name" value="x"/>
                </cluster_property_set>
            </crm_config></configuration></cib>"#,
        );
        assert_eq!(cluster_name(&d).unwrap(), "");
    }

    #[test]
    fn test_non_boolean_stonith_value() {
        let d = doc(
            r#"<cib><configuration><crm_config><cluster_property_set id="cib-bootstrap-options">
                <nvpair id="cib-bootstrap-options-stonith-enabled" name="stonith-enabled" value="maybe"/>
            </cluster_property_set></crm_config></configuration></cib>"#,
        );
        assert!(matches!(
            stonith_enabled(&d),
            Err(CibError::InvalidPropertyValue { .. })
        ));
    }

    #[test]
    fn test_missing_root() {
        let d = doc("<configuration/>");
        assert_eq!(cluster_name(&d).unwrap_err(), CibError::MissingRoot);
    }
}
