use crate::document::Document;
use crate::errors::Result;
use crate::model::{attrs, tags, ClusterProperty, BOOTSTRAP_SET_ID};
use crate::path::{ensure_child, set_attribute, Step};
use tracing::debug;

/// Set a cluster property in the bootstrap property set
///
/// Creates `configuration`, `crm_config`, the bootstrap
/// `cluster_property_set` and the property's nvpair as needed.
///
/// # Errors
///
/// Returns `MissingRoot` if the document is not rooted at `<cib>`.
pub fn set_cluster_property(doc: &mut Document, property: &ClusterProperty, value: &str) -> Result<()> {
    let cib = doc.cib_mut()?;
    let configuration = ensure_child(cib, &Step::tag(tags::CONFIGURATION), &[]);
    let crm_config = ensure_child(configuration, &Step::tag(tags::CRM_CONFIG), &[]);
    let property_set = ensure_child(
        crm_config,
        &Step::with_attr(tags::CLUSTER_PROPERTY_SET, attrs::ID, BOOTSTRAP_SET_ID),
        &[],
    );

    let nvpair_id = property.nvpair_id();
    let nvpair = ensure_child(
        property_set,
        &Step::with_attr(tags::NVPAIR, attrs::ID, &nvpair_id),
        &[(attrs::NAME, property.name())],
    );
    set_attribute(nvpair, attrs::VALUE, value);
    debug!(property = property.name(), value, "set cluster property");
    Ok(())
}

pub fn set_stonith_enabled(doc: &mut Document, enabled: bool) -> Result<()> {
    let value = if enabled { "true" } else { "false" };
    set_cluster_property(doc, &ClusterProperty::StonithEnabled, value)
}

pub fn set_cluster_name(doc: &mut Document, name: &str) -> Result<()> {
    set_cluster_property(doc, &ClusterProperty::ClusterName, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{attribute, find_all, find_first};
    use crate::queries::{cluster_name, stonith_enabled};

    #[test]
    fn test_builds_missing_containers() {
        let mut doc = Document::parse("<cib/>").unwrap();
        set_stonith_enabled(&mut doc, false).unwrap();
        assert_eq!(stonith_enabled(&doc).unwrap(), Some(false));

        let path = [
            Step::tag(tags::CONFIGURATION),
            Step::tag(tags::CRM_CONFIG),
            Step::with_attr(tags::CLUSTER_PROPERTY_SET, attrs::ID, BOOTSTRAP_SET_ID),
            Step::with_attr(tags::NVPAIR, attrs::ID, "cib-bootstrap-options-stonith-enabled"),
        ];
        let nvpair = find_first(doc.cib().unwrap(), &path).unwrap();
        assert_eq!(attribute(nvpair, attrs::NAME), Some("stonith-enabled"));
        assert_eq!(attribute(nvpair, attrs::VALUE), Some("false"));
    }

    #[test]
    fn test_overwrites_existing_value() {
        let mut doc = Document::parse(
            r#"<cib><configuration><crm_config>
                <cluster_property_set id="cib-bootstrap-options">
                    <nvpair id="cib-bootstrap-options-cluster-name" name="cluster-name" value="old"/>
                </cluster_property_set>
            </crm_config></configuration></cib>"#,
        )
        .unwrap();
        set_cluster_name(&mut doc, "linstor").unwrap();
        set_cluster_name(&mut doc, "linstor").unwrap();
        assert_eq!(cluster_name(&doc).unwrap(), "linstor");

        let cib = doc.cib().unwrap();
        let path = [
            Step::tag(tags::CONFIGURATION),
            Step::tag(tags::CRM_CONFIG),
            Step::tag(tags::CLUSTER_PROPERTY_SET),
            Step::tag(tags::NVPAIR),
        ];
        assert_eq!(find_all(cib, &path).len(), 1);
    }

    #[test]
    fn test_rejects_foreign_root() {
        let mut doc = Document::parse("<config/>").unwrap();
        assert!(set_stonith_enabled(&mut doc, true).is_err());
        assert_eq!(doc, Document::parse("<config/>").unwrap());
    }
}
