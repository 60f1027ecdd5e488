use crate::document::Document;
use crate::model::{attrs, tags, OperationRecord, Resource, ResourceHistory};
use crate::path::{attribute, find_all, find_descendant, find_descendants, find_first, Step};
use crate::run_state::lrm_resource_path;
use xmltree::Element;

/// The `primitive[@id]` element anywhere in the document
///
/// Primitives nested in groups or clones are found too.
pub fn find_resource<'d>(doc: &'d Document, id: &str) -> Option<&'d Element> {
    let cib = doc.cib().ok()?;
    find_descendant(cib, &Step::with_attr(tags::PRIMITIVE, attrs::ID, id))
}

/// Typed view of a primitive
pub fn resource(doc: &Document, id: &str) -> Option<Resource> {
    find_resource(doc, id).and_then(Resource::from_element)
}

/// Every primitive in the configuration section, in document order
pub fn list_resources(doc: &Document) -> Vec<Resource> {
    let Ok(cib) = doc.cib() else {
        return Vec::new();
    };
    let path = [Step::tag(tags::CONFIGURATION), Step::tag(tags::RESOURCES)];
    let Some(resources) = find_first(cib, &path) else {
        return Vec::new();
    };
    find_descendants(resources, &Step::tag(tags::PRIMITIVE))
        .into_iter()
        .filter_map(Resource::from_element)
        .collect()
}

/// Operation history of a resource on every node that has one
pub fn resource_history(doc: &Document, id: &str) -> Vec<ResourceHistory> {
    let Ok(cib) = doc.cib() else {
        return Vec::new();
    };
    let path = lrm_resource_path(id);
    find_all(cib, &[Step::tag(tags::STATUS), Step::tag(tags::NODE_STATE)])
        .into_iter()
        .filter_map(|node| {
            let lrm_resource = find_first(node, &path)?;
            Some(ResourceHistory {
                node: attribute(node, attrs::UNAME).unwrap_or_default().to_string(),
                resource: id.to_string(),
                records: OperationRecord::list_from(lrm_resource),
            })
        })
        .collect()
}
