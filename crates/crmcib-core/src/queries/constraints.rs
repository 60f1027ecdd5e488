use crate::document::Document;
use crate::model::{tags, Constraint};
use crate::path::{child_elements, find_first, Step};

/// Every ordering, colocation and location constraint, in document order
pub fn list_constraints(doc: &Document) -> Vec<Constraint> {
    let Ok(cib) = doc.cib() else {
        return Vec::new();
    };
    let path = [Step::tag(tags::CONFIGURATION), Step::tag(tags::CONSTRAINTS)];
    find_first(cib, &path)
        .map(|constraints| {
            child_elements(constraints)
                .filter_map(Constraint::from_element)
                .collect()
        })
        .unwrap_or_default()
}

/// Constraints that are edges touching `resource`
pub fn constraints_referencing(doc: &Document, resource: &str) -> Vec<Constraint> {
    list_constraints(doc)
        .into_iter()
        .filter(|constraint| constraint.references(resource))
        .collect()
}
