use crate::document::Document;
use crate::errors::{CibError, Result};
use crate::model::{attrs, tags, TargetRole};
use crate::path::{ensure_child, find_descendant_mut, set_attribute, Step};
use tracing::debug;

/// Set the `target-role` meta attribute of a primitive
///
/// The primitive is searched anywhere in the tree, so members of groups and
/// clones can be targeted too. The `meta_attributes` container and the
/// `target-role` pair are created when absent, with ids
/// `<id>-meta_attributes` and `<id>-meta_attributes-target-role`.
///
/// # Errors
///
/// Returns `ResourceNotFound` if there is no `primitive` with that id; the
/// document is left untouched.
pub fn set_target_role(doc: &mut Document, resource_id: &str, started: bool) -> Result<()> {
    let cib = doc.cib_mut()?;
    let primitive = find_descendant_mut(cib, &Step::with_attr(tags::PRIMITIVE, attrs::ID, resource_id))
        .ok_or_else(|| CibError::ResourceNotFound {
            resource_id: resource_id.to_string(),
        })?;

    let meta_id = format!("{}-meta_attributes", resource_id);
    let meta = ensure_child(primitive, &Step::tag(tags::META_ATTRIBUTES), &[(attrs::ID, &meta_id)]);

    let pair_id = format!("{}-target-role", meta_id);
    let pair = ensure_child(
        meta,
        &Step::with_attr(tags::NVPAIR, attrs::NAME, attrs::TARGET_ROLE),
        &[(attrs::ID, &pair_id)],
    );
    let role = TargetRole::from_started(started);
    set_attribute(pair, attrs::VALUE, role.as_str());
    debug!(resource = resource_id, role = role.as_str(), "set target-role");
    Ok(())
}
