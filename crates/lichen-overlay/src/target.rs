use lichen_dom::{Dom, NodeId};

// Structural contract of the world info container as the host app renders it.
// The class pair comes from the host's CSS-in-JS build; if upstream reships
// styles these need re-verifying against a fresh page capture.
pub const CONTAINER_CLASSES: [&str; 2] = ["css-1a7dy9c", "eu6qb932"];
pub const MARKER_TAG: &str = "em";

/// Attribute stamped on every element this system creates. Nothing else may
/// create, read, or remove elements carrying it.
pub const INJECTED_ATTR: &str = "data-lichen";

pub fn find_container(dom: &Dom) -> Option<NodeId> {
    dom.descendants(dom.root())
        .into_iter()
        .find(|id| CONTAINER_CLASSES.iter().all(|class| dom.has_class(*id, class)))
}

/// The host page's own inline markers inside the container, in document
/// order. Anything we injected is excluded.
pub fn host_markers(dom: &Dom, container: NodeId) -> Vec<NodeId> {
    dom.descendants(container)
        .into_iter()
        .filter(|id| dom.tag(*id) == Some(MARKER_TAG) && dom.attr(*id, INJECTED_ATTR).is_none())
        .collect()
}

pub fn injected_elements(dom: &Dom, container: NodeId) -> Vec<NodeId> {
    dom.descendants(container)
        .into_iter()
        .filter(|id| dom.attr(*id, INJECTED_ATTR).is_some())
        .collect()
}
