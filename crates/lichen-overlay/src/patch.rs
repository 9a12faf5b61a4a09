use lichen_core::{LichenError, LichenResult, Placement, WorldRecord};
use lichen_dom::{Dom, Page};
use tracing::debug;

use crate::annotate::derive_annotations;
use crate::target::{find_container, host_markers, injected_elements, INJECTED_ATTR, MARKER_TAG};

/// Applies the record's annotations to the live page as one mutation batch.
pub fn apply_annotations(page: &Page, record: &WorldRecord) -> LichenResult<()> {
    page.mutate(|dom| apply_to_dom(dom, record))
}

/// Clear-then-insert application. Prior injected output is always removed
/// first, so reapplying the same record converges instead of duplicating.
/// Anchors are re-resolved from scratch on every call; the container may have
/// been re-rendered since it was last seen.
pub fn apply_to_dom(dom: &mut Dom, record: &WorldRecord) -> LichenResult<()> {
    let container = find_container(dom)
        .ok_or_else(|| LichenError::Patch("info container missing at patch time".into()))?;

    let stale = injected_elements(dom, container);
    if !stale.is_empty() {
        debug!(world = %record.id, cleared = stale.len(), "removed prior annotations");
    }
    for id in stale {
        dom.detach(id);
    }

    let markers = host_markers(dom, container);
    let (Some(first), Some(last)) = (markers.first().copied(), markers.last().copied()) else {
        return Err(LichenError::Patch(
            "info container has no host markers".into(),
        ));
    };

    let mut tail = last;
    for annotation in derive_annotations(record) {
        let em = dom.create_element(MARKER_TAG);
        dom.set_attr(em, INJECTED_ATTR, annotation.kind.as_str());
        if let Some(color) = &annotation.color {
            dom.set_attr(em, "style", &format!("color: {}", color));
        }
        let text = dom.create_text(&annotation.text);
        dom.append_child(em, text);
        match annotation.placement {
            Placement::AfterFirstMarker => dom.insert_after(first, em),
            Placement::AfterLastMarker => {
                dom.insert_after(tail, em);
                tail = em;
            }
        }
    }

    Ok(())
}
