use chrono::{DateTime, Utc};
use lichen_core::{Annotation, AnnotationKind, Placement, WorldRecord};

pub const UPDATE_PREFIX: &str = "업데이트";
pub const STAFF_PICK_LABEL: &str = "스월";
pub const STAFF_PICK_COLOR: &str = "rgb(255, 67, 32)";
pub const RANKED_LABEL: &str = "인월";
pub const RANKED_COLOR: &str = "rgb(0, 142, 255)";

/// Derives the full annotation set for one record. Deterministic: the same
/// record always yields the same annotations in the same order.
pub fn derive_annotations(record: &WorldRecord) -> Vec<Annotation> {
    let mut out = Vec::new();

    if let Some(updated) = record.updated_at {
        out.push(Annotation {
            kind: AnnotationKind::UpdateDate,
            text: format!("{} {}", UPDATE_PREFIX, compact_date(&updated)),
            color: None,
            placement: Placement::AfterFirstMarker,
            order: 0,
        });
    }

    if record.staff_picked.unwrap_or(false) {
        out.push(Annotation {
            kind: AnnotationKind::StaffPicked,
            text: STAFF_PICK_LABEL.to_string(),
            color: Some(STAFF_PICK_COLOR.to_string()),
            placement: Placement::AfterLastMarker,
            order: 1,
        });
    }

    if record.ranked.unwrap_or(false) {
        out.push(Annotation {
            kind: AnnotationKind::Ranked,
            text: RANKED_LABEL.to_string(),
            color: Some(RANKED_COLOR.to_string()),
            placement: Placement::AfterLastMarker,
            order: 2,
        });
    }

    out
}

/// Two-digit year, zero-padded month and day: `2024-03-07T…` becomes
/// `24.03.07`. Rendered in UTC, matching the upstream timestamps.
pub fn compact_date(ts: &DateTime<Utc>) -> String {
    ts.format("%y.%m.%d").to_string()
}
