//! Record-to-slot binding.
//!
//! # Responsibility
//! - Turn one record into a fixed list of (slot-id, value) pairs,
//!   decoupling "what data goes where" from how the host renders markup.
//!
//! # Invariants
//! - Text slots always bind, even when empty, so hosts clear their empty
//!   presentation markers.
//! - The image slot binds only for a non-empty URL, so the template's
//!   placeholder survives rows without a cover.
//! - Chip bindings are fixed arity: positions past the record's type list
//!   bind as blank text.

use crate::model::project::Project;
use crate::render::template::{
    type_slot_id, SlotValue, SLOT_COVER_IMAGE, SLOT_DESIGNER, SLOT_DETAIL_LINK, SLOT_FILTER_TAGS,
    SLOT_PROJECT_NAME, SLOT_PROJECT_TYPE, SLOT_PURCHASER, SLOT_REGION, SLOT_SUMMARY, SLOT_YEAR,
};

/// Binds one record against a template with `type_slots` chip positions.
///
/// The returned pairs may name slots a given template does not declare;
/// applying them filters those out (see the renderer).
pub fn bind_project(project: &Project, type_slots: usize) -> Vec<(String, SlotValue)> {
    let mut bindings = vec![
        (
            SLOT_PROJECT_NAME.to_string(),
            SlotValue::Text(project.name.clone()),
        ),
        (SLOT_YEAR.to_string(), SlotValue::Text(project.year.clone())),
        (
            SLOT_REGION.to_string(),
            SlotValue::Text(project.region.join(", ")),
        ),
        (
            SLOT_PROJECT_TYPE.to_string(),
            SlotValue::Text(project.types.join(", ")),
        ),
        (
            SLOT_DESIGNER.to_string(),
            SlotValue::Text(project.designer.clone()),
        ),
        (
            SLOT_PURCHASER.to_string(),
            SlotValue::Text(project.purchaser.clone()),
        ),
        (
            SLOT_SUMMARY.to_string(),
            SlotValue::Text(project.summary.clone()),
        ),
        (
            SLOT_FILTER_TAGS.to_string(),
            SlotValue::Text(project.combined_tags()),
        ),
        (
            SLOT_DETAIL_LINK.to_string(),
            SlotValue::Link {
                href: project.detail_href(),
            },
        ),
    ];

    for position in 1..=type_slots {
        let label = project
            .types
            .get(position - 1)
            .cloned()
            .unwrap_or_default();
        bindings.push((type_slot_id(position), SlotValue::Text(label)));
    }

    if project.has_cover_image() {
        bindings.push((
            SLOT_COVER_IMAGE.to_string(),
            SlotValue::Image {
                src: project.cover_image_url.clone(),
                alt: project.name.clone(),
            },
        ));
    }

    bindings
}
