//! List rendering pass.
//!
//! # Responsibility
//! - Filter and order records, bind each one, and replace a mount's items.
//!
//! # Invariants
//! - The mount is cleared before items are appended; rendering twice never
//!   duplicates items.
//! - Output order is deterministic: input order, optionally re-ordered by a
//!   stable case-folded name sort.
//! - A missing template is an explicit `NotApplicable`, and the mount is
//!   left untouched.

use crate::model::project::Project;
use crate::render::binder::bind_project;
use crate::render::template::{Applicability, Mount, RenderedItem, SlotValue, TemplateSpec};
use log::debug;

/// Options for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Retain only records belonging to this exact collection label.
    pub collection: Option<String>,
    /// Sort records by display name before rendering.
    pub sort_by_name: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            collection: None,
            sort_by_name: true,
        }
    }
}

impl RenderOptions {
    /// Options filtering to one collection, sorted by name.
    pub fn for_collection(label: impl Into<String>) -> Self {
        Self {
            collection: Some(label.into()),
            sort_by_name: true,
        }
    }
}

/// Renders records into the mount, replacing any previous items.
///
/// Returns [`Applicability::NotApplicable`] without touching the mount when
/// it exposes no template, so callers can run the same pass against pages
/// that lack this mount point.
pub fn render(projects: &[Project], mount: &mut Mount, options: &RenderOptions) -> Applicability {
    let items = {
        let Some(template) = mount.template() else {
            debug!("event=render module=render status=skipped reason=no_template");
            return Applicability::NotApplicable;
        };

        let mut selected: Vec<&Project> = match options.collection.as_deref() {
            Some(label) => projects
                .iter()
                .filter(|project| project.is_in_collection(label))
                .collect(),
            None => projects.iter().collect(),
        };

        if options.sort_by_name {
            // sort_by_key is stable, so equal names keep input order.
            selected.sort_by_key(|project| name_sort_key(&project.name));
        }

        let type_slots = template.type_slot_count();
        selected
            .into_iter()
            .map(|project| apply_bindings(template, bind_project(project, type_slots)))
            .collect()
    };

    mount.replace_items(items);
    Applicability::Applicable
}

/// Applies bound pairs against the template, dropping pairs for slots the
/// template does not declare (or declares with another kind). One malformed
/// template region never blocks other slots or records.
fn apply_bindings(template: &TemplateSpec, bindings: Vec<(String, SlotValue)>) -> RenderedItem {
    let mut item = RenderedItem::default();
    for (slot, value) in bindings {
        match template.slot_kind(&slot) {
            Some(kind) if kind == value.kind() => item.set(slot, value),
            _ => {}
        }
    }
    item
}

/// Case-folded collation key approximating locale-aware name comparison.
fn name_sort_key(name: &str) -> String {
    name.to_lowercase()
}
