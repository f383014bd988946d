//! Structured template descriptions and rendered output containers.
//!
//! # Responsibility
//! - Declare which named slots a page template exposes and of what kind.
//! - Hold the populated fragments a render pass produces.
//!
//! # Invariants
//! - Slot ids below are the stable contract read by the external list
//!   filter; hosts translate them back into their own markup.
//! - A `RenderedItem` only ever contains values for slots its template
//!   declares.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Visible project name. Also the value the external filter matches on.
pub const SLOT_PROJECT_NAME: &str = "project-name";
/// Completion year, displayed as text.
pub const SLOT_YEAR: &str = "year";
/// Comma-joined region display text.
pub const SLOT_REGION: &str = "region";
/// Full joined type list, mirrored for the external filter.
pub const SLOT_PROJECT_TYPE: &str = "project-type";
/// Credited designer text block.
pub const SLOT_DESIGNER: &str = "designer";
/// Purchasing client text block.
pub const SLOT_PURCHASER: &str = "purchaser";
/// Short descriptive blurb.
pub const SLOT_SUMMARY: &str = "summary";
/// Hero/hover image.
pub const SLOT_COVER_IMAGE: &str = "cover-image";
/// Detail-page link.
pub const SLOT_DETAIL_LINK: &str = "detail-link";
/// Combined lower-cased region+type tag string for the external filter.
pub const SLOT_FILTER_TAGS: &str = "filter-tags";

/// Prefix of the bounded type-chip slots (`type-1`, `type-2`, ...).
pub const TYPE_SLOT_PREFIX: &str = "type-";

/// Number of type chips the standard page templates expose.
pub const STANDARD_TYPE_SLOTS: usize = 3;

/// Returns the chip slot id for a 1-based position.
pub fn type_slot_id(position: usize) -> String {
    format!("{TYPE_SLOT_PREFIX}{position}")
}

/// Kind of value a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    /// Plain text content. Binding text clears any host-side empty marker.
    Text,
    /// Image source plus accessible label.
    Image,
    /// Link target.
    Link,
}

/// One named slot a template exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSpec {
    pub id: String,
    pub kind: SlotKind,
}

impl SlotSpec {
    pub fn text(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: SlotKind::Text,
        }
    }

    pub fn image(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: SlotKind::Image,
        }
    }

    pub fn link(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: SlotKind::Link,
        }
    }
}

/// Structured description of one item template: the retained, detached copy
/// of the fragment a page exposes for cloning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSpec {
    slots: Vec<SlotSpec>,
}

impl TemplateSpec {
    /// Builds a template from an explicit slot list.
    pub fn new(slots: Vec<SlotSpec>) -> Self {
        Self { slots }
    }

    /// Standard item template for the filterable project index page.
    pub fn project_index() -> Self {
        let mut slots = standard_item_slots();
        slots.push(SlotSpec::text(SLOT_DESIGNER));
        slots.push(SlotSpec::text(SLOT_PURCHASER));
        slots.push(SlotSpec::text(SLOT_SUMMARY));
        Self::new(slots)
    }

    /// Standard item template for the "Selected Works" grid page, which
    /// shows no prose blocks.
    pub fn selected_works() -> Self {
        Self::new(standard_item_slots())
    }

    /// Returns the declared kind of a slot, or `None` when undeclared.
    pub fn slot_kind(&self, id: &str) -> Option<SlotKind> {
        self.slots
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| slot.kind)
    }

    /// Returns the fixed number of type-chip slots this template declares.
    pub fn type_slot_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.id.starts_with(TYPE_SLOT_PREFIX) && slot.kind == SlotKind::Text)
            .count()
    }

    /// Declared slots in declaration order.
    pub fn slots(&self) -> &[SlotSpec] {
        &self.slots
    }
}

fn standard_item_slots() -> Vec<SlotSpec> {
    let mut slots = vec![
        SlotSpec::text(SLOT_PROJECT_NAME),
        SlotSpec::text(SLOT_YEAR),
        SlotSpec::text(SLOT_REGION),
        SlotSpec::text(SLOT_PROJECT_TYPE),
        SlotSpec::image(SLOT_COVER_IMAGE),
        SlotSpec::link(SLOT_DETAIL_LINK),
        SlotSpec::text(SLOT_FILTER_TAGS),
    ];
    for position in 1..=STANDARD_TYPE_SLOTS {
        slots.push(SlotSpec::text(type_slot_id(position)));
    }
    slots
}

/// One bound slot value inside a rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotValue {
    Text(String),
    Image { src: String, alt: String },
    Link { href: String },
}

impl SlotValue {
    /// Returns the slot kind this value can fill.
    pub fn kind(&self) -> SlotKind {
        match self {
            Self::Text(_) => SlotKind::Text,
            Self::Image { .. } => SlotKind::Image,
            Self::Link { .. } => SlotKind::Link,
        }
    }
}

/// One populated fragment produced for one record.
///
/// Slots absent from the map were never bound; the host keeps whatever
/// placeholder presentation its template carries for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedItem {
    values: BTreeMap<String, SlotValue>,
}

impl RenderedItem {
    pub(crate) fn set(&mut self, slot: String, value: SlotValue) {
        self.values.insert(slot, value);
    }

    /// Returns the bound value for a slot, if any.
    pub fn value(&self, slot: &str) -> Option<&SlotValue> {
        self.values.get(slot)
    }

    /// Returns the bound text for a slot, if it holds text.
    pub fn text(&self, slot: &str) -> Option<&str> {
        match self.values.get(slot) {
            Some(SlotValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Iterates bound (slot, value) pairs in stable slot-id order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &SlotValue)> {
        self.values.iter().map(|(slot, value)| (slot.as_str(), value))
    }
}

/// A page container: the retained item template plus the rendered items.
///
/// A mount built `without_template` models a page that lacks this
/// renderer's mount point; rendering into it is explicitly not applicable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    template: Option<TemplateSpec>,
    items: Vec<RenderedItem>,
}

impl Mount {
    /// Creates a mount holding one retained item template.
    pub fn new(template: TemplateSpec) -> Self {
        Self {
            template: Some(template),
            items: Vec::new(),
        }
    }

    /// Creates a mount for a page without this renderer's template.
    pub fn without_template() -> Self {
        Self {
            template: None,
            items: Vec::new(),
        }
    }

    /// Returns the retained template, if the page exposes one.
    pub fn template(&self) -> Option<&TemplateSpec> {
        self.template.as_ref()
    }

    /// Rendered items in final, deterministic order.
    pub fn items(&self) -> &[RenderedItem] {
        &self.items
    }

    pub(crate) fn replace_items(&mut self, items: Vec<RenderedItem>) {
        self.items = items;
    }
}

/// Explicit capability-check result of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    /// The mount exposed a template and its items were replaced.
    Applicable,
    /// The page lacks this renderer's mount point; nothing was touched.
    NotApplicable,
}

impl Applicability {
    pub fn is_applicable(self) -> bool {
        matches!(self, Self::Applicable)
    }
}
