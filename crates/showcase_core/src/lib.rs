//! Core catalog and rendering logic for the portfolio listing pages.
//! This crate is the single source of truth for listing invariants.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;

pub use catalog::loader::{parse_projects, CatalogError, CatalogResult, ProjectCatalog};
pub use catalog::row::{split_multi, RowFields, MULTI_VALUE_DELIMITERS};
pub use catalog::source::{FileSource, ProjectSource, SourceError, SourceResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, DETAIL_FALLBACK_HREF, UNTITLED_NAME};
pub use render::renderer::{render, RenderOptions};
pub use render::template::{
    type_slot_id, Applicability, Mount, RenderedItem, SlotKind, SlotSpec, SlotValue, TemplateSpec,
    SLOT_COVER_IMAGE, SLOT_DESIGNER, SLOT_DETAIL_LINK, SLOT_FILTER_TAGS, SLOT_PROJECT_NAME,
    SLOT_PROJECT_TYPE, SLOT_PURCHASER, SLOT_REGION, SLOT_SUMMARY, SLOT_YEAR,
    STANDARD_TYPE_SLOTS, TYPE_SLOT_PREFIX,
};
pub use service::listing_service::{ListingService, SELECTED_WORKS_LABEL};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
