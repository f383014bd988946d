//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical record one CSV row normalizes into.
//! - Provide derived presentation values (detail link, combined filter tags).
//!
//! # Invariants
//! - A `Project` is constructed by the loader and never mutated afterwards.
//! - Multi-valued fields (`region`, `types`) hold trimmed, non-empty entries.
//! - `collections` is duplicate-free by construction.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Placeholder shown when a row carries no usable name.
pub const UNTITLED_NAME: &str = "Untitled";

/// Link target used when no detail page can be derived for a row.
pub const DETAIL_FALLBACK_HREF: &str = "#";

// Only slugs that are safe as a bare URL path segment become detail links.
static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._~-]*$").expect("valid slug regex"));

/// Canonical normalized record for one portfolio project row.
///
/// Every field is independently optional at the source level; the loader
/// fills defaults (`""`, empty list, `UNTITLED_NAME`) so render code never
/// has to distinguish "column absent" from "cell empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Identifier taken from the sheet's ID column, falling back to `slug`.
    pub id: String,
    /// Display name. Defaults to [`UNTITLED_NAME`] when the row has none.
    pub name: String,
    /// URL slug used to derive the detail-page link. Empty allowed.
    pub slug: String,
    /// Completion year, kept as text (never numerically coerced).
    pub year: String,
    /// Regions the project spans, split from a multi-valued cell.
    pub region: Vec<String>,
    /// Project type labels shown through bounded chip slots.
    pub types: Vec<String>,
    /// Credited designer, or empty.
    pub designer: String,
    /// Purchasing client, or empty.
    pub purchaser: String,
    /// Short descriptive blurb, or empty.
    pub summary: String,
    /// Collection labels this project belongs to (exact-match membership).
    pub collections: BTreeSet<String>,
    /// Hero/hover image URL, or empty when the sheet has none.
    pub cover_image_url: String,
    /// Explicit detail-page URL; wins over the slug-derived link when set.
    pub project_url: String,
}

impl Project {
    /// Returns the detail-page link target for this project.
    ///
    /// Resolution order:
    /// 1. the explicit project URL column, when non-empty;
    /// 2. `/projects/<slug>.html` when the slug is URL-path safe;
    /// 3. [`DETAIL_FALLBACK_HREF`] otherwise.
    pub fn detail_href(&self) -> String {
        if !self.project_url.is_empty() {
            return self.project_url.clone();
        }
        if SLUG_RE.is_match(&self.slug) {
            return format!("/projects/{}.html", self.slug);
        }
        DETAIL_FALLBACK_HREF.to_string()
    }

    /// Returns whether this project belongs to the given collection label.
    ///
    /// Membership is exact and case-sensitive; labels are stored as the
    /// sheet spelled them.
    pub fn is_in_collection(&self, label: &str) -> bool {
        self.collections.contains(label)
    }

    /// Returns the combined filter-tag string read by the external list
    /// filter: region entries followed by type entries, lower-cased and
    /// comma-joined.
    pub fn combined_tags(&self) -> String {
        self.region
            .iter()
            .chain(self.types.iter())
            .map(|value| value.to_lowercase())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Returns whether the row carries a usable cover image URL.
    pub fn has_cover_image(&self) -> bool {
        !self.cover_image_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, DETAIL_FALLBACK_HREF, UNTITLED_NAME};
    use std::collections::BTreeSet;

    fn empty_project() -> Project {
        Project {
            id: String::new(),
            name: UNTITLED_NAME.to_string(),
            slug: String::new(),
            year: String::new(),
            region: Vec::new(),
            types: Vec::new(),
            designer: String::new(),
            purchaser: String::new(),
            summary: String::new(),
            collections: BTreeSet::new(),
            cover_image_url: String::new(),
            project_url: String::new(),
        }
    }

    #[test]
    fn detail_href_prefers_explicit_project_url() {
        let mut project = empty_project();
        project.slug = "harbor-house".to_string();
        project.project_url = "https://example.com/harbor".to_string();
        assert_eq!(project.detail_href(), "https://example.com/harbor");
    }

    #[test]
    fn detail_href_derives_page_from_safe_slug() {
        let mut project = empty_project();
        project.slug = "harbor-house".to_string();
        assert_eq!(project.detail_href(), "/projects/harbor-house.html");
    }

    #[test]
    fn detail_href_falls_back_for_missing_or_unsafe_slug() {
        let mut project = empty_project();
        assert_eq!(project.detail_href(), DETAIL_FALLBACK_HREF);

        project.slug = "bad slug/with spaces".to_string();
        assert_eq!(project.detail_href(), DETAIL_FALLBACK_HREF);
    }

    #[test]
    fn combined_tags_lowercases_and_joins_region_then_types() {
        let mut project = empty_project();
        project.region = vec!["Asia".to_string(), "Americas".to_string()];
        project.types = vec!["Hospitality".to_string()];
        assert_eq!(project.combined_tags(), "asia,americas,hospitality");
    }

    #[test]
    fn collection_membership_is_case_sensitive() {
        let mut project = empty_project();
        project.collections.insert("Selected Works".to_string());
        assert!(project.is_in_collection("Selected Works"));
        assert!(!project.is_in_collection("selected works"));
    }
}
