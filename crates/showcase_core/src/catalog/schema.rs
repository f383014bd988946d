//! Recognized sheet columns.
//!
//! # Responsibility
//! - Name every column the normalizer reads, with the aliases the various
//!   sheet exports have used over time.
//!
//! All lookups through these aliases are case- and whitespace-insensitive.
//! The single multi-valued type column is canonical; the numbered type
//! columns are a fallback for older sheets (see DESIGN.md).

/// Display name aliases.
pub const NAME_COLUMNS: &[&str] = &["Name", "Project Name"];

/// Identifier aliases, tried before falling back to the slug.
pub const ID_COLUMNS: &[&str] = &["Item ID", "ID"];

/// Detail-page slug.
pub const SLUG_COLUMNS: &[&str] = &["Slug"];

/// Completion year, displayed as text.
pub const YEAR_COLUMNS: &[&str] = &["Year"];

/// Multi-valued region cell.
pub const REGION_COLUMNS: &[&str] = &["Region"];

/// Canonical multi-valued project type cell.
pub const TYPE_COLUMNS: &[&str] = &["Project Type"];

/// Numbered type columns kept for older sheet exports.
pub const TYPE_FALLBACK_COLUMNS: &[&str] = &["Type 1", "Type 2", "Type 3"];

/// Credited designer.
pub const DESIGNER_COLUMNS: &[&str] = &["Designer"];

/// Purchasing client.
pub const PURCHASER_COLUMNS: &[&str] = &["Purchaser"];

/// Short descriptive blurb.
pub const SUMMARY_COLUMNS: &[&str] = &["Summary"];

/// Explicit detail-page URL.
pub const PROJECT_URL_COLUMNS: &[&str] = &["Project URL"];

/// Hero/hover image URL aliases.
pub const COVER_IMAGE_COLUMNS: &[&str] = &["Hero Image URL", "Project Hero"];

/// Columns whose split values union into collection membership. The
/// membership column carries label text, not a boolean flag.
pub const COLLECTION_COLUMNS: &[&str] = &["Collections?", "Collections Tags"];
