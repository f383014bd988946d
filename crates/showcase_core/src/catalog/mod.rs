//! Catalog loading layer: fetch, parse and normalize the projects sheet.
//!
//! # Responsibility
//! - Define the transport seam raw CSV text arrives through.
//! - Turn header-mapped rows into typed [`crate::model::project::Project`]
//!   records with best-effort defaults.
//! - Cache one successful load per catalog instance so both page renderers
//!   share a single fetch+parse.
//!
//! # Invariants
//! - Field lookups are case- and whitespace-insensitive against the sheet's
//!   original header names.
//! - Missing optional columns yield defaults, never an error.

pub mod loader;
pub mod row;
pub mod schema;
pub mod source;
