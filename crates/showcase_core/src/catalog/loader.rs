//! Catalog loading pipeline.
//!
//! # Responsibility
//! - Fetch CSV text through the transport seam, parse it with header-based
//!   column mapping, and normalize every row into a typed [`Project`].
//! - Pin one successful load per catalog instance so every caller in a page
//!   session shares the same fetch+parse.
//!
//! # Invariants
//! - A catalog triggers at most one successful fetch; failed loads are not
//!   cached and a later caller may retry.
//! - An empty sheet (headers only, or nothing at all) is an empty catalog,
//!   not an error.
//! - Rows whose cells are all empty are skipped.

use crate::catalog::row::{split_multi, RowFields};
use crate::catalog::schema;
use crate::catalog::source::{ProjectSource, SourceError};
use crate::model::project::{Project, UNTITLED_NAME};
use csv::{ReaderBuilder, Trim};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure while loading the projects catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// The resource could not be fetched.
    Source(SourceError),
    /// The fetched text could not be parsed as tabular data.
    Csv(csv::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
            Self::Csv(err) => write!(f, "failed to parse projects sheet: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::Csv(err) => Some(err),
        }
    }
}

impl From<SourceError> for CatalogError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Project catalog with an explicitly scoped single-load cache.
///
/// The cache lives on the instance, not in ambient global state: two page
/// renderers sharing one catalog share one load, and dropping the catalog
/// drops the records. The cell is thread-safe, so a concurrent first call
/// blocks on the in-flight load instead of issuing a second fetch.
pub struct ProjectCatalog<S: ProjectSource> {
    source: S,
    projects: OnceCell<Vec<Project>>,
}

impl<S: ProjectSource> ProjectCatalog<S> {
    /// Creates a catalog over the given source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            projects: OnceCell::new(),
        }
    }

    /// Returns the normalized records, loading them on first call.
    ///
    /// # Side effects
    /// - First successful call fetches and parses the sheet.
    /// - Emits `catalog_load` logging events with row count and duration.
    pub fn projects(&self) -> CatalogResult<&[Project]> {
        self.projects
            .get_or_try_init(|| self.load())
            .map(Vec::as_slice)
    }

    fn load(&self) -> CatalogResult<Vec<Project>> {
        let started_at = Instant::now();
        info!(
            "event=catalog_load module=catalog status=start location={}",
            self.source.location()
        );

        let text = self.source.fetch()?;
        match parse_projects(&text) {
            Ok(projects) => {
                info!(
                    "event=catalog_load module=catalog status=ok location={} rows={} duration_ms={}",
                    self.source.location(),
                    projects.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(projects)
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=catalog status=error location={} duration_ms={} error={}",
                    self.source.location(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Parses CSV text into normalized records.
///
/// Values are kept as strings throughout; the sheet's year column is
/// display text, never a number.
pub fn parse_projects(text: &str) -> CatalogResult<Vec<Project>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut projects = Vec::new();
    for result in reader.records() {
        let record = result?;
        let fields = RowFields::from_record(&headers, &record);
        if fields.is_blank() {
            continue;
        }
        projects.push(normalize_row(&fields));
    }

    Ok(projects)
}

fn normalize_row(fields: &RowFields) -> Project {
    let slug = fields.first_of(schema::SLUG_COLUMNS).to_string();

    let id = match fields.first_of(schema::ID_COLUMNS) {
        "" => slug.clone(),
        value => value.to_string(),
    };

    let name = match fields.first_of(schema::NAME_COLUMNS) {
        "" => UNTITLED_NAME.to_string(),
        value => value.to_string(),
    };

    let collections: BTreeSet<String> = schema::COLLECTION_COLUMNS
        .iter()
        .flat_map(|column| split_multi(fields.field(column)))
        .collect();

    Project {
        id,
        name,
        slug,
        year: fields.first_of(schema::YEAR_COLUMNS).to_string(),
        region: split_multi(fields.first_of(schema::REGION_COLUMNS)),
        types: project_types(fields),
        designer: fields.first_of(schema::DESIGNER_COLUMNS).to_string(),
        purchaser: fields.first_of(schema::PURCHASER_COLUMNS).to_string(),
        summary: fields.first_of(schema::SUMMARY_COLUMNS).to_string(),
        collections,
        cover_image_url: fields.first_of(schema::COVER_IMAGE_COLUMNS).to_string(),
        project_url: fields.first_of(schema::PROJECT_URL_COLUMNS).to_string(),
    }
}

/// Reads type labels from the canonical multi-valued column, falling back
/// to the numbered columns older sheet exports used.
fn project_types(fields: &RowFields) -> Vec<String> {
    let combined = split_multi(fields.first_of(schema::TYPE_COLUMNS));
    if !combined.is_empty() {
        return combined;
    }

    schema::TYPE_FALLBACK_COLUMNS
        .iter()
        .map(|column| fields.field(column))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}
