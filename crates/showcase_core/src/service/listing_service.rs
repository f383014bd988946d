//! Page listing service.
//!
//! # Responsibility
//! - Own one catalog and expose the two page surfaces: the filterable
//!   project index and the "Selected Works" grid.
//!
//! # Invariants
//! - Both page calls share the catalog's cached load; one service issues at
//!   most one fetch per session.
//! - A mount without a template never triggers a fetch.

use crate::catalog::loader::{CatalogResult, ProjectCatalog};
use crate::catalog::source::ProjectSource;
use crate::render::renderer::{render, RenderOptions};
use crate::render::template::{Applicability, Mount};

/// Collection label marking rows for the "Selected Works" grid.
pub const SELECTED_WORKS_LABEL: &str = "Selected Works";

/// Facade over one catalog instance and the render pass.
pub struct ListingService<S: ProjectSource> {
    catalog: ProjectCatalog<S>,
}

impl<S: ProjectSource> ListingService<S> {
    /// Creates a service loading from the given source.
    pub fn new(source: S) -> Self {
        Self {
            catalog: ProjectCatalog::new(source),
        }
    }

    /// The underlying catalog, for callers that need raw records.
    pub fn catalog(&self) -> &ProjectCatalog<S> {
        &self.catalog
    }

    /// Renders the full project index, sorted by name.
    pub fn render_project_index(&self, mount: &mut Mount) -> CatalogResult<Applicability> {
        self.render_with(mount, &RenderOptions::default())
    }

    /// Renders the "Selected Works" grid: only records in that collection,
    /// sorted by name.
    pub fn render_selected_works(&self, mount: &mut Mount) -> CatalogResult<Applicability> {
        self.render_with(mount, &RenderOptions::for_collection(SELECTED_WORKS_LABEL))
    }

    /// Renders with explicit options.
    ///
    /// The applicability check runs before the load so pages without this
    /// mount point never cost a fetch.
    pub fn render_with(
        &self,
        mount: &mut Mount,
        options: &RenderOptions,
    ) -> CatalogResult<Applicability> {
        if mount.template().is_none() {
            return Ok(Applicability::NotApplicable);
        }

        let projects = self.catalog.projects()?;
        Ok(render(projects, mount, options))
    }
}
