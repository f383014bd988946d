use showcase_core::{CatalogError, FileSource, ProjectCatalog, ProjectSource, SourceResult};
use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

const SHEET: &str = "\
Item ID,Name,Slug,Year,Region,Project Type,Designer,Purchaser,Summary,Project URL,Hero Image URL,Collections?,Collections Tags
12,Harbor House,harbor-house,2021,Asia;Americas,Hospitality|Retail,A. Lin,Harbor Group,\"Waterfront hotel, fully refitted\",,https://img.example/harbor.jpg,Selected Works,Selected Works;Residential
7,Atrium Offices,atrium-offices,2019,Europe,Workplace,,,,https://example.com/atrium,,,
";

fn write_sheet(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{text}").unwrap();
    file
}

#[test]
fn loads_and_normalizes_a_sheet_from_disk() {
    let file = write_sheet(SHEET);
    let catalog = ProjectCatalog::new(FileSource::new(file.path()));

    let projects = catalog.projects().unwrap();
    assert_eq!(projects.len(), 2);

    let harbor = &projects[0];
    assert_eq!(harbor.id, "12");
    assert_eq!(harbor.name, "Harbor House");
    assert_eq!(harbor.year, "2021");
    assert_eq!(harbor.region, vec!["Asia", "Americas"]);
    assert_eq!(harbor.types, vec!["Hospitality", "Retail"]);
    assert_eq!(harbor.designer, "A. Lin");
    assert_eq!(harbor.summary, "Waterfront hotel, fully refitted");
    assert_eq!(harbor.cover_image_url, "https://img.example/harbor.jpg");
    assert!(harbor.is_in_collection("Selected Works"));
    assert!(harbor.is_in_collection("Residential"));
    assert_eq!(harbor.detail_href(), "/projects/harbor-house.html");

    let atrium = &projects[1];
    assert!(atrium.collections.is_empty());
    assert_eq!(atrium.designer, "");
    assert_eq!(atrium.detail_href(), "https://example.com/atrium");
    assert!(!atrium.has_cover_image());
}

#[test]
fn header_only_sheet_is_an_empty_catalog_not_an_error() {
    let file = write_sheet("Name,Year\n");
    let catalog = ProjectCatalog::new(FileSource::new(file.path()));
    assert!(catalog.projects().unwrap().is_empty());
}

#[test]
fn unreadable_sheet_surfaces_a_source_error() {
    let catalog = ProjectCatalog::new(FileSource::new("no/such/sheet.csv"));
    let error = catalog.projects().unwrap_err();
    assert!(matches!(error, CatalogError::Source(_)));
}

struct CountingSource {
    text: Option<String>,
    fetches: Rc<Cell<usize>>,
}

impl ProjectSource for CountingSource {
    fn location(&self) -> String {
        "inline".to_string()
    }

    fn fetch(&self) -> SourceResult<String> {
        self.fetches.set(self.fetches.get() + 1);
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => Err(showcase_core::SourceError::Io {
                location: self.location(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            }),
        }
    }
}

#[test]
fn repeated_reads_share_one_fetch() {
    let fetches = Rc::new(Cell::new(0));
    let catalog = ProjectCatalog::new(CountingSource {
        text: Some(SHEET.to_string()),
        fetches: Rc::clone(&fetches),
    });

    assert_eq!(catalog.projects().unwrap().len(), 2);
    assert_eq!(catalog.projects().unwrap().len(), 2);
    assert_eq!(fetches.get(), 1);
}

#[test]
fn failed_loads_are_not_cached() {
    let fetches = Rc::new(Cell::new(0));
    let catalog = ProjectCatalog::new(CountingSource {
        text: None,
        fetches: Rc::clone(&fetches),
    });

    assert!(catalog.projects().is_err());
    assert!(catalog.projects().is_err());
    assert_eq!(fetches.get(), 2);
}
