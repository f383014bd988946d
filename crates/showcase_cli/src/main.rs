//! CLI probe entry point.
//!
//! # Responsibility
//! - Load a projects sheet and print both page renders as text, to verify
//!   `showcase_core` wiring independently from any page host.
//! - Keep output deterministic for quick local sanity checks.

use showcase_core::{
    FileSource, ListingService, Mount, SlotValue, TemplateSpec, SLOT_DETAIL_LINK,
    SLOT_PROJECT_NAME, SLOT_PROJECT_TYPE, SLOT_REGION, SLOT_YEAR,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(csv_path) = std::env::args().nth(1) else {
        eprintln!("usage: showcase_cli <projects.csv>");
        return ExitCode::FAILURE;
    };

    let service = ListingService::new(FileSource::new(csv_path));

    let mut index = Mount::new(TemplateSpec::project_index());
    if let Err(err) = service.render_project_index(&mut index) {
        eprintln!("failed to load projects: {err}");
        return ExitCode::FAILURE;
    }
    print_page("project index", &index);

    let mut grid = Mount::new(TemplateSpec::selected_works());
    if let Err(err) = service.render_selected_works(&mut grid) {
        eprintln!("failed to load projects: {err}");
        return ExitCode::FAILURE;
    }
    print_page("selected works", &grid);

    ExitCode::SUCCESS
}

fn print_page(title: &str, mount: &Mount) {
    println!("== {title}: {} items", mount.items().len());
    for item in mount.items() {
        let name = item.text(SLOT_PROJECT_NAME).unwrap_or("");
        let year = item.text(SLOT_YEAR).unwrap_or("");
        let types = item.text(SLOT_PROJECT_TYPE).unwrap_or("");
        let region = item.text(SLOT_REGION).unwrap_or("");
        let href = match item.value(SLOT_DETAIL_LINK) {
            Some(SlotValue::Link { href }) => href.as_str(),
            _ => "",
        };
        println!("  - {name} ({year}) [{types}] {region} -> {href}");
    }
}
