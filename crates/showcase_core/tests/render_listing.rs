use showcase_core::{
    parse_projects, render, Applicability, Mount, Project, RenderOptions, SlotKind, SlotSpec,
    SlotValue, TemplateSpec, SLOT_COVER_IMAGE, SLOT_DETAIL_LINK, SLOT_PROJECT_NAME, SLOT_YEAR,
};

fn sample_projects() -> Vec<Project> {
    let text = "\
Name,Slug,Year,Region,Project Type,Hero Image URL,Collections?
Zeta Pavilion,zeta-pavilion,2020,Asia,Culture,,Selected Works
alpha Lofts,alpha-lofts,2018,Europe,Residential;Workplace,https://img.example/alpha.jpg,
Beta Hall,beta-hall,2022,Americas,Culture;Workplace;Retail;Hospitality,,Selected Works
";
    parse_projects(text).unwrap()
}

#[test]
fn renders_one_item_per_record_with_bounded_chip_slots() {
    let projects = sample_projects();
    let mut mount = Mount::new(TemplateSpec::project_index());

    let applicability = render(&projects, &mut mount, &RenderOptions::default());
    assert!(applicability.is_applicable());
    assert_eq!(mount.items().len(), 3);

    // Beta Hall carries four types but the template declares three chips.
    let beta = &mount.items()[1];
    assert_eq!(beta.text(SLOT_PROJECT_NAME), Some("Beta Hall"));
    assert_eq!(beta.text("type-1"), Some("Culture"));
    assert_eq!(beta.text("type-2"), Some("Workplace"));
    assert_eq!(beta.text("type-3"), Some("Retail"));
    assert_eq!(beta.text("type-4"), None);

    // Zeta Pavilion has one type; the remaining chips are blank, not absent.
    let zeta = &mount.items()[2];
    assert_eq!(zeta.text("type-1"), Some("Culture"));
    assert_eq!(zeta.text("type-2"), Some(""));
    assert_eq!(zeta.text("type-3"), Some(""));
}

#[test]
fn name_sort_is_case_folded_and_applied_before_appending() {
    let projects = sample_projects();
    let mut mount = Mount::new(TemplateSpec::project_index());
    render(&projects, &mut mount, &RenderOptions::default());

    let names: Vec<&str> = mount
        .items()
        .iter()
        .filter_map(|item| item.text(SLOT_PROJECT_NAME))
        .collect();
    assert_eq!(names, vec!["alpha Lofts", "Beta Hall", "Zeta Pavilion"]);
}

#[test]
fn unsorted_render_keeps_input_order() {
    let projects = sample_projects();
    let mut mount = Mount::new(TemplateSpec::project_index());
    render(
        &projects,
        &mut mount,
        &RenderOptions {
            collection: None,
            sort_by_name: false,
        },
    );

    let names: Vec<&str> = mount
        .items()
        .iter()
        .filter_map(|item| item.text(SLOT_PROJECT_NAME))
        .collect();
    assert_eq!(names, vec!["Zeta Pavilion", "alpha Lofts", "Beta Hall"]);
}

#[test]
fn collection_filter_retains_exact_members_only() {
    let projects = sample_projects();
    let mut mount = Mount::new(TemplateSpec::selected_works());
    render(
        &projects,
        &mut mount,
        &RenderOptions::for_collection("Selected Works"),
    );

    let names: Vec<&str> = mount
        .items()
        .iter()
        .filter_map(|item| item.text(SLOT_PROJECT_NAME))
        .collect();
    assert_eq!(names, vec!["Beta Hall", "Zeta Pavilion"]);

    let mut empty = Mount::new(TemplateSpec::selected_works());
    render(
        &projects,
        &mut empty,
        &RenderOptions::for_collection("selected works"),
    );
    assert!(empty.items().is_empty());
}

#[test]
fn rendering_twice_does_not_duplicate_items() {
    let projects = sample_projects();
    let mut mount = Mount::new(TemplateSpec::project_index());

    render(&projects, &mut mount, &RenderOptions::default());
    render(&projects, &mut mount, &RenderOptions::default());
    assert_eq!(mount.items().len(), 3);
}

#[test]
fn mount_without_template_is_not_applicable_and_untouched() {
    let projects = sample_projects();
    let mut mount = Mount::without_template();

    let applicability = render(&projects, &mut mount, &RenderOptions::default());
    assert_eq!(applicability, Applicability::NotApplicable);
    assert!(mount.items().is_empty());
}

#[test]
fn cover_image_binding_survives_only_for_rows_with_an_image() {
    let projects = sample_projects();
    let mut mount = Mount::new(TemplateSpec::project_index());
    render(&projects, &mut mount, &RenderOptions::default());

    let alpha = &mount.items()[0];
    assert_eq!(
        alpha.value(SLOT_COVER_IMAGE),
        Some(&SlotValue::Image {
            src: "https://img.example/alpha.jpg".to_string(),
            alt: "alpha Lofts".to_string(),
        })
    );

    let beta = &mount.items()[1];
    assert_eq!(beta.value(SLOT_COVER_IMAGE), None);
}

#[test]
fn slots_the_template_does_not_declare_are_skipped_silently() {
    let projects = sample_projects();
    // A sparse template: a name slot, plus a detail-link slot declared with
    // the wrong kind. Everything else the binder produces must be dropped.
    let template = TemplateSpec::new(vec![
        SlotSpec::text(SLOT_PROJECT_NAME),
        SlotSpec {
            id: SLOT_DETAIL_LINK.to_string(),
            kind: SlotKind::Text,
        },
    ]);
    let mut mount = Mount::new(template);

    let applicability = render(&projects, &mut mount, &RenderOptions::default());
    assert!(applicability.is_applicable());
    assert_eq!(mount.items().len(), 3);

    let first = &mount.items()[0];
    assert_eq!(first.text(SLOT_PROJECT_NAME), Some("alpha Lofts"));
    assert_eq!(first.text(SLOT_YEAR), None);
    assert_eq!(first.value(SLOT_DETAIL_LINK), None);
}
