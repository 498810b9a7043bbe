use placements::Registry;
use viewer::overlay::navigable_on_page;

use super::*;

#[test]
fn page_urls_are_in_page_order() {
    let urls = page_urls();
    assert_eq!(urls.len(), PAGE_COUNT);
    assert_eq!(urls[0], "/maps/campus-page-1.png");
    assert_eq!(urls[4], "/maps/campus-page-5.png");
}

#[test]
fn every_known_location_is_placed_and_navigable() {
    let registry = Registry::builtin();
    for location in known_locations() {
        let meta = registry
            .metadata(&location.name)
            .unwrap_or_else(|| panic!("{} missing from registry", location.name));
        assert!(!meta.is_map_only, "{} is map-only", location.name);
    }
}

#[test]
fn library_is_navigable_on_its_two_pages() {
    let registry = Registry::builtin();
    let locations = known_locations();
    for page_index in [0, 1] {
        let names: Vec<&str> = navigable_on_page(&registry, &locations, page_index)
            .into_iter()
            .map(|(location, _)| location.name.as_str())
            .collect();
        assert!(names.contains(&"Library"), "page {page_index}: {names:?}");
    }
}

#[test]
fn known_location_ids_are_unique() {
    let mut ids: Vec<String> = known_locations().into_iter().map(|l| l.id).collect();
    ids.sort();
    let before = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), before);
}
