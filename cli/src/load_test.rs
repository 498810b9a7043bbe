use std::path::PathBuf;

use super::*;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("campus-map-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn registry_defaults_to_builtin() {
    let registry = registry(None).expect("builtin");
    assert_eq!(registry, Registry::builtin());
}

#[test]
fn registry_reads_json_file() {
    let path = temp_file(
        "registry.json",
        r#"[{"locationName": "Gym", "positions": [{"page": 2, "x": 10, "y": 20}]}]"#,
    );
    let registry = registry(Some(&path)).expect("load");
    assert_eq!(registry.len(), 1);
    assert!(registry.placement_on_page("Gym", 1).is_some());
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn registry_reports_missing_file() {
    let err = registry(Some(Path::new("/definitely/not/here.json"))).expect_err("missing");
    assert!(matches!(err, CliError::Io { .. }));
}

#[test]
fn registry_reports_invalid_entries() {
    let path = temp_file(
        "dup.json",
        r#"[
            {"locationName": "Gym", "positions": [{"page": 1, "x": 1, "y": 1}]},
            {"locationName": "Gym", "positions": [{"page": 2, "x": 1, "y": 1}]}
        ]"#,
    );
    let err = registry(Some(&path)).expect_err("duplicate");
    assert!(matches!(err, CliError::Registry(placements::RegistryError::DuplicateName(_))));
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn config_defaults_when_absent() {
    assert_eq!(config(None).expect("default"), ViewerConfig::default());
}

#[test]
fn config_reads_partial_json() {
    let path = temp_file("config.json", r#"{"resize_debounce_ms": 250}"#);
    let loaded = config(Some(&path));
    fs::remove_file(&path).expect("cleanup");
    let loaded = loaded.expect("config");
    assert_eq!(loaded.resize_debounce_ms, 250);
    assert_eq!(loaded.zoom, ViewerConfig::default().zoom);
}

#[test]
fn default_locations_cover_navigable_entries_only() {
    let registry = Registry::builtin();
    let known = locations(None, &registry).expect("locations");
    assert!(known.iter().any(|l| l.name == "Library" && l.id == "library"));
    assert!(known.iter().all(|l| l.name != "CR101"));
}

#[test]
fn locations_read_from_file() {
    let path = temp_file("locations.json", r#"[{"id": "loc-7", "name": "Chapel"}]"#);
    let known = locations(Some(&path), &Registry::builtin()).expect("locations");
    fs::remove_file(path).expect("cleanup");
    assert_eq!(known, vec![KnownLocation::new("loc-7", "Chapel")]);
}

#[test]
fn malformed_locations_file_is_reported() {
    let path = temp_file("bad-locations.json", "{");
    let err = locations(Some(&path), &Registry::builtin()).expect_err("malformed");
    fs::remove_file(path).expect("cleanup");
    assert!(matches!(err, CliError::Locations(_)));
}
