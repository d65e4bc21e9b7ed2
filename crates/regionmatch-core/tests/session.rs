use regionmatch_core::prelude::*;
use regionmatch_core::format::NOT_AVAILABLE;

#[test]
fn picker_to_table_flow() {
    let db = Dataset::bundled().unwrap();
    let mut combo = Autocomplete::for_dataset(db);
    let mut state = AppState::new(db);

    combo.input("new y");
    assert_eq!(combo.enter(), Some("New York"));
    assert!(state.select_region(combo.text()));

    let table = state.comparison().unwrap();
    assert_eq!(table.source, "New York");
    assert_eq!(table.field, Field::Land);
    assert_eq!(table.headers[0], "Land (sq mi)");
    assert_eq!(table.rows.len(), 8);
    assert_eq!(table.rows.iter().filter(|r| r.is_source).count(), 1);
    for row in table.rows.iter().filter(|r| !r.is_source) {
        assert_eq!(row.group, RegionGroup::Foreign);
        assert!(row.land.delta.is_some());
        assert!(row.hdi.delta.is_none());
    }
}

#[test]
fn land_unit_changes_labels_not_rows() {
    let db = Dataset::bundled().unwrap();
    let mut state = AppState::new(db);
    state.select_region("Alaska");
    let imperial = state.comparison().unwrap();

    state.set_land_unit(LandUnit::Metric);
    let metric = state.comparison().unwrap();

    let names = |t: &Comparison| t.rows.iter().map(|r| r.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(&imperial), names(&metric));
    assert_eq!(metric.headers[0], "Land (sq km)");
    assert_ne!(imperial.rows[0].land.value, metric.rows[0].land.value);
    assert_eq!(state.recomputations(), 1);
}

#[test]
fn largest_region_sits_at_the_end() {
    let db = Dataset::bundled().unwrap();
    let mut state = AppState::new(db);
    state.select_region("Russia");
    let rows = state.match_results();
    assert_eq!(rows.last().unwrap().name, "Russia");
}

#[test]
fn unrated_hdi_shows_not_available() {
    let db = Dataset::bundled().unwrap();
    let mut state = AppState::new(db);
    state.select_region("Monaco");
    let table = state.comparison().unwrap();
    let monaco = table.rows.iter().find(|r| r.is_source).unwrap();
    assert_eq!(monaco.hdi.value, NOT_AVAILABLE);
}

#[test]
fn comparison_serializes_to_json() {
    let db = Dataset::bundled().unwrap();
    let mut state = AppState::new(db);
    state.select_region("Iceland");
    let json = serde_json::to_value(state.comparison().unwrap()).unwrap();
    assert_eq!(json["source"], "Iceland");
    assert_eq!(json["group"], "eu");
    assert_eq!(json["axis"], "land");
    assert!(json["rows"].as_array().unwrap().len() == 8);
}

#[test]
fn snapshot_file_round_trip() {
    let db = Dataset::bundled().unwrap();
    let path = std::env::temp_dir().join(format!("regionmatch-{}.bin.gz", std::process::id()));
    db.save_as(&path).unwrap();
    let back = Dataset::load_from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(&back, db);
}

#[test]
fn json_source_file_loads() {
    let path = std::env::temp_dir().join(format!("regionmatch-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"units":{"us":"mi2"},"us":[["A",10,100,5,0.9]],"eu":[["B",12,259,6,0.8]]}"#,
    )
    .unwrap();
    let db = Dataset::load_from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut state = AppState::new(&db);
    assert!(state.select_region("a"));
    let rows = state.match_results();
    assert_eq!(rows.len(), 2);
    assert!((rows[0].land_area - rows[1].land_area).abs() < 1e-6);
}
