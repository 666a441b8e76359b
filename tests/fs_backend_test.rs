use pantry::error::PantryError;
use pantry::inventory::Inventory;
use pantry::model::{Category, Record};
use pantry::store::backend::StorageBackend;
use pantry::store::fs_backend::FsBackend;
use pantry::store::{LoadStatus, PantryStore};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup() -> (TempDir, PantryStore<FsBackend>) {
    let dir = TempDir::new().unwrap();
    let store = PantryStore::new(FsBackend::new(dir.path().join("pantry_inventory.json")));
    (dir, store)
}

fn stocked() -> Inventory {
    let mut inv = Inventory::new();
    inv.add("apples", 10, Category::Fresh).unwrap();
    inv.add("tomato soup", 6, Category::Canned).unwrap();
    inv.add("rice", 25, Category::DryGoods).unwrap();
    inv
}

fn assert_no_tmp_files(dir: &Path) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_missing_file_is_fresh() {
    let (_dir, store) = setup();
    let loaded = store.load();
    assert_eq!(loaded.status, LoadStatus::Fresh);
    assert!(loaded.inventory.is_empty());
}

#[test]
fn test_save_and_load_roundtrip() {
    let (dir, store) = setup();
    let inv = stocked();
    store.save(&inv).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.status, LoadStatus::Restored);
    assert_eq!(loaded.inventory, inv);
    assert_eq!(
        loaded.inventory.get("Tomato Soup"),
        Some(Record::new(6, Category::Canned))
    );
    assert_no_tmp_files(dir.path());
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("nested/deeper/state.json");
    let store = PantryStore::new(FsBackend::new(state.clone()));

    store.save(&stocked()).unwrap();
    assert!(state.exists());
}

#[test]
fn test_save_overwrites_previous_state() {
    let (_dir, store) = setup();
    store.save(&stocked()).unwrap();

    let mut smaller = Inventory::new();
    smaller.add("Beans", 1, Category::Canned).unwrap();
    store.save(&smaller).unwrap();

    assert_eq!(store.load().inventory, smaller);
}

#[test]
fn test_corrupt_file_recovers_empty() {
    let (dir, store) = setup();
    let state = dir.path().join("pantry_inventory.json");
    fs::write(&state, "{\"Apples\": {\"quantity\": 3, \"categ").unwrap();

    let loaded = store.load();
    assert!(loaded.inventory.is_empty());
    match loaded.status {
        LoadStatus::Recovered(corrupt) => assert_eq!(corrupt.path, state),
        other => panic!("expected recovery, got {:?}", other),
    }

    // The bad file is left alone until the next save replaces it.
    assert!(state.exists());
    store.save(&stocked()).unwrap();
    assert_eq!(store.load().status, LoadStatus::Restored);
}

#[test]
fn test_legacy_state_file_loads() {
    let (dir, store) = setup();
    fs::write(
        dir.path().join("pantry_inventory.json"),
        r#"{
    "Apples": {
        "qty": 10,
        "category": "Fresh"
    },
    "Rice": {
        "qty": 4,
        "category": "Dry Goods"
    }
}"#,
    )
    .unwrap();

    let loaded = store.load();
    assert_eq!(loaded.status, LoadStatus::Restored);
    assert_eq!(loaded.inventory.len(), 2);
    assert_eq!(loaded.inventory.get("rice").unwrap().quantity, 4);
}

#[test]
fn test_failed_save_keeps_previous_state() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");
    let store = PantryStore::new(FsBackend::new(state.clone()));
    store.save(&stocked()).unwrap();
    let before = fs::read_to_string(&state).unwrap();

    // A directory squatting on the target makes the rename fail.
    let blocked = PantryStore::new(FsBackend::new(dir.path().to_path_buf()));
    assert!(blocked.save(&stocked()).is_err());

    assert_eq!(fs::read_to_string(&state).unwrap(), before);
    assert_no_tmp_files(dir.path());
}

#[test]
fn test_export_report_is_separate_from_state() {
    let (dir, store) = setup();
    let report = dir.path().join("reports/pantry_report.txt");
    store.export_report(&stocked(), &report).unwrap();

    let text = fs::read_to_string(&report).unwrap();
    assert!(text.starts_with("Community Pantry Inventory Report\n"));
    assert!(text.contains("Apples: 10 units (Category: Fresh)\n"));
    assert!(text.contains("Rice: 25 units (Category: Dry Goods)\n"));
    assert!(!dir.path().join("pantry_inventory.json").exists());
}

#[test]
fn test_failed_export_leaves_state_untouched() {
    let (dir, store) = setup();
    store.save(&stocked()).unwrap();
    let state = dir.path().join("pantry_inventory.json");
    let before = fs::read_to_string(&state).unwrap();

    let result = store.export_report(&stocked(), dir.path());
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&state).unwrap(), before);
}

#[test]
fn test_export_onto_state_file_is_refused() {
    let (dir, store) = setup();
    store.save(&stocked()).unwrap();
    let state = dir.path().join("pantry_inventory.json");
    let before = fs::read_to_string(&state).unwrap();

    for destination in [state.clone(), dir.path().join(".").join("pantry_inventory.json")] {
        assert!(matches!(
            store.export_report(&stocked(), &destination),
            Err(PantryError::Validation(_))
        ));
    }

    assert_eq!(fs::read_to_string(&state).unwrap(), before);
    let loaded = store.load();
    assert_eq!(loaded.status, LoadStatus::Restored);
    assert_eq!(loaded.inventory, stocked());
}

#[test]
fn test_export_onto_unsaved_state_path_is_refused() {
    let (dir, store) = setup();
    let state = dir.path().join("pantry_inventory.json");

    assert!(store.export_report(&stocked(), &state).is_err());
    assert!(!state.exists());
    assert_eq!(store.load().status, LoadStatus::Fresh);
}

#[test]
fn test_backend_reports_state_location() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("x.json");
    let backend = FsBackend::new(path.clone());
    assert_eq!(backend.state_location(), path);
    assert_eq!(backend.read_state().unwrap(), None);
}
