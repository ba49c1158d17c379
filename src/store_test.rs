use std::collections::BTreeMap;

use serde_json::json;

use super::*;

fn seeded(pairs: &[(&str, &str)]) -> (Arc<MemoryStorage>, PersistedStore) {
    let medium = Arc::new(MemoryStorage::new());
    for (k, v) in pairs {
        medium.seed(k, v);
    }
    let store = PersistedStore::new(medium.clone());
    (medium, store)
}

// =============================================================
// read / write
// =============================================================

#[test]
fn write_then_read_round_trips_json_values() {
    let store = PersistedStore::in_memory();
    let values = [
        json!(null),
        json!(true),
        json!(-12.5),
        json!("light"),
        json!([1, "two", { "three": 3 }]),
        json!({ "nested": { "list": [], "empty": {} } }),
    ];
    for (i, value) in values.iter().enumerate() {
        let key = format!("k{i}");
        store.write(&key, value);
        assert_eq!(&store.read(&key, json!("default")), value);
    }
}

#[test]
fn read_missing_key_returns_default() {
    let store = PersistedStore::in_memory();
    assert_eq!(store.read("theme", "light".to_owned()), "light");
}

#[test]
fn read_corrupt_value_returns_default_and_leaves_medium_untouched() {
    let (medium, store) = seeded(&[("todos", "{not json")]);
    let todos: Vec<u32> = store.read("todos", vec![7]);
    assert_eq!(todos, vec![7]);
    assert_eq!(medium.get_item("todos").unwrap().as_deref(), Some("{not json"));
}

#[test]
fn read_wrong_shape_returns_default() {
    let (_, store) = seeded(&[("count", "\"not a number\"")]);
    assert_eq!(store.read("count", 3_i64), 3);
}

#[test]
fn read_empty_string_returns_default() {
    let (_, store) = seeded(&[("theme", "")]);
    assert_eq!(store.read("theme", "light".to_owned()), "light");
}

#[test]
fn try_write_reports_quota_failure() {
    let store = PersistedStore::new(Arc::new(MemoryStorage::with_quota(8)));
    let err = store.try_write("todos", &vec!["a".repeat(32)]).unwrap_err();
    assert!(matches!(err, StoreError::Storage(StorageError::QuotaExceeded { .. })));
}

#[test]
fn try_write_reports_serialize_failure() {
    let store = PersistedStore::in_memory();
    let mut bad = BTreeMap::new();
    bad.insert((1, 2), "tuple keys are not JSON object keys");
    let err = store.try_write("bad", &bad).unwrap_err();
    assert!(matches!(err, StoreError::Serialize(_)));
}

#[test]
fn remove_makes_read_fall_back() {
    let store = PersistedStore::in_memory();
    store.write("theme", "dark");
    store.remove("theme");
    assert_eq!(store.read("theme", "light".to_owned()), "light");
}

// =============================================================
// Persisted entries
// =============================================================

#[test]
fn entry_starts_from_stored_value() {
    let (_, store) = seeded(&[("theme", "\"dark\"")]);
    let entry = store.entry("theme", "light".to_owned());
    assert_eq!(entry.key(), "theme");
    assert_eq!(entry.get(), "dark");
}

#[test]
fn set_updates_mirror_and_medium() {
    let (medium, store) = seeded(&[]);
    let mut entry = store.entry("count", 0_i64);
    entry.set(5);
    assert_eq!(*entry.get(), 5);
    assert_eq!(medium.get_item("count").unwrap().as_deref(), Some("5"));
}

#[test]
fn update_applies_function_to_latest_value() {
    let store = PersistedStore::in_memory();
    let mut entry = store.entry("count", 1_i64);
    entry.update(|n| n + 1);
    entry.update(|n| n * 10);
    assert_eq!(*entry.get(), 20);
    assert_eq!(store.read("count", 0_i64), 20);
}

#[test]
fn failed_persist_still_updates_mirror() {
    let medium = Arc::new(MemoryStorage::with_quota(16));
    let store = PersistedStore::new(medium.clone());
    let mut entry = store.entry("note", String::new());
    entry.set("short".to_owned());
    entry.set("x".repeat(64));

    assert_eq!(entry.get().len(), 64);
    assert_eq!(store.read("note", String::new()), "short");
}

#[test]
fn two_entries_on_one_store_share_the_medium() {
    let store = PersistedStore::in_memory();
    let mut writer = store.entry("theme", "light".to_owned());
    writer.set("dark".to_owned());
    let reader = store.entry("theme", "light".to_owned());
    assert_eq!(reader.get(), "dark");
}
