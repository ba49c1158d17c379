use super::*;

#[test]
fn get_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item("nope").unwrap(), None);
}

#[test]
fn set_then_get_returns_value() {
    let storage = MemoryStorage::new();
    storage.set_item("theme", "\"dark\"").unwrap();
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("\"dark\""));
}

#[test]
fn remove_deletes_and_tolerates_missing() {
    let storage = MemoryStorage::new();
    storage.set_item("a", "1").unwrap();
    storage.remove_item("a").unwrap();
    storage.remove_item("a").unwrap();
    assert_eq!(storage.get_item("a").unwrap(), None);
}

#[test]
fn keys_are_sorted() {
    let storage = MemoryStorage::new();
    storage.set_item("todos", "[]").unwrap();
    storage.set_item("theme", "\"light\"").unwrap();
    assert_eq!(storage.keys().unwrap(), vec!["theme".to_owned(), "todos".to_owned()]);
}

#[test]
fn quota_rejects_oversized_write_and_keeps_previous_value() {
    let storage = MemoryStorage::with_quota(16);
    storage.set_item("k", "small").unwrap();
    let err = storage.set_item("k", &"x".repeat(32)).unwrap_err();
    assert!(matches!(err, StorageError::QuotaExceeded { .. }));
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("small"));
}

#[test]
fn seed_bypasses_quota() {
    let storage = MemoryStorage::with_quota(1);
    storage.seed("todos", "{not json");
    assert_eq!(storage.get_item("todos").unwrap().as_deref(), Some("{not json"));
}
