//! Theme and todo state surviving a restart on file-backed storage.

use std::sync::Arc;

use nextgen::state::todos::{Filter, TodoList};
use nextgen::storage::{FileStorage, Storage};
use nextgen::store::PersistedStore;
use nextgen::theme::{DARK, LIGHT, Theme, ThemeFlag};

fn open(path: &std::path::Path) -> PersistedStore {
    PersistedStore::new(Arc::new(FileStorage::open(path).unwrap()))
}

#[test]
fn theme_and_todos_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let store = open(&path);
        let mut theme = Theme::load(&store);
        assert_eq!(*theme.config(), LIGHT);
        theme.toggle();

        let mut todos = TodoList::load(&store);
        let first = todos.add("write docs").unwrap();
        todos.add("ship it").unwrap();
        todos.toggle(first);
    }

    let store = open(&path);
    let theme = Theme::load(&store);
    assert_eq!(theme.flag(), ThemeFlag::Dark);
    assert_eq!(*theme.config(), DARK);

    let todos = TodoList::load(&store);
    let active: Vec<&str> = todos.visible(Filter::Active).iter().map(|t| t.text.as_str()).collect();
    assert_eq!(active, vec!["ship it"]);
    assert_eq!(todos.counts().completed, 1);

    assert_eq!(store.medium().keys().unwrap(), vec!["theme".to_owned(), "todos".to_owned()]);
}

#[test]
fn corrupt_entry_on_disk_falls_back_without_touching_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, r#"{"theme": "\"dark\"", "todos": "[oops"}"#).unwrap();

    let store = open(&path);
    assert_eq!(Theme::load(&store).flag(), ThemeFlag::Dark);
    assert!(TodoList::load(&store).is_empty());

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert!(on_disk.contains("[oops"));
}
