//! Persisted todo list with filtering.
//!
//! DESIGN
//! ======
//! The list lives in one store entry under `"todos"`. Every mutation goes
//! through `Persisted::update`, so the mirror and the medium move together.
//! Ids are creation times in milliseconds, bumped past the current maximum
//! when two items land in the same millisecond. If the maximum is already
//! `u64::MAX` the lowest unused id is taken instead.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::warn;

use crate::constants::TODOS_KEY;
use crate::store::{Persisted, PersistedStore};

/// One todo item as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    /// RFC 3339 creation time. Older entries may lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

// =============================================================================
// FILTER
// =============================================================================

/// Which items a view shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    #[must_use]
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown filter '{0}' (expected 'all', 'active' or 'completed')")]
pub struct ParseFilterError(String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(ParseFilterError(other.to_owned())),
        }
    }
}

/// Item counts shown on the filter buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

// =============================================================================
// LIST
// =============================================================================

#[derive(Debug)]
pub struct TodoList {
    todos: Persisted<Vec<Todo>>,
}

impl TodoList {
    /// Load the stored list, starting empty if absent or unreadable.
    pub fn load(store: &PersistedStore) -> Self {
        Self { todos: store.entry(TODOS_KEY, Vec::new()) }
    }

    #[must_use]
    pub fn items(&self) -> &[Todo] {
        self.todos.get()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Append a new active item stamped with the current time.
    ///
    /// Returns the new id, or `None` if `text` is blank.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        self.add_at(text, OffsetDateTime::now_utc())
    }

    /// Append a new active item created at `now`.
    pub fn add_at(&mut self, text: &str, now: OffsetDateTime) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let millis = u64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(0);
        let id = self.next_id(millis);
        let todo = Todo {
            id,
            text: text.to_owned(),
            completed: false,
            created_at: now.format(&Rfc3339).ok(),
        };
        self.todos.update(|todos| {
            let mut next = todos.clone();
            next.push(todo);
            next
        });
        Some(id)
    }

    /// Flip `completed` on the item with `id`. Returns `false` if absent.
    pub fn toggle(&mut self, id: u64) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.todos.update(|todos| {
            todos
                .iter()
                .map(|t| if t.id == id { Todo { completed: !t.completed, ..t.clone() } } else { t.clone() })
                .collect()
        });
        true
    }

    /// Remove the item with `id`. Returns `false` if absent.
    pub fn delete(&mut self, id: u64) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.todos.update(|todos| todos.iter().filter(|t| t.id != id).cloned().collect());
        true
    }

    /// Remove every completed item. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.counts().completed;
        if removed > 0 {
            self.todos.update(|todos| todos.iter().filter(|t| !t.completed).cloned().collect());
        }
        removed
    }

    /// Items passing `filter`, in insertion order.
    #[must_use]
    pub fn visible(&self, filter: Filter) -> Vec<&Todo> {
        self.items().iter().filter(|t| filter.matches(t)).collect()
    }

    #[must_use]
    pub fn counts(&self) -> FilterCounts {
        let all = self.items().len();
        let completed = self.items().iter().filter(|t| t.completed).count();
        FilterCounts { all, active: all - completed, completed }
    }

    /// Placeholder text when `filter` shows nothing, `None` otherwise.
    #[must_use]
    pub fn empty_message(&self, filter: Filter) -> Option<&'static str> {
        if self.is_empty() {
            Some("No tasks yet. Add one above!")
        } else if self.visible(filter).is_empty() {
            Some("No tasks match your filter.")
        } else {
            None
        }
    }

    fn contains(&self, id: u64) -> bool {
        self.items().iter().any(|t| t.id == id)
    }

    fn next_id(&self, millis: u64) -> u64 {
        match self.items().iter().map(|t| t.id).max() {
            Some(max) if max >= millis => max.checked_add(1).unwrap_or_else(|| {
                warn!(max, "todo id space exhausted above maximum; using lowest free id");
                self.lowest_free_id()
            }),
            _ => millis,
        }
    }

    fn lowest_free_id(&self) -> u64 {
        let taken: BTreeSet<u64> = self.items().iter().map(|t| t.id).collect();
        (0..).find(|id| !taken.contains(id)).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "todos_test.rs"]
mod tests;
