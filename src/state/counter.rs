//! Local counter for the home page card.

use crate::util::format::format_number;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Card caption, e.g. `Compteur: 1 234`.
    #[must_use]
    pub fn label(self) -> String {
        format!("Compteur: {}", format_number(self.value))
    }
}

#[cfg(test)]
#[path = "counter_test.rs"]
mod tests;
