//! Light/dark theme derived from one persisted flag.
//!
//! Reads the stored flag under `"theme"` (default `"light"`) and resolves it
//! to a static color configuration. Toggle writes the flipped flag back
//! through the store.
//!
//! TRADE-OFFS
//! ==========
//! The stored string is kept verbatim so a hand-edited or legacy value
//! survives until the next toggle. Resolution is case-insensitive and any
//! unknown value renders as light; toggling an unknown value writes `"light"`.

use crate::constants::THEME_KEY;
use crate::store::{Persisted, PersistedStore};

/// Default flag when nothing is stored.
pub const DEFAULT_THEME: &str = "light";

/// Color configuration for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

pub const LIGHT: ThemeConfig =
    ThemeConfig { primary: "#007bff", secondary: "#6c757d", background: "#ffffff", text: "#212529" };

pub const DARK: ThemeConfig =
    ThemeConfig { primary: "#0d6efd", secondary: "#6c757d", background: "#212529", text: "#ffffff" };

/// The two supported theme modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeFlag {
    #[default]
    Light,
    Dark,
}

impl ThemeFlag {
    /// Resolve a stored value by uppercased lookup; unknown values are `Light`.
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "DARK" => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn config(self) -> &'static ThemeConfig {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// Glyph for the header toggle button: the mode you would switch to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1f319}",
            Self::Dark => "\u{2600}\u{fe0f}",
        }
    }
}

/// Resolved theme as handed to the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub flag: ThemeFlag,
    pub config: &'static ThemeConfig,
}

/// Theme state backed by a persisted flag.
#[derive(Debug)]
pub struct Theme {
    flag: Persisted<String>,
}

impl Theme {
    /// Load the stored flag from `store`, defaulting to light.
    pub fn load(store: &PersistedStore) -> Self {
        Self { flag: store.entry(THEME_KEY, DEFAULT_THEME.to_owned()) }
    }

    /// The stored flag exactly as persisted.
    #[must_use]
    pub fn raw(&self) -> &str {
        self.flag.get()
    }

    #[must_use]
    pub fn flag(&self) -> ThemeFlag {
        ThemeFlag::resolve(self.raw())
    }

    #[must_use]
    pub fn config(&self) -> &'static ThemeConfig {
        self.flag().config()
    }

    #[must_use]
    pub fn get_theme(&self) -> ThemeSnapshot {
        let flag = self.flag();
        ThemeSnapshot { flag, config: flag.config() }
    }

    /// Flip light to dark and anything else to light, then persist.
    pub fn toggle(&mut self) {
        self.flag.update(|current| {
            let next = if current == "light" { "dark" } else { "light" };
            next.to_owned()
        });
    }
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
