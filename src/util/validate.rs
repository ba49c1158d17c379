//! Input validation.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Loose shape check: something, `@`, something, `.`, something, no spaces.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(email))
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
