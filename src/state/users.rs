//! User directory fetched from a remote listing.
//!
//! ERROR HANDLING
//! ==============
//! Failures become a display string on the directory instead of a `Result`,
//! and the previously loaded users stay in place. Retrying is another call to
//! `load`; nothing retries automatically. A cancelled load leaves the
//! directory exactly as it was apart from the loading flag.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::api::{ApiClient, ApiError, RequestOptions};

/// Path of the listing relative to the directory origin.
pub const USERS_PATH: &str = "/users";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub address: Address,
    pub company: Company,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

/// Loaded users plus the pending and error flags a view renders from.
#[derive(Debug)]
pub struct UserDirectory {
    users: Vec<User>,
    loading: bool,
    error: Option<String>,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self { users: Vec::new(), loading: true, error: None }
    }
}

impl UserDirectory {
    /// A directory that has not loaded yet (pending).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the listing from `client` and record the outcome.
    pub async fn load(&mut self, client: &ApiClient, cancel: &CancellationToken) {
        self.loading = true;

        let result = client
            .get::<Vec<User>>(USERS_PATH, &RequestOptions::new(), cancel)
            .await;
        self.apply(result);
    }

    fn apply(&mut self, result: Result<Vec<User>, ApiError>) {
        self.loading = false;
        match result {
            Ok(users) => {
                info!(count = users.len(), "user directory loaded");
                self.users = users;
                self.error = None;
            }
            Err(ApiError::Cancelled) => {}
            Err(e) => {
                warn!(error = %e, "user directory load failed");
                self.error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
