//! Runtime configuration.
//!
//! The binary fills `AppConfig` from command-line flags, each of which falls
//! back to an environment variable:
//! - `NEXTGEN_STORAGE_PATH`: default `nextgen-storage.json`
//! - `NEXTGEN_STORAGE_QUOTA_BYTES`: default 5 MiB
//! - `NEXTGEN_API_BASE_URL`: default `https://api.example.com`
//! - `NEXTGEN_USER_DIRECTORY_URL`: default `https://jsonplaceholder.typicode.com`

use std::path::PathBuf;

use crate::storage::DEFAULT_QUOTA_BYTES;

pub const DEFAULT_STORAGE_PATH: &str = "nextgen-storage.json";
pub const DEFAULT_API_BASE_URL: &str = "https://api.example.com";
pub const DEFAULT_USER_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON document backing the persisted store.
    pub storage_path: PathBuf,
    /// Quota enforced on the persisted store, in bytes.
    pub storage_quota_bytes: usize,
    /// Origin for generic API requests.
    pub api_base_url: String,
    /// Origin serving the `/users` listing.
    pub user_directory_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            storage_quota_bytes: DEFAULT_QUOTA_BYTES,
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            user_directory_url: DEFAULT_USER_DIRECTORY_URL.to_owned(),
        }
    }
}

/// Validate an http(s) origin and drop any trailing `/`.
///
/// # Errors
///
/// Returns an error if `raw` does not parse or is not http(s).
pub fn normalize_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidUrl { value: raw.to_owned(), reason };
    let url = reqwest::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_owned()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
