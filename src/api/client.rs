//! `ApiClient`: base URL + path requests with JSON in and out.
//!
//! Header merging and body parsing are pure functions so they can be tested
//! without a server.

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use super::ApiError;

// =============================================================================
// OPTIONS
// =============================================================================

/// Per-request overrides. Headers replace defaults of the same name.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    default_headers: HeaderMap,
}

impl ApiClient {
    /// Build a client for `base_url`. A trailing `/` is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { http, base_url, default_headers })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
        cancel: &CancellationToken,
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, None, options, cancel).await
    }

    /// `POST path` with `body` encoded as JSON.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: &RequestOptions,
        cancel: &CancellationToken,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        self.request(Method::POST, path, Some(body), options, cancel).await
    }

    /// `PUT path` with `body` encoded as JSON.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: &RequestOptions,
        cancel: &CancellationToken,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_string(body).map_err(ApiError::Encode)?;
        self.request(Method::PUT, path, Some(body), options, cancel).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
        cancel: &CancellationToken,
    ) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None, options, cancel).await
    }

    /// Send one request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// - `Cancelled` if `cancel` fires first.
    /// - `Transport` if no response arrives.
    /// - `Status` for any status outside 2xx.
    /// - `Decode` if the body is not valid JSON for `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        options: &RequestOptions,
        cancel: &CancellationToken,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%method, %url, "api request");

        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => Err(ApiError::Cancelled),
            result = self.send(method.clone(), &url, body, options) => result,
        };

        if let Err(e) = &result {
            error!(%method, %url, status = ?e.status(), error = %e, "api request failed");
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let mut builder = self
            .http
            .request(method, url)
            .headers(merge_headers(&self.default_headers, &options.headers));
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status: status.as_u16(), body });
        }

        let text = response.text().await?;
        parse_body(&text)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Defaults overlaid with `overrides`; any name present in `overrides`
/// replaces every default value for that name.
fn merge_headers(defaults: &HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = defaults.clone();
    for name in overrides.keys() {
        merged.remove(name);
    }
    for (name, value) in overrides {
        merged.append(name.clone(), value.clone());
    }
    merged
}

/// Decode a response body. An empty body decodes as JSON `null`.
fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(ApiError::Decode)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
