#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! HTTP client for the incident reporting service.
//!
//! Thin wrapper over the service's REST endpoints with optional bearer-token
//! auth. Every incident payload is pushed through the normalizer before it
//! is returned, so callers only ever see [`NormalizedIncident`] -- the
//! service's habit of emitting stringified locations and missing fields
//! stays behind this boundary.
//!
//! Network and auth failures are the caller's problem to surface;
//! per-record garbage is absorbed by normalization and never turns into an
//! error here.

use incident_watch_incident_models::{Comment, NormalizedIncident};
use incident_watch_normalize::normalize_payload;
use serde_json::Value;

/// Errors that can occur talking to the incident service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (connectivity, TLS, non-2xx status).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client for one incident service deployment.
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for the service at `base_url`, optionally attaching
    /// `Authorization: Bearer <token>` to every request.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the recent-incidents feed (bare JSON array).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response decoding fails.
    pub async fn latest_incidents(&self) -> Result<Vec<NormalizedIncident>, ApiError> {
        self.fetch_incidents("/api/latest-incidents/").await
    }

    /// Fetches the map feed (`{"incidents": [...]}` envelope).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response decoding fails.
    pub async fn all_user_incidents(&self) -> Result<Vec<NormalizedIncident>, ApiError> {
        self.fetch_incidents("/api/all_user_incidents/").await
    }

    /// Fetches the station-wide feed used by the admin dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response decoding fails.
    pub async fn all_station_incidents(&self) -> Result<Vec<NormalizedIncident>, ApiError> {
        self.fetch_incidents("/api/all_station_incidents/").await
    }

    /// Fetches the comments on one incident, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response decoding fails.
    pub async fn comments(&self, incident_id: &str) -> Result<Vec<Comment>, ApiError> {
        let url = format!("{}/api/incidents/{incident_id}/comments/", self.base_url);
        let response = self.authorized(self.client.get(&url)).send().await?;
        let comments: Vec<Comment> = response.error_for_status()?.json().await?;

        log::info!(
            "Fetched {} comments for incident {incident_id}",
            comments.len()
        );
        Ok(comments)
    }

    /// Posts a new comment on an incident and returns the stored comment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or response decoding fails.
    pub async fn add_comment(&self, incident_id: &str, comment: &str) -> Result<Comment, ApiError> {
        let url = format!("{}/api/incidents/{incident_id}/comments/", self.base_url);
        let body = serde_json::json!({ "comment": comment });

        let response = self
            .authorized(self.client.post(&url))
            .json(&body)
            .send()
            .await?;

        Ok(response.error_for_status()?.json().await?)
    }

    async fn fetch_incidents(&self, path: &str) -> Result<Vec<NormalizedIncident>, ApiError> {
        let url = format!("{}{path}", self.base_url);

        log::info!("Fetching incidents from {url}");
        let response = self.authorized(self.client.get(&url)).send().await?;
        let payload: Value = response.error_for_status()?.json().await?;

        Ok(normalize_payload(&payload))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8000/", None);
        assert_eq!(client.base_url, "http://localhost:8000");

        let client = ApiClient::new("http://localhost:8000", None);
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
