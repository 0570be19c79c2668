//! Live departure board HTTP client.
//!
//! Issues a single `GetDepartureBoard` request per call. The raw JSON is
//! handed back untouched; shape checking happens in the normalizer.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::board::BoardSource;
use crate::domain::BoardQuery;

use super::error::LdbError;

/// Default base URL for the departure board API.
const DEFAULT_BASE_URL: &str = "https://api.departureboard.io/v2.0";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the departure board client.
#[derive(Debug, Clone)]
pub struct LdbConfig {
    /// Base URL for the API (defaults to departureboard.io)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for LdbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl LdbConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Departure board API client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct LdbClient {
    http: reqwest::Client,
    base_url: String,
}

impl LdbClient {
    /// Create a new client with the given configuration.
    pub fn new(config: LdbConfig) -> Result<Self, LdbError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the raw departure board for a station.
    ///
    /// A blank `api_key` fails with `NoCredentials` before anything is sent.
    /// There are no retries: one failed attempt is reported as-is.
    pub async fn get_departure_board(
        &self,
        api_key: &str,
        query: &BoardQuery,
    ) -> Result<Value, LdbError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(LdbError::NoCredentials);
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| LdbError::InvalidApiKey)?;
        authorization.set_sensitive(true);

        let url = format!("{}/GetDepartureBoard/{}", self.base_url, query.station);

        let mut params = vec![
            ("numRows", query.max_rows.to_string()),
            ("timeWindow", query.time_window.to_string()),
        ];
        if let Some(destination) = query.destination {
            params.push(("filterCrs", destination.to_string()));
            params.push(("filterType", "to".to_string()));
        }

        debug!(%url, ?params, "requesting departure board");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, authorization)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LdbError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

impl BoardSource for LdbClient {
    async fn fetch_board(&self, api_key: &str, query: &BoardQuery) -> Result<Value, LdbError> {
        self.get_departure_board(api_key, query).await
    }
}
