//! Dashboard HTTP client for API interactions

use std::sync::Mutex;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::api;
use crate::error::{MerakiError, Result};

/// Outcome of one POST against the dashboard.
///
/// The status code and body are kept verbatim; classification into
/// success/failure is the caller's job (the dashboard reports validation
/// errors inside a well-formed JSON body).
#[derive(Debug, Clone)]
pub struct PostOutcome {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Meraki dashboard API client
pub struct MerakiClient {
    client: Client,
    api_key: String,
    dashboard: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
    /// Ordered history of response status codes, most recent last
    status_codes: Mutex<Vec<u16>>,
}

impl MerakiClient {
    /// Create a new dashboard client.
    ///
    /// Certificate verification is disabled: dashboards are routinely
    /// deployed behind self-signed certificates and the original tooling
    /// trusts them, so this is a deliberate policy rather than an oversight.
    pub fn new(api_key: String, dashboard: String) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            // Self-signed dashboard deployments; trust-all on purpose
            .danger_accept_invalid_certs(true)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            dashboard,
            base_url_override: None,
            status_codes: Mutex::new(Vec::new()),
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(api_key: String, dashboard: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            dashboard,
            base_url_override: Some(base_url),
            status_codes: Mutex::new(Vec::new()),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!("https://{}{}", self.dashboard, api::BASE_PATH)
    }

    /// Get the dashboard host
    pub fn dashboard(&self) -> &str {
        &self.dashboard
    }

    /// Return the most recent response status code, if any call completed
    pub fn last_status_code(&self) -> Option<u16> {
        self.status_codes
            .lock()
            .ok()
            .and_then(|codes| codes.last().copied())
    }

    /// Snapshot of the full status-code history, in call order
    pub fn status_codes(&self) -> Vec<u16> {
        self.status_codes
            .lock()
            .map(|codes| codes.clone())
            .unwrap_or_default()
    }

    fn record_status(&self, status: u16) {
        if let Ok(mut codes) = self.status_codes.lock() {
            codes.push(status);
        }
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(api::API_KEY_HEADER, &self.api_key)
            .header("Content-Type", "application/json")
    }

    /// Fetch a path and parse the body as JSON.
    ///
    /// Every completed call appends its status code to the history. A
    /// connection-level failure is `Http`, a non-success status is `Api`
    /// (body carried verbatim), and an unparseable body is `Parse`. Readers
    /// that want the original "degrade to empty" behavior handle those
    /// variants at the traversal layer; nothing is swallowed here.
    pub(crate) async fn get_value(&self, path: &str) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url(), path);
        debug!("GET {}", url);

        let response = self.with_headers(self.client.get(&url)).send().await?;

        let status = response.status().as_u16();
        self.record_status(status);

        let body: serde_json::Value = match response.json().await {
            Ok(value) => value,
            // Empty 404 bodies and friends
            Err(e) => {
                return Err(MerakiError::Parse(format!(
                    "response from {} is not JSON: {}",
                    path, e
                )))
            }
        };

        if !(200..300).contains(&status) {
            return Err(MerakiError::Api { status, body });
        }

        Ok(body)
    }

    /// Fetch a path and deserialize the body into a typed list.
    ///
    /// A body missing an expected field is a parse failure, not a panic.
    pub(crate) async fn get_list<T>(&self, path: &str, context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let value = self.get_value(path).await?;
        serde_json::from_value(value)
            .map_err(|e| MerakiError::Parse(format!("Failed to parse {}: {}", context, e)))
    }

    /// POST a JSON body and return the raw outcome.
    ///
    /// Mirrors the read path for status recording. An unparseable response
    /// body degrades to an empty mapping so the caller can still classify
    /// by status code.
    pub(crate) async fn post_json<B>(&self, path: &str, body: &B) -> Result<PostOutcome>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("POST {}", url);

        let response = self
            .with_headers(self.client.post(&url))
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        self.record_status(status);

        let body = response
            .json()
            .await
            .unwrap_or_else(|_| serde_json::json!({}));

        Ok(PostOutcome { status, body })
    }
}

#[cfg(test)]
impl MerakiClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-api-key".to_string(),
            "mock.meraki.com".to_string(),
            base_url.to_string(),
        )
    }
}
