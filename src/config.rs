use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::ClientError;

/// Base URL of a locally running Radiant API server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3080/api";

/// Upper bound on the total round trip of a single call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings shared by every call a client makes.
///
/// Headers are sent unmodified with every request; this is the only
/// authentication mechanism the API supports.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Creates a configuration for the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            headers: Vec::new(),
        }
    }

    /// Sets the per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request.
    ///
    /// A later header with the same name replaces the earlier one.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds `Authorization: Bearer <token>` to every request.
    #[must_use]
    pub fn with_bearer_token(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.with_header(header::AUTHORIZATION.as_str(), value)
    }

    /// Overrides the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        self.with_header(header::USER_AGENT.as_str(), user_agent)
    }

    /// Base URL as configured, before normalization.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validates the base URL and strips trailing slashes.
    pub(crate) fn normalized_base_url(&self) -> Result<String, ClientError> {
        let trimmed = self.base_url.trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.clone()))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(trimmed.to_owned())
    }

    /// Converts the configured headers into a [`HeaderMap`].
    pub(crate) fn header_map(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ClientError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| ClientError::InvalidHeader(name.to_string()))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}
