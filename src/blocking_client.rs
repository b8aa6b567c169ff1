use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::client::{build_url, decode_response};
use crate::{ApiRequest, ClientConfig, ClientError};

/// Generic blocking JSON REST client.
///
/// This is the synchronous counterpart of [`crate::ApiClient`]. It must not
/// be used from inside an async runtime.
#[derive(Clone, Debug)]
pub struct BlockingApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl BlockingApiClient {
    /// Creates a client for `base_url` with the default timeout and no extra headers.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_config(&ClientConfig::new(base_url))
    }

    /// Creates a client from a full configuration.
    pub fn with_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .default_headers(config.header_map()?)
            .build()?;

        Ok(Self {
            base_url: config.normalized_base_url()?,
            http,
        })
    }

    /// Base URL with trailing slashes removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a prepared endpoint request.
    pub fn send(&self, request: ApiRequest) -> Result<Value, ClientError> {
        let (method, path, query, body) = request.into_parts();
        self.request(method, &path, &query, body)
    }

    /// Sends one request and decodes the JSON response.
    ///
    /// See [`crate::ApiClient::request`] for the path and error contract.
    pub fn request<K, V>(
        &self,
        method: Method,
        path: &str,
        query: &[(K, V)],
        body: Option<Value>,
    ) -> Result<Value, ClientError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = build_url(&self.base_url, path)?;
        debug!(%method, %url, "sending Radiant API request");

        let mut request = self.http.request(method, url);

        if !query.is_empty() {
            let pairs: Vec<(&str, &str)> = query
                .iter()
                .map(|(key, value)| (key.as_ref(), value.as_ref()))
                .collect();
            request = request.query(&pairs);
        }

        if let Some(json_body) = body {
            request = request.json(&json_body);
        }

        let response = request.send()?;
        let status = response.status();
        let payload = response.bytes()?;

        decode_response(status, &payload)
    }
}
