use reqwest::{Method, Url};
use serde_json::Value;
use tracing::debug;

use crate::{ApiRequest, ClientConfig, ClientError};

/// Generic async JSON REST client.
///
/// This client owns the single request primitive every endpoint goes
/// through. For typed per-endpoint methods, use [`crate::RadiantClient`].
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for `base_url` with the default timeout and no extra headers.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_config(&ClientConfig::new(base_url))
    }

    /// Creates a client from a full configuration.
    pub fn with_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
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
    pub async fn send(&self, request: ApiRequest) -> Result<Value, ClientError> {
        let (method, path, query, body) = request.into_parts();
        self.request(method, &path, &query, body).await
    }

    /// Sends one request and decodes the JSON response.
    ///
    /// `path` is appended verbatim to the base URL, so any user-supplied
    /// segments must already be percent-encoded. Non-success statuses become
    /// [`ClientError::Api`]; a success body that is not JSON becomes
    /// [`ClientError::Json`].
    pub async fn request<K, V>(
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

        let response = request.send().await?;
        let status = response.status();
        let payload = response.bytes().await?;

        decode_response(status, &payload)
    }
}

/// Joins a normalized base URL and an endpoint path.
pub(crate) fn build_url(base_url: &str, path: &str) -> Result<Url, ClientError> {
    let separator = if path.starts_with('/') { "" } else { "/" };
    Url::parse(&format!("{base_url}{separator}{path}"))
        .map_err(|_| ClientError::InvalidPath(path.to_owned()))
}

/// Maps a raw response to the decoded body or an error.
///
/// Success bodies must be valid UTF-8 JSON. Error bodies are read lossily into
/// the detail text.
pub(crate) fn decode_response(
    status: reqwest::StatusCode,
    payload: &[u8],
) -> Result<Value, ClientError> {
    if !status.is_success() {
        debug!(%status, "Radiant API returned an error status");
        let text = String::from_utf8_lossy(payload).into_owned();
        return Err(ClientError::from_response(status, text));
    }

    Ok(serde_json::from_slice(payload)?)
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;

    use super::{ApiClient, build_url, decode_response};
    use crate::ClientError;

    #[test]
    fn joins_paths_from_base_with_nested_prefix() {
        let client = ApiClient::new("https://example.com/api/v1").expect("valid url");
        let resolved = build_url(client.base_url(), "/chain").expect("valid path");
        assert_eq!(resolved.as_str(), "https://example.com/api/v1/chain");
    }

    #[test]
    fn trailing_slash_does_not_change_request_url() {
        let with_slash = ApiClient::new("http://host/api/").expect("valid url");
        let without = ApiClient::new("http://host/api").expect("valid url");
        assert_eq!(
            build_url(with_slash.base_url(), "/wave/stats").expect("valid path"),
            build_url(without.base_url(), "/wave/stats").expect("valid path"),
        );
    }

    #[test]
    fn encoded_segments_survive_url_parsing() {
        let resolved = build_url("http://host/api", "/token/abc%2F0").expect("valid path");
        assert_eq!(resolved.path(), "/api/token/abc%2F0");
    }

    #[test]
    fn success_body_is_returned_unchanged() {
        let value = decode_response(StatusCode::OK, br#"{"height": 123, "network": "mainnet"}"#)
            .expect("decodes");
        assert_eq!(value, json!({ "height": 123, "network": "mainnet" }));
    }

    #[test]
    fn empty_success_body_is_a_decode_error() {
        let error = decode_response(StatusCode::OK, b"").expect_err("not JSON");
        assert!(matches!(error, ClientError::Json(_)));
    }

    #[test]
    fn error_status_wins_over_json_body() {
        let error = decode_response(StatusCode::NOT_FOUND, br#"{"detail": "nope"}"#)
            .expect_err("404 is an error");
        assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(error.detail(), Some("nope"));
    }

    #[test]
    fn invalid_utf8_success_body_is_a_decode_error() {
        let error = decode_response(StatusCode::OK, b"{\"network\": \"main\xffnet\"}")
            .expect_err("not UTF-8");
        assert!(matches!(error, ClientError::Json(_)));
    }

    #[test]
    fn invalid_utf8_error_body_still_yields_detail() {
        let error = decode_response(StatusCode::BAD_GATEWAY, b"upstream \xff down")
            .expect_err("502 is an error");
        assert_eq!(error.status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(error.detail(), Some("upstream \u{fffd} down"));
    }
}
