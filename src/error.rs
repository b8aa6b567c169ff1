use serde_json::Value;
use thiserror::Error;

/// Errors returned by Radiant client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// A configured default header has an invalid name or value.
    #[error("invalid header '{0}'")]
    InvalidHeader(String),

    /// Endpoint path could not be joined to the base URL.
    #[error("invalid endpoint path '{0}'")]
    InvalidPath(String),

    /// The requested operation id is not present in the endpoint catalog.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// A required path template parameter was not provided.
    #[error("missing required path parameter '{parameter}' for operation '{operation_id}'")]
    MissingPathParameter {
        operation_id: String,
        parameter: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// HTTP transport-layer request failure.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Response body could not be parsed as JSON, or a request body could not be encoded.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success HTTP status returned by the API.
    #[error("HTTP {status}: {detail}")]
    Api {
        status: reqwest::StatusCode,
        detail: String,
    },
}

impl ClientError {
    /// Builds an [`ClientError::Api`] from a non-success response payload.
    ///
    /// The detail is the body's `detail` field when the body is a JSON object
    /// carrying one, otherwise the raw body text.
    pub(crate) fn from_response(status: reqwest::StatusCode, payload: String) -> Self {
        let detail = match serde_json::from_str::<Value>(&payload) {
            Ok(Value::Object(mut object)) => match object.remove("detail") {
                Some(Value::String(detail)) => detail,
                Some(other) => other.to_string(),
                None => payload,
            },
            _ => payload,
        };
        Self::Api { status, detail }
    }

    /// HTTP status code for [`ClientError::Api`] errors.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided detail for [`ClientError::Api`] errors.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Returns `true` when the request was aborted by the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else {
            Self::Request(error)
        }
    }
}
