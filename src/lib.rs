//! Rust client library for the Radiant blockchain REST API.
//!
//! Public API layers:
//! - [`ApiClient`]/[`BlockingApiClient`]: generic JSON HTTP clients that own
//!   the single request primitive (dispatch, status check, JSON decode).
//! - [`RadiantClient`]/[`BlockingRadiantClient`]: one typed method per
//!   endpoint, plus calls by operation id against the endpoint catalog.
//! - [`ClientError`]: unified error type used by all clients.
//!
//! Responses are returned as [`serde_json::Value`] exactly as the server sent
//! them. Nothing is retried; each call sends at most one request.

mod blocking_client;
mod client;
mod config;
mod error;
mod radiant_client;
mod request;

pub mod endpoints;
pub mod operations;
pub mod params;

/// Generic blocking JSON REST client.
pub use blocking_client::BlockingApiClient;
/// Generic async JSON REST client.
pub use client::ApiClient;
/// Connection settings and their defaults.
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
/// Error type returned by all client operations.
pub use error::ClientError;
/// Catalog entry describing one endpoint.
pub use operations::OperationDefinition;
/// Typed endpoint clients.
///
/// See also [`RadiantClient`] for the async variant.
pub use radiant_client::{BlockingRadiantClient, RadiantClient};
/// Per-call request descriptor.
pub use request::ApiRequest;
