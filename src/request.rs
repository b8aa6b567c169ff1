use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::ClientError;
use crate::operations::{OperationDefinition, parse_method, render_path};

/// A fully shaped call: operation, rendered path, query pairs and optional body.
///
/// Built once per call by the typed endpoint methods and handed to the shared
/// request primitive. Nothing here touches the network.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    operation: &'static OperationDefinition,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    /// Starts a request for `operation`, substituting its path parameters.
    pub fn new(
        operation: &'static OperationDefinition,
        path_params: &[(&str, &str)],
    ) -> Result<Self, ClientError> {
        Ok(Self {
            operation,
            method: parse_method(operation)?,
            path: render_path(operation, path_params)?,
            query: Vec::new(),
            body: None,
        })
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Appends a query parameter only when `value` is present and non-empty.
    #[must_use]
    pub fn query_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.query(key, value),
            _ => self,
        }
    }

    /// Sets the JSON body.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Catalog entry this request was built from.
    pub fn operation(&self) -> &'static OperationDefinition {
        self.operation
    }

    /// HTTP method of the operation.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL, with path parameters percent-encoded.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs in the order they will be sent.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// JSON body, if the operation takes one.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub(crate) fn into_parts(self) -> (Method, String, Vec<(String, String)>, Option<Value>) {
        (self.method, self.path, self.query, self.body)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::ApiRequest;
    use crate::operations::{BROADCAST_TRANSACTION, SEARCH_TOKENS};

    #[test]
    fn optional_query_values_are_skipped_when_absent_or_empty() {
        let request = ApiRequest::new(&SEARCH_TOKENS, &[])
            .expect("renders")
            .query("q", "rxd")
            .query_opt("protocols", None)
            .query_opt("type", Some(""))
            .query("limit", 50);

        assert_eq!(
            request.query_pairs(),
            [
                ("q".to_owned(), "rxd".to_owned()),
                ("limit".to_owned(), "50".to_owned()),
            ]
        );
        assert_eq!(request.operation().operation_id, "searchTokens");
    }

    #[test]
    fn json_body_is_attached() {
        let request = ApiRequest::new(&BROADCAST_TRANSACTION, &[])
            .expect("renders")
            .json(&json!({ "raw_tx": "deadbeef" }))
            .expect("serializes");

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.path(), "/tx");
        assert_eq!(request.body(), Some(&json!({ "raw_tx": "deadbeef" })));
    }
}
