//! HTTP response types for the Ghost Content API client.
//!
//! This module provides the [`HttpResponse`] type for accessing the status,
//! headers and body returned by the Content API.

use std::collections::HashMap;

/// An HTTP response from the Content API.
///
/// Header names are lower-cased. The body is always JSON: an empty body
/// becomes `{}` and a body that is not valid JSON is wrapped as
/// `{"raw_body": "..."}`.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the raw text of a body that could not be parsed as JSON.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        self.body.get("raw_body").and_then(serde_json::Value::as_str)
    }
}
