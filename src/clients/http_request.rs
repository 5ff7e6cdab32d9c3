//! HTTP request types for the Ghost Content API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Content API. The Content API is read-only, so
//! every request is a GET.

use crate::clients::errors::InvalidHttpRequestError;

/// A GET request to be sent to the Content API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use ghost_api::clients::HttpRequest;
///
/// let request = HttpRequest::builder("/authors/slug/jane")
///     .query_param("fields", "id,name")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path, "authors/slug/jane/");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The path (relative to the content API base path), with a trailing slash.
    pub path: String,
    /// Query parameters in emission order. The API key is added by the client.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the path is empty or a query
    /// parameter has an empty name.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if let Some((_, value)) = self.query.iter().find(|(name, _)| name.is_empty()) {
            return Err(InvalidHttpRequestError::EmptyQueryName {
                value: value.clone(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Replaces all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`], normalizing and validating it.
    ///
    /// Leading slashes are stripped and a single trailing slash is ensured,
    /// since Ghost redirects paths without one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let trimmed = self.path.trim().trim_matches('/');
        let path = format!("{trimmed}/");

        let request = HttpRequest {
            path,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}
