//! HTTP-specific error types for the Ghost Content API client.
//!
//! This module contains error types for the transport layer: request
//! validation failures and network errors.
//!
//! A non-2xx response is not an error at this layer. The client returns every
//! response it receives and leaves classification to the response mapper,
//! because Ghost reports structured errors with 4xx statuses.
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_api::clients::{HttpClient, HttpRequest, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Status {}: {}", response.code, response.body),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use ghost_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::EmptyPath;
/// assert_eq!(error.to_string(), "Cannot send a request without a resource path.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The resource path was empty after normalization.
    #[error("Cannot send a request without a resource path.")]
    EmptyPath,

    /// A query parameter was given an empty name.
    #[error("Query parameter names cannot be empty (value: '{value}').")]
    EmptyQueryName {
        /// The value that was paired with the empty name.
        value: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
