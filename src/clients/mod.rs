//! HTTP client types for Ghost Content API communication.
//!
//! This module provides the transport layer for making keyed requests to the
//! Content API, and the [`GhostClient`] built on top of it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A GET request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`GhostClient`]: Typed accessors for authors, tags, posts, pages and settings
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_api::clients::{HttpClient, HttpRequest};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder("posts")
//!     .query_param("limit", "5")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Status Handling
//!
//! The transport does not treat non-2xx statuses as errors and never retries.
//! Ghost reports "not found" and "unknown key" as a structured `errors` array,
//! and classification of those payloads happens in [`crate::content`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod content;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use content::GhostClient;
