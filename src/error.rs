//! Configuration error types for the Ghost Content API client.
//!
//! This module contains the error type returned while building a
//! [`GhostConfig`](crate::GhostConfig) or one of its validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! misconfigured client is rejected before any request is sent.
//!
//! # Example
//!
//! ```rust
//! use ghost_api::{ContentApiKey, ConfigError};
//!
//! let result = ContentApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Content API key cannot be empty.
    #[error("Content API key cannot be empty. Copy the key from a custom integration in Ghost Admin.")]
    EmptyApiKey,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'v<N>' (e.g., 'v3') or 'canary'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide the site URL with scheme (e.g., 'https://demo.ghost.io').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
