//! Unified error type for Content API operations.
//!
//! Every failing call produces a single [`GhostError`], whether Ghost rejected
//! the request or something went wrong before a structured answer arrived.
//!
//! # Classification
//!
//! - **Ghost failures** carry one or more [`ApiError`]s reported by the server
//!   in an `errors` array (e.g. "Author not found.", "Unknown Content API Key").
//! - **Other failures** carry a [`FailureCause`]: network errors, unexpected
//!   statuses without an error body, missing or malformed payloads, and
//!   single-record lookups that came back empty.
//!
//! Classification never fails. Anything without a structured error list is
//! an other failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_api::content::FailureKind;
//!
//! match client.get_author_by_slug("jane", None).await {
//!     Ok(Some(author)) => println!("Found: {:?}", author.name),
//!     Ok(None) => println!("Suppressed: {:?}", client.last_error()),
//!     Err(e) if e.kind() == FailureKind::Ghost => {
//!         for error in &e.errors {
//!             println!("{}: {}", error.error_type.as_deref().unwrap_or("?"), error.message);
//!         }
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::clients::HttpError;
use crate::content::{FailureKind, ResourceOperation};

/// A single error reported by the Content API.
///
/// Ghost error bodies look like:
///
/// ```json
/// {"errors": [{"message": "Author not found.", "type": "NotFoundError", "context": null}]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message.
    #[serde(default)]
    pub message: String,

    /// Error class reported by Ghost (e.g. `NotFoundError`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    /// Additional context for the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Structured details, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,

    /// The request property the error relates to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    /// Suggested fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Machine-readable error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Server-side error id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ApiError {
    /// Creates an error carrying only a message.
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Parses one entry of an `errors` array.
    ///
    /// Entries that do not match the expected shape are kept, with their JSON
    /// text as the message.
    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(message) => Self::with_message(message.clone()),
            Value::Object(_) => serde_json::from_value(value.clone())
                .unwrap_or_else(|_| Self::with_message(value.to_string())),
            other => Self::with_message(other.to_string()),
        }
    }
}

/// Extracts the server-reported errors from a response body.
///
/// Returns `None` unless the body holds a non-empty `errors` array.
#[must_use]
pub fn parse_api_errors(body: &Value) -> Option<Vec<ApiError>> {
    let errors = body.get("errors")?.as_array()?;
    if errors.is_empty() {
        return None;
    }
    Some(errors.iter().map(ApiError::from_value).collect())
}

/// The underlying reason for a failure that Ghost did not report itself.
#[derive(Debug, Error)]
pub enum FailureCause {
    /// The request could not be sent or the connection failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A non-2xx status arrived without an `errors` array.
    #[error("Unexpected HTTP status {code}: {body}")]
    UnexpectedStatus {
        /// The HTTP status code.
        code: u16,
        /// The response body, as text.
        body: String,
    },

    /// A successful response did not contain the expected key.
    #[error("Response body is missing the '{key}' key")]
    MissingKey {
        /// The key that was expected.
        key: String,
    },

    /// The payload under `key` could not be deserialized.
    #[error("Failed to deserialize '{key}': {source}")]
    Deserialize {
        /// The key whose payload failed.
        key: String,
        /// The serde error.
        source: serde_json::Error,
    },

    /// A single-record lookup returned an empty array.
    #[error("No {resource} was returned")]
    Empty {
        /// The resource name (e.g. "Author").
        resource: &'static str,
    },

    /// A single-record lookup was given an empty or blank id or slug.
    #[error("{resource} {operation} requires a non-empty identifier")]
    EmptyIdentifier {
        /// The resource name.
        resource: &'static str,
        /// The operation that was requested.
        operation: ResourceOperation,
    },

    /// The resource has no path for the requested operation.
    #[error("{resource} does not support the {operation} operation")]
    UnsupportedOperation {
        /// The resource name.
        resource: &'static str,
        /// The operation that was requested.
        operation: ResourceOperation,
    },
}

/// The unified error returned by every Content API call.
///
/// For single-record lookups the message is the top server error's message
/// (e.g. `"Author not found."`). For collection and settings calls it is a
/// generic summary. The full error list is always available in `errors`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct GhostError {
    /// The error message.
    pub message: String,
    /// Every error reported by Ghost, in response order.
    pub errors: Vec<ApiError>,
    /// The underlying failure, for errors Ghost did not report itself.
    #[source]
    pub cause: Option<FailureCause>,
}

impl GhostError {
    /// Creates an error from a list of server-reported errors.
    ///
    /// `single` selects the message rule: the top error's message for
    /// single-record lookups, a summary otherwise.
    #[must_use]
    pub fn from_api_errors(errors: Vec<ApiError>, single: bool) -> Self {
        let message = match errors.first() {
            Some(first) if single && !first.message.is_empty() => first.message.clone(),
            _ => format!(
                "The Ghost API returned {} error(s). See `errors` for details.",
                errors.len()
            ),
        };

        Self {
            message,
            errors,
            cause: None,
        }
    }

    /// Creates an error from a failure Ghost did not report itself.
    #[must_use]
    pub fn from_cause(cause: FailureCause) -> Self {
        Self {
            message: cause.to_string(),
            errors: Vec::new(),
            cause: Some(cause),
        }
    }

    /// Returns whether Ghost reported this failure.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        if self.errors.is_empty() {
            FailureKind::Other
        } else {
            FailureKind::Ghost
        }
    }
}

impl From<FailureCause> for GhostError {
    fn from(cause: FailureCause) -> Self {
        Self::from_cause(cause)
    }
}

impl From<HttpError> for GhostError {
    fn from(error: HttpError) -> Self {
        Self::from_cause(FailureCause::Http(error))
    }
}

// Verify GhostError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GhostError>();
};
