//! Response mapping for Content API calls.
//!
//! This module turns an [`HttpResponse`] into either a typed value or a
//! [`GhostError`]. Three payload shapes are recognized:
//!
//! - **Single record**: `{ "authors": [ {...} ] }`, mapped to the first item
//! - **Collection**: `{ "authors": [...], "meta": { "pagination": {...} } }`,
//!   mapped to a [`PagedResult`]
//! - **Object**: `{ "settings": {...}, "meta": {} }`, mapped to the object
//!
//! Checks run in a fixed order:
//!
//! 1. A non-empty `errors` array is a Ghost failure, whatever the status
//! 2. Any other non-2xx status is an other failure
//! 3. A missing key or a payload that fails to deserialize is an other failure
//! 4. A single-record lookup with an empty array is an other failure
//!
//! # Deref Pattern
//!
//! `PagedResult<T>` implements `Deref<Target = Vec<T>>`:
//!
//! ```rust,ignore
//! let authors = client.get_authors(None).await?.unwrap();
//!
//! for author in authors.iter() {
//!     println!("{:?}", author.name);
//! }
//! println!("Page {} of {}", authors.page().unwrap_or(1), authors.pages().unwrap_or(1));
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::clients::HttpResponse;
use crate::content::{parse_api_errors, FailureCause, GhostError};

/// The page size echoed back by Ghost.
///
/// Ghost reports a number for normal requests and the literal `"all"` when
/// the request asked for every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageLimit {
    /// A bounded page size.
    Count(u32),
    /// Every record was requested (`limit=all`).
    All,
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::All => f.write_str("all"),
        }
    }
}

impl Serialize for PageLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Count(n) => serializer.serialize_u32(*n),
            Self::All => serializer.serialize_str("all"),
        }
    }
}

impl<'de> Deserialize<'de> for PageLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(Self::Count(n)),
            Raw::Text(text) if text.eq_ignore_ascii_case("all") => Ok(Self::All),
            Raw::Text(text) => text.trim().parse().map(Self::Count).map_err(|_| {
                serde::de::Error::custom(format!(
                    "invalid page limit '{text}', expected a number or \"all\""
                ))
            }),
        }
    }
}

/// Pagination details for a collection response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// The current page, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// The number of pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    /// The page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<PageLimit>,
    /// The number of records across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    /// The next page number, if there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<u32>,
    /// The previous page number, if there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<u32>,
}

/// Response metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Pagination details, present on collection responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// A page of records together with its metadata.
///
/// Implements `Deref<Target = Vec<T>>` for transparent access to the items.
///
/// # Example
///
/// ```rust
/// use ghost_api::content::{PagedResult, Meta, Pagination};
///
/// let result = PagedResult::new(
///     vec!["a", "b"],
///     Meta {
///         pagination: Some(Pagination {
///             page: Some(1),
///             pages: Some(3),
///             next: Some(2),
///             ..Default::default()
///         }),
///     },
/// );
///
/// assert_eq!(result.len(), 2);
/// assert!(result.has_next_page());
/// assert_eq!(result.next_page(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResult<T> {
    /// The records on this page.
    pub items: Vec<T>,
    /// Response metadata.
    pub meta: Meta,
}

impl<T> PagedResult<T> {
    /// Creates a new `PagedResult`.
    #[must_use]
    pub const fn new(items: Vec<T>, meta: Meta) -> Self {
        Self { items, meta }
    }

    /// Consumes the result and returns the items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Returns the pagination details, if present.
    #[must_use]
    pub const fn pagination(&self) -> Option<&Pagination> {
        self.meta.pagination.as_ref()
    }

    /// Returns the current page number.
    #[must_use]
    pub fn page(&self) -> Option<u32> {
        self.pagination().and_then(|p| p.page)
    }

    /// Returns the number of pages.
    #[must_use]
    pub fn pages(&self) -> Option<u32> {
        self.pagination().and_then(|p| p.pages)
    }

    /// Returns the total number of records across all pages.
    #[must_use]
    pub fn total(&self) -> Option<u32> {
        self.pagination().and_then(|p| p.total)
    }

    /// Returns the next page number, if any.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.pagination().and_then(|p| p.next)
    }

    /// Returns the previous page number, if any.
    #[must_use]
    pub fn prev_page(&self) -> Option<u32> {
        self.pagination().and_then(|p| p.prev)
    }

    /// Returns `true` if there is a next page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page().is_some()
    }

    /// Returns `true` if there is a previous page.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.prev_page().is_some()
    }
}

impl<T> Deref for PagedResult<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for PagedResult<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

/// Rejects responses that carry an `errors` array or a non-2xx status.
///
/// `single` selects the message rule of the resulting [`GhostError`].
///
/// # Errors
///
/// Returns a Ghost failure for a non-empty `errors` array, and an other
/// failure for any other non-2xx status.
pub fn check_response(response: &HttpResponse, single: bool) -> Result<(), GhostError> {
    if let Some(errors) = parse_api_errors(&response.body) {
        return Err(GhostError::from_api_errors(errors, single));
    }

    if !response.is_ok() {
        let body = response
            .raw_body()
            .map_or_else(|| response.body.to_string(), ToString::to_string);
        return Err(FailureCause::UnexpectedStatus {
            code: response.code,
            body,
        }
        .into());
    }

    Ok(())
}

/// Removes and returns the payload stored under `key`.
fn take_key(body: Value, key: &str) -> Result<Value, GhostError> {
    match body {
        Value::Object(mut map) => map.remove(key),
        _ => None,
    }
    .ok_or_else(|| {
        FailureCause::MissingKey {
            key: key.to_string(),
        }
        .into()
    })
}

fn deserialize<T: DeserializeOwned>(value: Value, key: &str) -> Result<T, GhostError> {
    serde_json::from_value(value).map_err(|source| {
        FailureCause::Deserialize {
            key: key.to_string(),
            source,
        }
        .into()
    })
}

/// Maps a single-record response to its first item.
///
/// # Errors
///
/// Returns [`GhostError`] per the checks described in the module docs.
pub fn map_single<T: DeserializeOwned>(
    response: HttpResponse,
    key: &str,
    resource: &'static str,
) -> Result<T, GhostError> {
    check_response(&response, true)?;

    let items: Vec<T> = deserialize(take_key(response.body, key)?, key)?;
    items
        .into_iter()
        .next()
        .ok_or_else(|| FailureCause::Empty { resource }.into())
}

/// Maps a collection response to a [`PagedResult`].
///
/// A missing `meta` key is tolerated and yields empty metadata.
///
/// # Errors
///
/// Returns [`GhostError`] per the checks described in the module docs.
pub fn map_collection<T: DeserializeOwned>(
    response: HttpResponse,
    key: &str,
) -> Result<PagedResult<T>, GhostError> {
    check_response(&response, false)?;

    let mut body = response.body;
    let meta = match body.get_mut("meta").map(Value::take) {
        Some(Value::Null) | None => Meta::default(),
        Some(meta) => deserialize(meta, "meta")?,
    };
    let items: Vec<T> = deserialize(take_key(body, key)?, key)?;

    Ok(PagedResult::new(items, meta))
}

/// Maps an object response (such as settings) to the object under `key`.
///
/// # Errors
///
/// Returns [`GhostError`] per the checks described in the module docs.
pub fn map_object<T: DeserializeOwned>(response: HttpResponse, key: &str) -> Result<T, GhostError> {
    check_response(&response, false)?;

    deserialize(take_key(response.body, key)?, key)
}
