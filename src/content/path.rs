//! Path building infrastructure for Content API resources.
//!
//! Every resource in the Content API is reachable through the same three
//! shapes:
//!
//! - `{plural}/` to browse a paginated collection
//! - `{plural}/{id}/` to read one record by id
//! - `{plural}/slug/{slug}/` to read one record by slug
//!
//! Settings is the exception: it only has a browse path.
//!
//! # Example
//!
//! ```rust
//! use ghost_api::content::{ResourcePath, ResourceOperation, get_path, build_path};
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(ResourceOperation::ReadById, &["id"], "authors/{id}"),
//!     ResourcePath::new(ResourceOperation::ReadBySlug, &["slug"], "authors/slug/{slug}"),
//!     ResourcePath::new(ResourceOperation::Browse, &[], "authors"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::ReadBySlug, &["slug"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("slug", "jane doe");
//! assert_eq!(build_path(path.template, &ids), "authors/slug/jane%20doe");
//! ```

use std::collections::HashMap;
use std::fmt::{self, Display};

/// Read operations supported by Content API resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Read a single record by id (GET /{plural}/{id}/).
    ReadById,
    /// Read a single record by slug (GET /{plural}/slug/{slug}/).
    ReadBySlug,
    /// Browse a paginated collection (GET /{plural}/).
    Browse,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReadById => "read_by_id",
            Self::ReadBySlug => "read_by_slug",
            Self::Browse => "browse",
        }
    }

    /// Returns `true` for operations that resolve to a single record.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        matches!(self, Self::ReadById | Self::ReadBySlug)
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path configuration for a resource operation.
///
/// Templates use `{name}` placeholders, filled by [`build_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Placeholder names the template requires.
    pub ids: &'static [&'static str],
    /// The path template, relative to the content API base.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` so paths can be declared as constants.
    #[must_use]
    pub const fn new(
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required placeholders for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required placeholders are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Among paths for `operation` whose placeholders are all available, the one
/// with the most placeholders wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a path from a template by interpolating percent-encoded values.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let value = value.to_string();
        result = result.replace(&placeholder, &urlencoding::encode(&value));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
