//! Types embedded in several Content API resources.

use serde::{Deserialize, Serialize};

/// Related-record counts, returned when a request includes `count.posts`.
///
/// # Example
///
/// ```rust
/// use ghost_api::content::resources::Count;
///
/// let count: Count = serde_json::from_str(r#"{"posts": 12}"#).unwrap();
/// assert_eq!(count.posts, Some(12));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Count {
    /// Number of published posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<u64>,
}
