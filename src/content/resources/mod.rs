//! Content API resource types.
//!
//! Authors, tags, posts and pages implement
//! [`ContentResource`](crate::content::ContentResource) and can be read by
//! id, by slug, or browsed. [`Settings`] is a single object with its own
//! `fetch` operation.
//!
//! Every record field is optional, because `fields` selections and
//! `include` relations change which ones the server returns.

mod author;
mod common;
mod page;
mod post;
mod settings;
mod tag;

pub use author::{Author, AuthorField, AuthorQueryParams};
pub use common::Count;
pub use page::{Page, PageField, PageQueryParams};
pub use post::{Post, PostField, PostFormat, PostQueryParams};
pub use settings::{NavigationItem, Settings};
pub use tag::{Tag, TagField, TagQueryParams};
