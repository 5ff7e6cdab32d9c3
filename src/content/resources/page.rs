//! Page resource implementation.
//!
//! Pages are static posts that sit outside the chronological feed. They share
//! the post schema and query parameters, and differ only in their endpoint.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::content::{ContentResource, ResourceOperation, ResourcePath};

use super::{Post, PostField, PostQueryParams};

/// A static page. Dereferences to [`Post`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct Page(pub Post);

impl Page {
    /// Consumes the page and returns the underlying post record.
    #[must_use]
    pub fn into_inner(self) -> Post {
        self.0
    }
}

impl Deref for Page {
    type Target = Post;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Page {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Selectable page fields. Identical to [`PostField`].
pub type PageField = PostField;

/// Query parameters for page requests. Identical to [`PostQueryParams`].
pub type PageQueryParams = PostQueryParams;

impl ContentResource for Page {
    type Params = PageQueryParams;

    const NAME: &'static str = "Page";
    const PLURAL: &'static str = "pages";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::ReadById, &["id"], "pages/{id}"),
        ResourcePath::new(ResourceOperation::ReadBySlug, &["slug"], "pages/slug/{slug}"),
        ResourcePath::new(ResourceOperation::Browse, &[], "pages"),
    ];
}
