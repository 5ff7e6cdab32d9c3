//! Author resource implementation.
//!
//! Authors are the staff users credited on posts. Only authors with at least
//! one published post are visible through the Content API.
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_api::content::{ContentResource, OrderDirection};
//! use ghost_api::content::resources::{Author, AuthorField, AuthorQueryParams};
//!
//! // Find a single author
//! let author = Author::find_by_slug(&http, "jane", None).await?;
//!
//! // List authors with post counts, sorted by name
//! let params = AuthorQueryParams {
//!     include_post_count: true,
//!     order: vec![(AuthorField::Name, OrderDirection::Asc)],
//!     ..Default::default()
//! };
//! let authors = Author::browse(&http, Some(params)).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::content::query::field_names;
use crate::content::{ContentResource, QueryParams, ResourceOperation, ResourcePath};

use super::common::Count;

/// An author on a Ghost site.
///
/// All fields are optional: which ones are populated depends on the
/// `fields` selection. Ghost always includes `url`, even when it was not
/// requested.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Author {
    /// The unique identifier of the author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The URL-friendly slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Profile picture URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,

    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// Short biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Personal website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Free-form location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Facebook username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    /// Twitter handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    /// SEO title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    /// SEO description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// Post count, present when `include_post_count` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Count>,

    /// The author's page on the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

field_names! {
    /// Selectable author fields, in schema order.
    pub enum AuthorField {
        /// `id`
        Id => "id",
        /// `name`
        Name => "name",
        /// `slug`
        Slug => "slug",
        /// `profile_image`
        ProfileImage => "profile_image",
        /// `cover_image`
        CoverImage => "cover_image",
        /// `bio`
        Bio => "bio",
        /// `website`
        Website => "website",
        /// `location`
        Location => "location",
        /// `facebook`
        Facebook => "facebook",
        /// `twitter`
        Twitter => "twitter",
        /// `meta_title`
        MetaTitle => "meta_title",
        /// `meta_description`
        MetaDescription => "meta_description",
        /// `url`
        Url => "url",
    }
}

/// Query parameters for author requests.
pub type AuthorQueryParams = QueryParams<AuthorField>;

impl ContentResource for Author {
    type Params = AuthorQueryParams;

    const NAME: &'static str = "Author";
    const PLURAL: &'static str = "authors";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::ReadById, &["id"], "authors/{id}"),
        ResourcePath::new(
            ResourceOperation::ReadBySlug,
            &["slug"],
            "authors/slug/{slug}",
        ),
        ResourcePath::new(ResourceOperation::Browse, &[], "authors"),
    ];
}
