//! Tag resource implementation.
//!
//! Tags group posts and pages. Internal tags (names starting with `#`) are
//! only returned when a filter asks for `visibility:internal`.
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_api::content::ContentResource;
//! use ghost_api::content::resources::{Tag, TagQueryParams};
//!
//! let tag = Tag::find_by_slug(&http, "getting-started", None).await?;
//!
//! let params = TagQueryParams {
//!     filter: Some("visibility:public".to_string()),
//!     no_limit: true,
//!     ..Default::default()
//! };
//! let tags = Tag::browse(&http, Some(params)).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::content::query::field_names;
use crate::content::{ContentResource, QueryParams, ResourceOperation, ResourcePath};

use super::common::Count;

/// A tag on a Ghost site.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Tag {
    /// The unique identifier of the tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The URL-friendly slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Tag description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Feature image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_image: Option<String>,

    /// `public` or `internal`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    /// Open Graph image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,

    /// Open Graph title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,

    /// Open Graph description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,

    /// Twitter card image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,

    /// Twitter card title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,

    /// Twitter card description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,

    /// SEO title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    /// SEO description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// Code injected into the tag page head.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codeinjection_head: Option<String>,

    /// Code injected into the tag page foot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codeinjection_foot: Option<String>,

    /// Canonical URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,

    /// Accent color as a hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,

    /// Post count, present when `include_post_count` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Count>,

    /// The tag's page on the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

field_names! {
    /// Selectable tag fields, in schema order.
    pub enum TagField {
        /// `id`
        Id => "id",
        /// `name`
        Name => "name",
        /// `slug`
        Slug => "slug",
        /// `description`
        Description => "description",
        /// `feature_image`
        FeatureImage => "feature_image",
        /// `visibility`
        Visibility => "visibility",
        /// `og_image`
        OgImage => "og_image",
        /// `og_title`
        OgTitle => "og_title",
        /// `og_description`
        OgDescription => "og_description",
        /// `twitter_image`
        TwitterImage => "twitter_image",
        /// `twitter_title`
        TwitterTitle => "twitter_title",
        /// `twitter_description`
        TwitterDescription => "twitter_description",
        /// `meta_title`
        MetaTitle => "meta_title",
        /// `meta_description`
        MetaDescription => "meta_description",
        /// `codeinjection_head`
        CodeinjectionHead => "codeinjection_head",
        /// `codeinjection_foot`
        CodeinjectionFoot => "codeinjection_foot",
        /// `canonical_url`
        CanonicalUrl => "canonical_url",
        /// `accent_color`
        AccentColor => "accent_color",
        /// `url`
        Url => "url",
    }
}

/// Query parameters for tag requests.
pub type TagQueryParams = QueryParams<TagField>;

impl ContentResource for Tag {
    type Params = TagQueryParams;

    const NAME: &'static str = "Tag";
    const PLURAL: &'static str = "tags";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::ReadById, &["id"], "tags/{id}"),
        ResourcePath::new(ResourceOperation::ReadBySlug, &["slug"], "tags/slug/{slug}"),
        ResourcePath::new(ResourceOperation::Browse, &[], "tags"),
    ];
}
