//! Post resource implementation.
//!
//! Posts are the published articles on a Ghost site. Drafts and scheduled
//! posts are never returned by the Content API.
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_api::content::{ContentResource, OrderDirection};
//! use ghost_api::content::resources::{Post, PostField, PostFormat, PostQueryParams};
//!
//! let params = PostQueryParams {
//!     include_authors: true,
//!     include_tags: true,
//!     formats: [PostFormat::Html, PostFormat::Plaintext].into_iter().collect(),
//!     filter: Some("featured:true".to_string()),
//!     order: vec![(PostField::PublishedAt, OrderDirection::Desc)],
//!     limit: Some(5),
//!     ..Default::default()
//! };
//!
//! let posts = Post::browse(&http, Some(params)).await?;
//! for post in posts.iter() {
//!     println!("{:?} by {:?}", post.title, post.primary_author.as_ref().and_then(|a| a.name.as_ref()));
//! }
//! ```

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::query::{field_names, push_window};
use crate::content::{
    encode_fields, encode_order, ContentResource, OrderDirection, QueryParameters,
    ResourceOperation, ResourcePath,
};

use super::{Author, Tag};

/// A published post.
///
/// All fields are optional: which ones are populated depends on the `fields`
/// and `formats` selections and on which relations were included.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Post {
    /// The unique identifier of the post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Stable UUID, unchanged across slug edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// The title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The URL-friendly slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Rendered HTML, present when the `html` format was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Plain text, present when the `plaintext` format was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plaintext: Option<String>,

    /// Mobiledoc source, present when the `mobiledoc` format was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobiledoc: Option<String>,

    /// Lexical source, present when the `lexical` format was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexical: Option<String>,

    /// Identifier used by comment integrations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,

    /// Feature image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_image: Option<String>,

    /// Alt text for the feature image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_image_alt: Option<String>,

    /// Caption for the feature image (HTML).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_image_caption: Option<String>,

    /// Whether the post is featured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    /// `public`, `members`, `paid` or `tiers`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    /// When the post was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the post was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the post was published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Hand-written excerpt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_excerpt: Option<String>,

    /// Code injected into the post head.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codeinjection_head: Option<String>,

    /// Code injected into the post foot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codeinjection_foot: Option<String>,

    /// Theme template override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_template: Option<String>,

    /// Canonical URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,

    /// The post's page on the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Custom excerpt, or the start of the plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Estimated reading time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,

    /// Whether the requesting member can read the full content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<bool>,

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

    /// Newsletter subject line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,

    /// Authors, present when `include_authors` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Author>>,

    /// Tags, present when `include_tags` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// The first author, present when `include_authors` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_author: Option<Author>,

    /// The first public tag, present when `include_tags` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_tag: Option<Tag>,
}

field_names! {
    /// Selectable post and page fields, in schema order.
    ///
    /// Content bodies are selected through [`PostFormat`] instead.
    pub enum PostField {
        /// `id`
        Id => "id",
        /// `uuid`
        Uuid => "uuid",
        /// `title`
        Title => "title",
        /// `slug`
        Slug => "slug",
        /// `comment_id`
        CommentId => "comment_id",
        /// `feature_image`
        FeatureImage => "feature_image",
        /// `feature_image_alt`
        FeatureImageAlt => "feature_image_alt",
        /// `feature_image_caption`
        FeatureImageCaption => "feature_image_caption",
        /// `featured`
        Featured => "featured",
        /// `visibility`
        Visibility => "visibility",
        /// `created_at`
        CreatedAt => "created_at",
        /// `updated_at`
        UpdatedAt => "updated_at",
        /// `published_at`
        PublishedAt => "published_at",
        /// `custom_excerpt`
        CustomExcerpt => "custom_excerpt",
        /// `codeinjection_head`
        CodeinjectionHead => "codeinjection_head",
        /// `codeinjection_foot`
        CodeinjectionFoot => "codeinjection_foot",
        /// `custom_template`
        CustomTemplate => "custom_template",
        /// `canonical_url`
        CanonicalUrl => "canonical_url",
        /// `url`
        Url => "url",
        /// `excerpt`
        Excerpt => "excerpt",
        /// `reading_time`
        ReadingTime => "reading_time",
        /// `access`
        Access => "access",
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
        /// `email_subject`
        EmailSubject => "email_subject",
    }
}

field_names! {
    /// Content formats that can be requested for posts and pages.
    pub enum PostFormat {
        /// Rendered HTML (returned by default).
        Html => "html",
        /// Plain text.
        Plaintext => "plaintext",
        /// Mobiledoc JSON source.
        Mobiledoc => "mobiledoc",
        /// Lexical JSON source.
        Lexical => "lexical",
    }
}

/// Query parameters for post and page requests.
///
/// Emission order: `include, fields, formats, filter, limit, page, order`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostQueryParams {
    /// Include the `authors` relation (and `primary_author`).
    pub include_authors: bool,

    /// Include the `tags` relation (and `primary_tag`).
    pub include_tags: bool,

    /// Fields to return. Empty means all fields.
    pub fields: BTreeSet<PostField>,

    /// Content formats to return. Empty means the server default (`html`).
    pub formats: BTreeSet<PostFormat>,

    /// NQL filter expression.
    pub filter: Option<String>,

    /// Maximum number of records per page.
    pub limit: Option<u32>,

    /// Return all records. Overrides `limit`.
    pub no_limit: bool,

    /// Which page of results to return.
    pub page: Option<u32>,

    /// Sort order.
    pub order: Vec<(PostField, OrderDirection)>,
}

impl PostQueryParams {
    fn include(&self) -> Option<String> {
        let relations: Vec<&str> = [
            (self.include_authors, "authors"),
            (self.include_tags, "tags"),
        ]
        .into_iter()
        .filter_map(|(wanted, name)| wanted.then_some(name))
        .collect();

        if relations.is_empty() {
            None
        } else {
            Some(relations.join(","))
        }
    }
}

impl QueryParameters for PostQueryParams {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(include) = self.include() {
            pairs.push(("include".to_string(), include));
        }

        if let Some(fields) = encode_fields(&self.fields) {
            pairs.push(("fields".to_string(), fields));
        }

        if let Some(formats) = encode_fields(&self.formats) {
            pairs.push(("formats".to_string(), formats));
        }

        push_window(
            &mut pairs,
            self.filter.as_deref(),
            self.limit,
            self.no_limit,
            self.page,
        );

        if let Some(order) = encode_order(&self.order) {
            pairs.push(("order".to_string(), order));
        }

        pairs
    }
}

impl ContentResource for Post {
    type Params = PostQueryParams;

    const NAME: &'static str = "Post";
    const PLURAL: &'static str = "posts";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::ReadById, &["id"], "posts/{id}"),
        ResourcePath::new(ResourceOperation::ReadBySlug, &["slug"], "posts/slug/{slug}"),
        ResourcePath::new(ResourceOperation::Browse, &[], "posts"),
    ];
}
