//! # Ghost Content API Rust Client
//!
//! A Rust client for the read-only Content API of a Ghost site, providing
//! type-safe configuration, typed query parameters, and a configurable
//! policy for which failures are returned as errors.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`GhostConfig`] and [`GhostConfigBuilder`]
//! - Validated newtypes for the host URL and Content API key
//! - Read-by-id, read-by-slug and browse for authors, tags, posts and pages
//! - Site settings
//! - Typed field selection, ordering, filtering and pagination
//! - Exception levels controlling which failures are returned and which are
//!   suppressed and recorded
//!
//! ## Quick Start
//!
//! ```rust
//! use ghost_api::{GhostConfig, ContentApiKey, HostUrl, ApiVersion, ExceptionLevel};
//!
//! let config = GhostConfig::builder()
//!     .host(HostUrl::new("https://demo.ghost.io").unwrap())
//!     .api_key(ContentApiKey::new("22444f78447824223cefc48062").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .exception_level(ExceptionLevel::Ghost)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Reading Content
//!
//! ```rust,ignore
//! use ghost_api::GhostClient;
//! use ghost_api::content::OrderDirection;
//! use ghost_api::content::resources::{PostField, PostQueryParams};
//!
//! let client = GhostClient::new("https://demo.ghost.io", "22444f78447824223cefc48062")?;
//!
//! // A single author
//! if let Some(author) = client.get_author_by_slug("ghost", None).await? {
//!     println!("{:?}", author.name);
//! }
//!
//! // The five newest featured posts, with authors and tags
//! let params = PostQueryParams {
//!     include_authors: true,
//!     include_tags: true,
//!     filter: Some("featured:true".to_string()),
//!     limit: Some(5),
//!     order: vec![(PostField::PublishedAt, OrderDirection::Desc)],
//!     ..Default::default()
//! };
//! if let Some(posts) = client.get_posts(Some(params)).await? {
//!     println!("{} of {:?}", posts.len(), posts.total());
//! }
//! ```
//!
//! ## Exception Levels
//!
//! | Level      | Ghost failure | Other failure |
//! |------------|---------------|---------------|
//! | `None`     | `Ok(None)`    | `Ok(None)`    |
//! | `Ghost`    | `Err`         | `Ok(None)`    |
//! | `NonGhost` | `Ok(None)`    | `Err`         |
//! | `All`      | `Err`         | `Err`         |
//!
//! Suppressed failures are available from [`GhostClient::last_error`].
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Read-only**: Only GET requests are ever sent

pub mod clients;
pub mod config;
pub mod content;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ApiVersion, ContentApiKey, GhostConfig, GhostConfigBuilder, HostUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    GhostClient, HttpClient, HttpError, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError,
};

// Re-export the error and policy types every caller handles
pub use content::{ApiError, ExceptionLevel, FailureKind, GhostError, PagedResult};
