//! Content API infrastructure for Ghost.
//!
//! This module provides the building blocks behind
//! [`GhostClient`](crate::GhostClient):
//!
//! - **[`ContentResource`] trait**: read-by-id, read-by-slug and browse for
//!   every collection resource
//! - **Query encoding**: typed parameter objects rendered into the Content
//!   API's `include`/`fields`/`formats`/`filter`/`limit`/`page`/`order` grammar
//! - **[`PagedResult<T>`]**: a Deref-based wrapper carrying pagination metadata
//! - **[`GhostError`]**: one error type for every failure, classified as Ghost
//!   or other
//! - **Exception policy**: [`decide`] maps a failure and an [`ExceptionLevel`]
//!   to return-or-suppress
//!
//! # Example: Using a Resource Directly
//!
//! ```rust,ignore
//! use ghost_api::{GhostConfig, HttpClient};
//! use ghost_api::content::{ContentResource, QueryParameters};
//! use ghost_api::content::resources::{Author, AuthorQueryParams};
//!
//! let http = HttpClient::new(&config);
//!
//! let author = Author::find_by_slug(&http, "ghost", None).await?;
//! println!("Author: {:?}", author.name);
//!
//! let params = AuthorQueryParams { no_limit: true, ..Default::default() };
//! let authors = Author::browse(&http, Some(params)).await?;
//! for author in authors.iter() {
//!     println!("- {:?}", author.slug);
//! }
//! ```
//!
//! Calling resources directly always returns errors. Use
//! [`GhostClient`](crate::GhostClient) to apply an [`ExceptionLevel`].

mod errors;
mod path;
mod policy;
pub(crate) mod query;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use errors::{parse_api_errors, ApiError, FailureCause, GhostError};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use policy::{decide, Decision, ExceptionLevel, FailureKind};
pub use query::{
    encode_fields, encode_order, parse_fields, render_query, FieldName, OrderDirection,
    QueryParameters, QueryParams,
};
pub use resource::ContentResource;
pub use response::{
    check_response, map_collection, map_object, map_single, Meta, PageLimit, PagedResult,
    Pagination,
};
