//! Content resource trait for read operations.
//!
//! This module defines the [`ContentResource`] trait, which gives every
//! browsable Content API resource the same three operations:
//! `find_by_id()`, `find_by_slug()` and `browse()`.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives, all fields optional
//! 2. Implement `ContentResource` with the parameter type and constants
//! 3. The trait provides default implementations for every operation
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_api::content::{ContentResource, ResourcePath, ResourceOperation, QueryParams};
//!
//! impl ContentResource for Tag {
//!     type Params = QueryParams<TagField>;
//!
//!     const NAME: &'static str = "Tag";
//!     const PLURAL: &'static str = "tags";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(ResourceOperation::ReadById, &["id"], "tags/{id}"),
//!         ResourcePath::new(ResourceOperation::ReadBySlug, &["slug"], "tags/slug/{slug}"),
//!         ResourcePath::new(ResourceOperation::Browse, &[], "tags"),
//!     ];
//! }
//!
//! let tag = Tag::find_by_slug(&http, "news", None).await?;
//! let tags = Tag::browse(&http, None).await?;
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpRequest, HttpResponse};
use crate::content::{
    build_path, get_path, map_collection, map_single, FailureCause, GhostError, PagedResult,
    QueryParameters, ResourceOperation, ResourcePath,
};

/// A Content API resource that can be read by id, by slug, or browsed.
///
/// # Associated Types
///
/// - `Params`: The query parameter object accepted by every operation
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name (e.g., "Author")
/// - `PLURAL`: The plural name, used both in paths and as the response key
/// - `PATHS`: Available paths for each operation
#[allow(async_fn_in_trait)]
pub trait ContentResource: DeserializeOwned + Send + Sync + Sized {
    /// Query parameters for this resource.
    type Params: QueryParameters + Send + Sync;

    /// The singular name of the resource (e.g., "Author").
    const NAME: &'static str;

    /// The plural name used in paths and response bodies (e.g., "authors").
    const PLURAL: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Reads a single record by id.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] if Ghost reports an error (e.g. "Author not
    /// found."), the request fails, or the payload cannot be mapped.
    async fn find_by_id(
        client: &HttpClient,
        id: &str,
        params: Option<Self::Params>,
    ) -> Result<Self, GhostError> {
        let response =
            send::<Self>(client, ResourceOperation::ReadById, Some(("id", id)), params).await?;
        map_single(response, Self::PLURAL, Self::NAME)
    }

    /// Reads a single record by slug.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] if Ghost reports an error, the request fails,
    /// or the payload cannot be mapped.
    async fn find_by_slug(
        client: &HttpClient,
        slug: &str,
        params: Option<Self::Params>,
    ) -> Result<Self, GhostError> {
        let response =
            send::<Self>(client, ResourceOperation::ReadBySlug, Some(("slug", slug)), params)
                .await?;
        map_single(response, Self::PLURAL, Self::NAME)
    }

    /// Browses a page of records.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] if Ghost reports an error (e.g. "Unknown
    /// Content API Key"), the request fails, or the payload cannot be mapped.
    async fn browse(
        client: &HttpClient,
        params: Option<Self::Params>,
    ) -> Result<PagedResult<Self>, GhostError> {
        let response = send::<Self>(client, ResourceOperation::Browse, None, params).await?;
        map_collection(response, Self::PLURAL)
    }
}

/// Resolves the path for `operation`, attaches the query, and sends it.
async fn send<R: ContentResource>(
    client: &HttpClient,
    operation: ResourceOperation,
    id: Option<(&str, &str)>,
    params: Option<R::Params>,
) -> Result<HttpResponse, GhostError> {
    // A blank id would collapse `{plural}/{id}/` into the browse path
    if operation.is_single() && id.map_or(true, |(_, value)| value.trim().is_empty()) {
        return Err(FailureCause::EmptyIdentifier {
            resource: R::NAME,
            operation,
        }
        .into());
    }

    let ids: HashMap<&str, &str> = id.into_iter().collect();
    let available_ids: Vec<&str> = ids.keys().copied().collect();

    let path = get_path(R::PATHS, operation, &available_ids).ok_or(
        FailureCause::UnsupportedOperation {
            resource: R::NAME,
            operation,
        },
    )?;

    let query = params
        .map(|p| p.to_query_pairs())
        .unwrap_or_default();

    let request = HttpRequest::builder(build_path(path.template, &ids))
        .query(query)
        .build()
        .map_err(crate::clients::HttpError::from)?;

    Ok(client.request(request).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContentApiKey, GhostConfig, HostUrl};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct BrowseOnly {}

    impl ContentResource for BrowseOnly {
        type Params = ();

        const NAME: &'static str = "BrowseOnly";
        const PLURAL: &'static str = "things";
        const PATHS: &'static [ResourcePath] =
            &[ResourcePath::new(ResourceOperation::Browse, &[], "things")];
    }

    fn client() -> HttpClient {
        let config = GhostConfig::builder()
            .host(HostUrl::new("http://127.0.0.1:9").unwrap())
            .api_key(ContentApiKey::new("key").unwrap())
            .build()
            .unwrap();
        HttpClient::new(&config)
    }

    #[tokio::test]
    async fn test_blank_identifier_is_rejected_before_sending() {
        for id in ["", "   "] {
            let error = BrowseOnly::find_by_id(&client(), id, None).await.unwrap_err();

            assert_eq!(error.kind(), crate::content::FailureKind::Other);
            assert!(matches!(
                error.cause,
                Some(FailureCause::EmptyIdentifier {
                    resource: "BrowseOnly",
                    operation: ResourceOperation::ReadById,
                })
            ));
        }

        let error = BrowseOnly::find_by_slug(&client(), "", None).await.unwrap_err();
        assert_eq!(
            error.message,
            "BrowseOnly read_by_slug requires a non-empty identifier"
        );
    }

    #[tokio::test]
    async fn test_missing_path_is_unsupported_operation() {
        let error = BrowseOnly::find_by_id(&client(), "1", None).await.unwrap_err();

        assert!(matches!(
            error.cause,
            Some(FailureCause::UnsupportedOperation {
                resource: "BrowseOnly",
                operation: ResourceOperation::ReadById,
            })
        ));
        assert_eq!(
            error.message,
            "BrowseOnly does not support the read_by_id operation"
        );
    }
}
