//! Content API client for Ghost.
//!
//! This module provides the [`GhostClient`] type, which wraps every Content
//! API operation and applies the configured [`ExceptionLevel`] to failures.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clients::HttpClient;
use crate::config::{ApiVersion, ContentApiKey, GhostConfig, HostUrl};
use crate::content::resources::{
    Author, AuthorQueryParams, Page, PageQueryParams, Post, PostQueryParams, Settings, Tag,
    TagQueryParams,
};
use crate::content::{
    decide, ContentResource, Decision, ExceptionLevel, GhostError, PagedResult,
};
use crate::error::ConfigError;

/// Client for the Ghost Content API.
///
/// Every operation returns `Result<Option<T>, GhostError>`:
///
/// - `Ok(Some(value))` on success
/// - `Err(error)` when the failure is returned under the exception level
/// - `Ok(None)` when the failure is suppressed; the error is then available
///   from [`last_error()`](Self::last_error)
///
/// # Thread Safety
///
/// `GhostClient` is `Send + Sync`, making it safe to share across async tasks.
/// The last-error slot is guarded by a mutex; concurrent suppressed failures
/// overwrite each other and the last write wins.
///
/// # Example
///
/// ```rust,ignore
/// use ghost_api::{ExceptionLevel, GhostClient};
/// use ghost_api::content::resources::PostQueryParams;
///
/// let mut client = GhostClient::new("https://demo.ghost.io", "22444f78447824223cefc48062")?;
///
/// let params = PostQueryParams { include_authors: true, limit: Some(3), ..Default::default() };
/// if let Some(posts) = client.get_posts(Some(params)).await? {
///     for post in posts.iter() {
///         println!("{:?}", post.title);
///     }
/// }
///
/// client.set_exception_level(ExceptionLevel::None);
/// if client.get_author_by_slug("nobody", None).await?.is_none() {
///     println!("Suppressed: {:?}", client.last_error());
/// }
/// ```
#[derive(Debug)]
pub struct GhostClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
    /// Which failures are returned as errors.
    exception_level: ExceptionLevel,
    /// The most recent suppressed failure.
    last_error: Mutex<Option<Arc<GhostError>>>,
}

// Verify GhostClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GhostClient>();
};

impl GhostClient {
    /// Creates a client for `host` using the given Content API key.
    ///
    /// Uses the latest stable API version and [`ExceptionLevel::All`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the host is not a valid URL or the key is
    /// empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ghost_api::GhostClient;
    ///
    /// let client = GhostClient::new("https://demo.ghost.io", "22444f78447824223cefc48062").unwrap();
    /// assert!(GhostClient::new("https://demo.ghost.io", "").is_err());
    /// assert!(GhostClient::new("", "22444f78447824223cefc48062").is_err());
    /// # drop(client);
    /// ```
    pub fn new(host: &str, api_key: &str) -> Result<Self, ConfigError> {
        let config = GhostConfig::builder()
            .host(HostUrl::new(host)?)
            .api_key(ContentApiKey::new(api_key)?)
            .build()?;

        Ok(Self::from_config(&config))
    }

    /// Creates a client from a validated configuration.
    #[must_use]
    pub fn from_config(config: &GhostConfig) -> Self {
        Self::create_client(config, config.api_version().clone())
    }

    /// Creates a client with an API version override.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use ghost_api::{ApiVersion, GhostClient};
    ///
    /// let client = GhostClient::with_version(&config, ApiVersion::V3);
    /// ```
    #[must_use]
    pub fn with_version(config: &GhostConfig, version: ApiVersion) -> Self {
        let config_version = config.api_version();

        if &version == config_version {
            tracing::debug!(
                "Content client has a redundant API version override to the default {}",
                config_version
            );
        } else {
            tracing::debug!(
                "Content client overriding default API version {} with {}",
                config_version,
                version
            );
        }

        Self::create_client(config, version)
    }

    fn create_client(config: &GhostConfig, api_version: ApiVersion) -> Self {
        let http_client = HttpClient::with_version(config, &api_version);

        Self {
            http_client,
            api_version,
            exception_level: config.exception_level(),
            last_error: Mutex::new(None),
        }
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the current exception level.
    #[must_use]
    pub const fn exception_level(&self) -> ExceptionLevel {
        self.exception_level
    }

    /// Changes which failures are returned as errors.
    pub fn set_exception_level(&mut self, level: ExceptionLevel) {
        self.exception_level = level;
    }

    /// Returns the most recent suppressed failure, if any.
    ///
    /// Successful calls do not clear it.
    #[must_use]
    pub fn last_error(&self) -> Option<Arc<GhostError>> {
        self.last_error_slot().clone()
    }

    /// Forgets the most recent suppressed failure.
    pub fn clear_last_error(&self) {
        self.last_error_slot().take();
    }

    fn last_error_slot(&self) -> MutexGuard<'_, Option<Arc<GhostError>>> {
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies the exception policy to the outcome of a call.
    fn resolve<T>(&self, result: Result<T, GhostError>) -> Result<Option<T>, GhostError> {
        let error = match result {
            Ok(value) => return Ok(Some(value)),
            Err(error) => error,
        };

        match decide(error.kind(), self.exception_level) {
            Decision::Throw => Err(error),
            Decision::Suppress => {
                tracing::warn!(
                    kind = ?error.kind(),
                    level = %self.exception_level,
                    "Suppressed Content API failure: {}",
                    error
                );
                *self.last_error_slot() = Some(Arc::new(error));
                Ok(None)
            }
        }
    }

    async fn by_id<R: ContentResource>(
        &self,
        id: &str,
        params: Option<R::Params>,
    ) -> Result<Option<R>, GhostError> {
        self.resolve(R::find_by_id(&self.http_client, id, params).await)
    }

    async fn by_slug<R: ContentResource>(
        &self,
        slug: &str,
        params: Option<R::Params>,
    ) -> Result<Option<R>, GhostError> {
        self.resolve(R::find_by_slug(&self.http_client, slug, params).await)
    }

    async fn browse<R: ContentResource>(
        &self,
        params: Option<R::Params>,
    ) -> Result<Option<PagedResult<R>>, GhostError> {
        self.resolve(R::browse(&self.http_client, params).await)
    }

    /// Gets an author by id.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed by the
    /// exception level. A missing author yields `"Author not found."`.
    pub async fn get_author_by_id(
        &self,
        id: &str,
        params: Option<AuthorQueryParams>,
    ) -> Result<Option<Author>, GhostError> {
        self.by_id(id, params).await
    }

    /// Gets an author by slug.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed.
    pub async fn get_author_by_slug(
        &self,
        slug: &str,
        params: Option<AuthorQueryParams>,
    ) -> Result<Option<Author>, GhostError> {
        self.by_slug(slug, params).await
    }

    /// Gets a page of authors.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed.
    pub async fn get_authors(
        &self,
        params: Option<AuthorQueryParams>,
    ) -> Result<Option<PagedResult<Author>>, GhostError> {
        self.browse(params).await
    }

    /// Gets a tag by id.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed.
    pub async fn get_tag_by_id(
        &self,
        id: &str,
        params: Option<TagQueryParams>,
    ) -> Result<Option<Tag>, GhostError> {
        self.by_id(id, params).await
    }

    /// Gets a tag by slug.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed.
    pub async fn get_tag_by_slug(
        &self,
        slug: &str,
        params: Option<TagQueryParams>,
    ) -> Result<Option<Tag>, GhostError> {
        self.by_slug(slug, params).await
    }

    /// Gets a page of tags.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed.
    pub async fn get_tags(
        &self,
        params: Option<TagQueryParams>,
    ) -> Result<Option<PagedResult<Tag>>, GhostError> {
        self.browse(params).await
    }

    /// Gets a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed.
    pub async fn get_post_by_id(
        &self,
        id: &str,
        params: Option<PostQueryParams>,
    ) -> Result<Option<Post>, GhostError> {
        self.by_id(id, params).await
    }

    /// Gets a post by slug.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed.
    pub async fn get_post_by_slug(
        &self,
        slug: &str,
        params: Option<PostQueryParams>,
    ) -> Result<Option<Post>, GhostError> {
        self.by_slug(slug, params).await
    }

    /// Gets a page of posts.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed.
    pub async fn get_posts(
        &self,
        params: Option<PostQueryParams>,
    ) -> Result<Option<PagedResult<Post>>, GhostError> {
        self.browse(params).await
    }

    /// Gets a static page by id.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed.
    pub async fn get_page_by_id(
        &self,
        id: &str,
        params: Option<PageQueryParams>,
    ) -> Result<Option<Page>, GhostError> {
        self.by_id(id, params).await
    }

    /// Gets a static page by slug.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed.
    pub async fn get_page_by_slug(
        &self,
        slug: &str,
        params: Option<PageQueryParams>,
    ) -> Result<Option<Page>, GhostError> {
        self.by_slug(slug, params).await
    }

    /// Gets a page of static pages.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed.
    pub async fn get_pages(
        &self,
        params: Option<PageQueryParams>,
    ) -> Result<Option<PagedResult<Page>>, GhostError> {
        self.browse(params).await
    }

    /// Gets the site settings.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] when the failure is not suppressed.
    pub async fn get_settings(&self) -> Result<Option<Settings>, GhostError> {
        self.resolve(Settings::fetch(&self.http_client).await)
    }
}
