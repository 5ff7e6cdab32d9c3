//! Configuration types for the Ghost Content API client.
//!
//! This module provides the configuration used to construct a
//! [`GhostClient`](crate::GhostClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GhostConfig`]: The configuration struct holding all client settings
//! - [`GhostConfigBuilder`]: A builder for constructing [`GhostConfig`] instances
//! - [`ContentApiKey`]: A validated Content API key with masked debug output
//! - [`HostUrl`]: A validated Ghost site URL
//! - [`ApiVersion`]: The Content API version to use
//!
//! # Example
//!
//! ```rust
//! use ghost_api::{GhostConfig, ContentApiKey, HostUrl, ApiVersion};
//!
//! let config = GhostConfig::builder()
//!     .host(HostUrl::new("https://demo.ghost.io").unwrap())
//!     .api_key(ContentApiKey::new("22444f78447824223cefc48062").unwrap())
//!     .api_version(ApiVersion::V3)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ContentApiKey, HostUrl};
pub use version::ApiVersion;

use crate::content::ExceptionLevel;
use crate::error::ConfigError;

/// Configuration for the Ghost Content API client.
///
/// # Thread Safety
///
/// `GhostConfig` is `Clone`, `Send`, and `Sync`, so one configuration can be
/// used to build several independent clients.
///
/// # Example
///
/// ```rust
/// use ghost_api::{GhostConfig, ContentApiKey, HostUrl, ExceptionLevel};
///
/// let config = GhostConfig::builder()
///     .host(HostUrl::new("https://demo.ghost.io").unwrap())
///     .api_key(ContentApiKey::new("22444f78447824223cefc48062").unwrap())
///     .exception_level(ExceptionLevel::Ghost)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.exception_level(), ExceptionLevel::Ghost);
/// ```
#[derive(Clone, Debug)]
pub struct GhostConfig {
    host: HostUrl,
    api_key: ContentApiKey,
    api_version: ApiVersion,
    exception_level: ExceptionLevel,
    user_agent_prefix: Option<String>,
}

impl GhostConfig {
    /// Creates a new builder for constructing a `GhostConfig`.
    #[must_use]
    pub fn builder() -> GhostConfigBuilder {
        GhostConfigBuilder::new()
    }

    /// Returns the site URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the Content API key.
    #[must_use]
    pub const fn api_key(&self) -> &ContentApiKey {
        &self.api_key
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the exception level new clients start with.
    #[must_use]
    pub const fn exception_level(&self) -> ExceptionLevel {
        self.exception_level
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify GhostConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GhostConfig>();
};

/// Builder for constructing [`GhostConfig`] instances.
///
/// Required fields are `host` and `api_key`.
///
/// # Defaults
///
/// - `api_version`: Latest stable version
/// - `exception_level`: [`ExceptionLevel::All`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct GhostConfigBuilder {
    host: Option<HostUrl>,
    api_key: Option<ContentApiKey>,
    api_version: Option<ApiVersion>,
    exception_level: Option<ExceptionLevel>,
    user_agent_prefix: Option<String>,
}

impl GhostConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the site URL (required).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the Content API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ContentApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets which failures are returned as errors and which are suppressed.
    #[must_use]
    pub const fn exception_level(mut self, level: ExceptionLevel) -> Self {
        self.exception_level = Some(level);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`GhostConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host` or `api_key`
    /// are not set.
    pub fn build(self) -> Result<GhostConfig, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(GhostConfig {
            host,
            api_key,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            exception_level: self.exception_level.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
