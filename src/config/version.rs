//! Ghost Content API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for choosing which versioned
//! Content API path the client talks to.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Ghost Content API version.
///
/// The version is embedded in every request path:
/// `/ghost/api/{version}/content/`.
///
/// # Example
///
/// ```rust
/// use ghost_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert!(version.is_stable());
///
/// let version: ApiVersion = "v3".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3);
///
/// assert_eq!(format!("{}", ApiVersion::V3), "v3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Content API v2 (Ghost 2.x).
    V2,
    /// Content API v3 (Ghost 3.x).
    V3,
    /// Content API v4 (Ghost 4.x).
    V4,
    /// The moving `canary` API, tracking the newest unreleased changes.
    Canary,
    /// Custom `vN` version string for versions not listed above.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V4
    }

    /// Returns `true` if this is a known stable API version.
    ///
    /// Returns `false` for `Canary` and `Custom` variants.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Canary | Self::Custom(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        s.strip_prefix('v').is_some_and(|number| {
            !number.is_empty() && number.chars().all(|c| c.is_ascii_digit())
        })
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
            Self::V4 => "v4",
            Self::Canary => "canary",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v2" => Ok(Self::V2),
            "v3" => Ok(Self::V3),
            "v4" => Ok(Self::V4),
            "canary" => Ok(Self::Canary),
            _ => {
                if Self::is_valid_version_format(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}
