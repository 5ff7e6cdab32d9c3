//! Site settings.
//!
//! Settings are a single object rather than a collection, so they do not
//! implement [`ContentResource`](crate::content::ContentResource).

use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpRequest};
use crate::content::{map_object, GhostError};

/// A navigation entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NavigationItem {
    /// The link text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The link target, absolute or site-relative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Public settings of a Ghost site.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// Site title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Site description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Accent color as a hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,

    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// Facebook page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    /// Twitter handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    /// Publication language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Locale, on newer Ghost versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// IANA timezone name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Code injected into every page head.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codeinjection_head: Option<String>,

    /// Code injected into every page foot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codeinjection_foot: Option<String>,

    /// Primary navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Vec<NavigationItem>>,

    /// Secondary navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_navigation: Option<Vec<NavigationItem>>,

    /// SEO title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    /// SEO description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

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

    /// Support address shown to members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_support_address: Option<String>,

    /// The site URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Settings {
    /// The settings endpoint, relative to the Content API base path.
    pub const PATH: &'static str = "settings";

    /// Fetches the site settings.
    ///
    /// # Errors
    ///
    /// Returns [`GhostError`] if Ghost reports an error, the request fails,
    /// or the payload cannot be mapped.
    pub async fn fetch(client: &HttpClient) -> Result<Self, GhostError> {
        let request = HttpRequest::builder(Self::PATH)
            .build()
            .map_err(crate::clients::HttpError::from)?;
        let response = client.request(request).await?;
        map_object(response, "settings")
    }
}
