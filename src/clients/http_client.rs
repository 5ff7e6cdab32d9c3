//! HTTP client for Ghost Content API communication.
//!
//! This module provides the [`HttpClient`] type for sending keyed GET requests
//! to the versioned Content API of a Ghost site.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiVersion, ContentApiKey, GhostConfig};
use crate::content::render_query;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Content API.
///
/// The client handles:
/// - URL construction: `{host}/ghost/api/{version}/content/{path}?key={key}&{query}`
/// - Default headers including User-Agent
/// - Lenient body parsing (non-JSON bodies are wrapped, never rejected)
///
/// Every response is returned regardless of status. There is no retry.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ghost_api::{GhostConfig, ContentApiKey, HostUrl};
/// use ghost_api::clients::{HttpClient, HttpRequest};
///
/// let config = GhostConfig::builder()
///     .host(HostUrl::new("https://demo.ghost.io").unwrap())
///     .api_key(ContentApiKey::new("22444f78447824223cefc48062").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let request = HttpRequest::builder("tags").build().unwrap();
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://demo.ghost.io`).
    base_uri: String,
    /// Base path (e.g., "/ghost/api/v4/content").
    base_path: String,
    /// Content API key sent as the `key` query parameter.
    api_key: ContentApiKey,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client using the API version from the configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &GhostConfig) -> Self {
        Self::with_version(config, config.api_version())
    }

    /// Creates a new HTTP client for a specific API version.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn with_version(config: &GhostConfig, version: &ApiVersion) -> Self {
        let base_uri = config.host().as_ref().to_string();
        let base_path = format!("/ghost/api/{version}/content");

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Ghost Content API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path,
            api_key: config.api_key().clone(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for a request, with the API key first in the
    /// query string.
    #[must_use]
    pub fn endpoint_url(&self, request: &HttpRequest) -> String {
        let key = urlencoding::encode(self.api_key.as_ref());
        let mut url = format!(
            "{}{}/{}?key={key}",
            self.base_uri, self.base_path, request.path
        );

        let query = render_query(&request.query);
        if !query.is_empty() {
            url.push('&');
            url.push_str(&query);
        }
        url
    }

    /// Sends a GET request to the Content API.
    ///
    /// Any HTTP status is returned as `Ok`; deciding what a 4xx or 5xx means
    /// is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs or the body cannot be read (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.endpoint_url(&request);

        tracing::debug!(
            path = %request.path,
            params = request.query.len(),
            "Sending Content API request to {}{}/{}",
            self.base_uri,
            self.base_path,
            request.path
        );

        let mut req_builder = self.client.get(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        tracing::debug!(
            status = code,
            "Content API responded for {}",
            request.path
        );

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostUrl;

    fn create_test_config() -> GhostConfig {
        GhostConfig::builder()
            .host(HostUrl::new("https://demo.ghost.io/").unwrap())
            .api_key(ContentApiKey::new("22444f78447824223cefc48062").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_from_config() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(client.base_uri(), "https://demo.ghost.io");
        assert_eq!(client.base_path(), "/ghost/api/v4/content");
    }

    #[test]
    fn test_client_with_version_override() {
        let client = HttpClient::with_version(&create_test_config(), &ApiVersion::V2);
        assert_eq!(client.base_path(), "/ghost/api/v2/content");

        let client = HttpClient::with_version(&create_test_config(), &ApiVersion::Canary);
        assert_eq!(client.base_path(), "/ghost/api/canary/content");
    }

    #[test]
    fn test_endpoint_url_puts_key_first() {
        let client = HttpClient::new(&create_test_config());
        let request = HttpRequest::builder("authors")
            .query_param("limit", "all")
            .query_param("order", "name asc")
            .build()
            .unwrap();

        assert_eq!(
            client.endpoint_url(&request),
            "https://demo.ghost.io/ghost/api/v4/content/authors/?key=22444f78447824223cefc48062&limit=all&order=name%20asc"
        );
    }

    #[test]
    fn test_endpoint_url_without_query() {
        let client = HttpClient::new(&create_test_config());
        let request = HttpRequest::builder("settings").build().unwrap();

        assert_eq!(
            client.endpoint_url(&request),
            "https://demo.ghost.io/ghost/api/v4/content/settings/?key=22444f78447824223cefc48062"
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Ghost Content API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = GhostConfig::builder()
            .host(HostUrl::new("https://demo.ghost.io").unwrap())
            .api_key(ContentApiKey::new("key").unwrap())
            .user_agent_prefix("MyBlogReader/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyBlogReader/1.0 | "));
        assert!(user_agent.contains("Ghost Content API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_debug_output_masks_key() {
        let client = HttpClient::new(&create_test_config());
        let debug_str = format!("{client:?}");
        assert!(!debug_str.contains("22444f78447824223cefc48062"));
    }
}
