//! Integration tests for the Content API client.
//!
//! These tests run [`GhostClient`] against a local mock server and verify
//! request shape, response mapping, and the exception policy.

use ghost_api::content::resources::{
    AuthorField, AuthorQueryParams, PageQueryParams, PostFormat, PostQueryParams, TagQueryParams,
};
use ghost_api::content::{FailureCause, OrderDirection, PageLimit};
use ghost_api::{ExceptionLevel, FailureKind, GhostClient};
use serde_json::{json, Value};
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "22444f78447824223cefc48062";
const BASE: &str = "/ghost/api/v4/content";

// ============================================================================
// Helpers
// ============================================================================

async fn setup(level: ExceptionLevel) -> (MockServer, GhostClient) {
    let server = MockServer::start().await;
    let mut client = GhostClient::new(&server.uri(), API_KEY).unwrap();
    client.set_exception_level(level);
    (server, client)
}

async fn mount(server: &MockServer, resource_path: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/{resource_path}")))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

fn not_found(message: &str) -> Value {
    json!({
        "errors": [{
            "message": message,
            "context": null,
            "type": "NotFoundError",
            "details": null,
            "property": null,
            "help": null,
            "code": null,
            "id": "3f4e5a70-0c1a-11ec-9a03-0242ac130003"
        }]
    })
}

fn unknown_key() -> Value {
    json!({
        "errors": [{
            "message": "Unknown Content API Key",
            "context": null,
            "type": "UnauthorizedError"
        }]
    })
}

fn pagination(total: u32, limit: Value) -> Value {
    json!({
        "pagination": {
            "page": 1,
            "limit": limit,
            "pages": 1,
            "total": total,
            "next": null,
            "prev": null
        }
    })
}

// ============================================================================
// Authors
// ============================================================================

#[tokio::test]
async fn test_get_author_by_id_maps_first_item() {
    let (server, client) = setup(ExceptionLevel::All).await;
    mount(
        &server,
        "authors/5951f5fca366002ebd5dbef7/",
        200,
        json!({
            "authors": [{
                "id": "5951f5fca366002ebd5dbef7",
                "name": "Ghost",
                "slug": "ghost",
                "url": "https://demo.ghost.io/author/ghost/"
            }]
        }),
    )
    .await;

    let author = assert_ok!(
        client
            .get_author_by_id("5951f5fca366002ebd5dbef7", None)
            .await
    )
    .unwrap();

    assert_eq!(author.name.as_deref(), Some("Ghost"));
    assert_eq!(author.slug.as_deref(), Some("ghost"));
}

#[tokio::test]
async fn test_missing_author_returns_error_under_all_and_ghost() {
    for level in [ExceptionLevel::All, ExceptionLevel::Ghost] {
        let (server, client) = setup(level).await;
        mount(&server, "authors/slug/nobody/", 404, not_found("Author not found.")).await;

        let error = client
            .get_author_by_slug("nobody", None)
            .await
            .unwrap_err();

        assert_eq!(error.message, "Author not found.", "level {level}");
        assert_eq!(error.kind(), FailureKind::Ghost);
        assert_eq!(error.errors[0].error_type.as_deref(), Some("NotFoundError"));
        assert!(client.last_error().is_none());
    }
}

#[tokio::test]
async fn test_missing_author_is_suppressed_under_none_and_non_ghost() {
    for level in [ExceptionLevel::None, ExceptionLevel::NonGhost] {
        let (server, client) = setup(level).await;
        mount(&server, "authors/nope/", 404, not_found("Author not found.")).await;

        let result = client.get_author_by_id("nope", None).await;

        assert!(matches!(result, Ok(None)), "level {level}");
        let last = client.last_error().unwrap();
        assert_eq!(last.message, "Author not found.");
    }
}

#[tokio::test]
async fn test_invalid_key_on_collection_returns_errors() {
    for level in [ExceptionLevel::All, ExceptionLevel::Ghost] {
        let (server, client) = setup(level).await;
        mount(&server, "authors/", 401, unknown_key()).await;

        let error = client.get_authors(None).await.unwrap_err();

        assert!(!error.errors.is_empty());
        assert_eq!(error.errors[0].message, "Unknown Content API Key");
        assert_eq!(
            error.message,
            "The Ghost API returned 1 error(s). See `errors` for details."
        );
    }
}

#[tokio::test]
async fn test_invalid_key_on_collection_is_suppressed() {
    for level in [ExceptionLevel::None, ExceptionLevel::NonGhost] {
        let (server, client) = setup(level).await;
        mount(&server, "authors/", 401, unknown_key()).await;

        assert!(client.get_authors(None).await.unwrap().is_none());
        assert!(client.last_error().is_some(), "level {level}");
    }
}

#[tokio::test]
async fn test_errors_array_wins_over_success_status() {
    let (server, client) = setup(ExceptionLevel::All).await;
    mount(&server, "tags/", 200, unknown_key()).await;

    let error = client.get_tags(None).await.unwrap_err();
    assert_eq!(error.kind(), FailureKind::Ghost);
}

#[tokio::test]
async fn test_limit_one_with_id_field_still_returns_url() {
    let (server, client) = setup(ExceptionLevel::All).await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/authors/")))
        .and(query_param("key", API_KEY))
        .and(query_param("fields", "id"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authors": [{
                "id": "5951f5fca366002ebd5dbef7",
                "url": "https://demo.ghost.io/author/ghost/"
            }],
            "meta": pagination(3, json!(1))
        })))
        .mount(&server)
        .await;

    let params = AuthorQueryParams {
        fields: [AuthorField::Id].into_iter().collect(),
        limit: Some(1),
        ..Default::default()
    };
    let authors = client.get_authors(Some(params)).await.unwrap().unwrap();

    assert_eq!(authors.len(), 1);
    let author = &authors[0];
    assert!(author.id.is_some());
    assert!(author.url.is_some());
    assert!(author.name.is_none());
    assert!(author.slug.is_none());
    assert!(author.bio.is_none());
    assert_eq!(authors.total(), Some(3));
    assert_eq!(
        authors.pagination().and_then(|p| p.limit),
        Some(PageLimit::Count(1))
    );
}

#[tokio::test]
async fn test_authors_ordering_and_post_count_are_sent() {
    let (server, client) = setup(ExceptionLevel::All).await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/authors/")))
        .and(query_param("include", "count.posts"))
        .and(query_param("order", "name asc,slug desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authors": [
                {"id": "1", "name": "Alpha", "count": {"posts": 4}},
                {"id": "2", "name": "Beta", "count": {"posts": 1}}
            ],
            "meta": pagination(2, json!(15))
        })))
        .mount(&server)
        .await;

    let params = AuthorQueryParams {
        include_post_count: true,
        order: vec![
            (AuthorField::Name, OrderDirection::Asc),
            (AuthorField::Slug, OrderDirection::Desc),
        ],
        ..Default::default()
    };
    let authors = client.get_authors(Some(params)).await.unwrap().unwrap();

    let counts: Vec<_> = authors
        .iter()
        .map(|a| a.count.and_then(|c| c.posts))
        .collect();
    assert_eq!(counts, vec![Some(4), Some(1)]);
    assert!(!authors.has_next_page());
}

#[tokio::test]
async fn test_repeated_calls_yield_identical_results() {
    let (server, client) = setup(ExceptionLevel::All).await;
    mount(
        &server,
        "authors/",
        200,
        json!({
            "authors": [{"id": "1", "slug": "ghost"}],
            "meta": pagination(1, json!(15))
        }),
    )
    .await;

    let first = client.get_authors(None).await.unwrap();
    let second = client.get_authors(None).await.unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Non-Ghost failures
// ============================================================================

#[tokio::test]
async fn test_non_json_server_error_is_other_failure() {
    let (server, client) = setup(ExceptionLevel::All).await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/posts/")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let error = client.get_posts(None).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::Other);
    assert!(error.errors.is_empty());
    match error.cause {
        Some(FailureCause::UnexpectedStatus { code, ref body }) => {
            assert_eq!(code, 502);
            assert!(body.contains("Bad Gateway"));
        }
        ref other => panic!("unexpected cause: {other:?}"),
    }
}

#[tokio::test]
async fn test_other_failure_is_suppressed_under_ghost_level() {
    let (server, client) = setup(ExceptionLevel::Ghost).await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/posts/")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(client.get_posts(None).await.unwrap().is_none());
    assert_eq!(client.last_error().unwrap().kind(), FailureKind::Other);
}

#[tokio::test]
async fn test_empty_single_result_is_other_failure() {
    let (server, client) = setup(ExceptionLevel::All).await;
    mount(&server, "tags/slug/ghost-tag/", 200, json!({"tags": []})).await;

    let error = client.get_tag_by_slug("ghost-tag", None).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::Other);
    assert!(matches!(
        error.cause,
        Some(FailureCause::Empty { resource: "Tag" })
    ));
}

#[tokio::test]
async fn test_missing_response_key_is_other_failure() {
    let (server, client) = setup(ExceptionLevel::All).await;
    mount(&server, "tags/", 200, json!({"meta": {}})).await;

    let error = client.get_tags(None).await.unwrap_err();

    assert!(matches!(
        error.cause,
        Some(FailureCause::MissingKey { ref key }) if key == "tags"
    ));
}

#[tokio::test]
async fn test_network_failure_is_other_failure() {
    // Nothing listens on a port once its listener is dropped
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut client = GhostClient::new(&format!("http://127.0.0.1:{port}"), API_KEY).unwrap();
    assert!(matches!(
        client.get_settings().await,
        Err(ref e) if e.kind() == FailureKind::Other
    ));

    client.set_exception_level(ExceptionLevel::Ghost);
    assert!(client.get_settings().await.unwrap().is_none());
    assert!(matches!(
        client.last_error().unwrap().cause,
        Some(FailureCause::Http(_))
    ));
}

#[tokio::test]
async fn test_truncated_body_is_other_failure() {
    use std::io::{Read, Write};

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    // Promises 100 bytes, sends a fragment, then hangs up
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\nContent-Type: application/json\r\n\r\n{\"tags\"",
            )
            .unwrap();
        stream.flush().unwrap();
    });

    let client = GhostClient::new(&format!("http://127.0.0.1:{port}"), API_KEY).unwrap();
    let error = client.get_tags(None).await.unwrap_err();
    server.join().unwrap();

    assert_eq!(error.kind(), FailureKind::Other);
    assert!(matches!(error.cause, Some(FailureCause::Http(_))));
}

#[tokio::test]
async fn test_blank_id_is_rejected_instead_of_browsing() {
    let (server, mut client) = setup(ExceptionLevel::All).await;
    mount(
        &server,
        "authors/",
        200,
        json!({
            "authors": [{"id": "someone-else", "name": "Someone Else"}],
            "meta": pagination(1, json!(15))
        }),
    )
    .await;

    for id in ["", "  "] {
        let error = client.get_author_by_id(id, None).await.unwrap_err();
        assert_eq!(error.kind(), FailureKind::Other);
        assert!(matches!(
            error.cause,
            Some(FailureCause::EmptyIdentifier {
                resource: "Author",
                ..
            })
        ));
    }

    client.set_exception_level(ExceptionLevel::Ghost);
    assert!(client.get_author_by_id("", None).await.unwrap().is_none());
    assert_eq!(client.last_error().unwrap().kind(), FailureKind::Other);
    assert!(client.get_tag_by_slug("", None).await.unwrap().is_none());

    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Tags, posts, pages, settings
// ============================================================================

#[tokio::test]
async fn test_get_tags_with_no_limit() {
    let (server, client) = setup(ExceptionLevel::All).await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/tags/")))
        .and(query_param("limit", "all"))
        .and(query_param("filter", "visibility:public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tags": [
                {"id": "1", "slug": "news"},
                {"id": "2", "slug": "tech"},
                {"id": "3", "slug": "life"}
            ],
            "meta": pagination(3, json!("all"))
        })))
        .mount(&server)
        .await;

    let params = TagQueryParams {
        filter: Some("visibility:public".to_string()),
        limit: Some(2),
        no_limit: true,
        ..Default::default()
    };
    let tags = client.get_tags(Some(params)).await.unwrap().unwrap();

    assert_eq!(tags.len(), 3);
    assert_eq!(
        tags.pagination().and_then(|p| p.limit),
        Some(PageLimit::All)
    );
}

#[tokio::test]
async fn test_get_posts_with_relations_and_formats() {
    let (server, client) = setup(ExceptionLevel::All).await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/posts/")))
        .and(query_param("include", "authors,tags"))
        .and(query_param("formats", "html,plaintext"))
        .and(query_param("page", "2"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [{
                "id": "5ddc9141c35e7700383b2937",
                "title": "Welcome",
                "html": "<p>Hi</p>",
                "plaintext": "Hi",
                "published_at": "2019-11-26T02:44:17.000+00:00",
                "authors": [{"id": "1", "slug": "ghost"}],
                "tags": [{"id": "2", "slug": "getting-started"}],
                "primary_author": {"id": "1", "slug": "ghost"},
                "primary_tag": {"id": "2", "slug": "getting-started"}
            }],
            "meta": {
                "pagination": {"page": 2, "limit": 1, "pages": 3, "total": 3, "next": 3, "prev": 1}
            }
        })))
        .mount(&server)
        .await;

    let params = PostQueryParams {
        include_authors: true,
        include_tags: true,
        formats: [PostFormat::Plaintext, PostFormat::Html].into_iter().collect(),
        page: Some(2),
        ..Default::default()
    };
    let posts = client.get_posts(Some(params)).await.unwrap().unwrap();

    let post = &posts[0];
    assert_eq!(post.plaintext.as_deref(), Some("Hi"));
    assert_eq!(post.tags.as_ref().map(Vec::len), Some(1));
    assert_eq!(
        post.primary_author.as_ref().and_then(|a| a.slug.as_deref()),
        Some("ghost")
    );
    assert_eq!(posts.page(), Some(2));
    assert_eq!(posts.next_page(), Some(3));
    assert!(posts.has_prev_page());
}

#[tokio::test]
async fn test_get_post_by_slug_not_found_message() {
    let (server, client) = setup(ExceptionLevel::All).await;
    mount(&server, "posts/slug/missing/", 404, not_found("Post not found.")).await;

    let error = client.get_post_by_slug("missing", None).await.unwrap_err();
    assert_eq!(error.to_string(), "Post not found.");
}

#[tokio::test]
async fn test_get_page_by_slug_uses_pages_endpoint() {
    let (server, client) = setup(ExceptionLevel::All).await;
    mount(
        &server,
        "pages/slug/about/",
        200,
        json!({"pages": [{"id": "6", "title": "About", "slug": "about"}]}),
    )
    .await;

    let page = client
        .get_page_by_slug("about", Some(PageQueryParams::default()))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(page.title.as_deref(), Some("About"));
}

#[tokio::test]
async fn test_get_settings() {
    let (server, client) = setup(ExceptionLevel::All).await;
    mount(
        &server,
        "settings/",
        200,
        json!({
            "settings": {
                "title": "Ghost",
                "description": "The professional publishing platform",
                "navigation": [{"label": "Home", "url": "/"}],
                "url": "https://demo.ghost.io/"
            },
            "meta": {}
        }),
    )
    .await;

    let settings = client.get_settings().await.unwrap().unwrap();

    assert_eq!(settings.title.as_deref(), Some("Ghost"));
    assert_eq!(settings.navigation.unwrap()[0].label.as_deref(), Some("Home"));
}

#[tokio::test]
async fn test_settings_invalid_key_uses_summary_message() {
    let (server, client) = setup(ExceptionLevel::All).await;
    mount(&server, "settings/", 401, unknown_key()).await;

    let error = client.get_settings().await.unwrap_err();
    assert_eq!(error.errors[0].message, "Unknown Content API Key");
    assert_ne!(error.message, "Unknown Content API Key");
}
