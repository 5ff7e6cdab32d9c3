//! Integration tests for query-string encoding.
//!
//! These tests exercise the public parameter objects and encoding helpers
//! for every resource's field set.

use std::collections::BTreeSet;

use ghost_api::clients::HttpRequest;
use ghost_api::content::resources::{
    AuthorField, AuthorQueryParams, PostField, PostFormat, PostQueryParams, TagField,
    TagQueryParams,
};
use ghost_api::content::{
    encode_fields, encode_order, parse_fields, FieldName, OrderDirection, QueryParameters,
};
use ghost_api::{ContentApiKey, GhostConfig, HostUrl, HttpClient};

fn assert_round_trip<F: FieldName>() {
    // Forward, reversed, and every-other insertion orders
    let forward: BTreeSet<F> = F::ALL.iter().copied().collect();
    let reversed: BTreeSet<F> = F::ALL.iter().rev().copied().collect();
    let sparse: BTreeSet<F> = F::ALL.iter().rev().step_by(2).copied().collect();

    for fields in [forward, reversed, sparse] {
        let encoded = encode_fields(&fields).unwrap();
        assert_eq!(parse_fields::<F>(&encoded), fields, "{encoded}");
    }
}

#[test]
fn test_field_selections_round_trip_for_every_resource() {
    assert_round_trip::<AuthorField>();
    assert_round_trip::<TagField>();
    assert_round_trip::<PostField>();
    assert_round_trip::<PostFormat>();
}

#[test]
fn test_insertion_order_does_not_change_encoding() {
    let a: BTreeSet<_> = [PostField::Url, PostField::Title, PostField::Id]
        .into_iter()
        .collect();
    let b: BTreeSet<_> = [PostField::Id, PostField::Url, PostField::Title]
        .into_iter()
        .collect();

    assert_eq!(encode_fields(&a), encode_fields(&b));
    assert_eq!(encode_fields(&a).as_deref(), Some("id,title,url"));
}

#[test]
fn test_order_preserves_caller_sequence() {
    let order = vec![
        (TagField::Slug, OrderDirection::Desc),
        (TagField::Name, OrderDirection::Asc),
        (TagField::Id, OrderDirection::Desc),
    ];

    assert_eq!(
        encode_order(&order).as_deref(),
        Some("slug desc,name asc,id desc")
    );
}

#[test]
fn test_empty_order_is_not_emitted() {
    let params = TagQueryParams {
        limit: Some(10),
        ..Default::default()
    };

    assert!(params.to_query_pairs().iter().all(|(name, _)| name != "order"));
}

#[test]
fn test_no_limit_always_yields_limit_all() {
    for limit in [None, Some(0), Some(1), Some(100)] {
        let params = AuthorQueryParams {
            limit,
            no_limit: true,
            ..Default::default()
        };

        let limits: Vec<_> = params
            .to_query_pairs()
            .into_iter()
            .filter(|(name, _)| name == "limit")
            .map(|(_, value)| value)
            .collect();
        assert_eq!(limits, vec!["all".to_string()], "limit {limit:?}");
    }
}

#[test]
fn test_zero_limit_and_page_are_omitted() {
    let params = AuthorQueryParams {
        limit: Some(0),
        page: Some(0),
        filter: Some("   ".to_string()),
        ..Default::default()
    };

    assert_eq!(params.to_query_string(), "");
}

#[test]
fn test_post_query_string_is_percent_encoded() {
    let params = PostQueryParams {
        include_tags: true,
        fields: [PostField::Slug, PostField::Title].into_iter().collect(),
        filter: Some("tag:[news,tech]+featured:true".to_string()),
        order: vec![(PostField::PublishedAt, OrderDirection::Desc)],
        ..Default::default()
    };

    assert_eq!(
        params.to_query_string(),
        "include=tags&fields=title%2Cslug&filter=tag%3A%5Bnews%2Ctech%5D%2Bfeatured%3Atrue&order=published_at%20desc"
    );
}

#[test]
fn test_endpoint_url_puts_key_first() {
    let config = GhostConfig::builder()
        .host(HostUrl::new("https://demo.ghost.io/").unwrap())
        .api_key(ContentApiKey::new("22444f78447824223cefc48062").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(&config);

    let params = TagQueryParams {
        no_limit: true,
        ..Default::default()
    };
    let request = HttpRequest::builder("tags")
        .query(params.to_query_pairs())
        .build()
        .unwrap();

    assert_eq!(
        client.endpoint_url(&request),
        "https://demo.ghost.io/ghost/api/v4/content/tags/?key=22444f78447824223cefc48062&limit=all"
    );
}
