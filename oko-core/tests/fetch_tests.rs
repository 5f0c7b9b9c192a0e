use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use oko_core::{fetch_feed, Config, FeedError};

fn sample_payload() -> String {
    r#"{
  "data": {
    "nodes": [
      {
        "id": "42",
        "title": "Test",
        "publish_at": "2023-05-01T10:00:00",
        "seo_fields": { "slug": "test-article" },
        "featured_image": { "original_url": "/img.jpg" }
      }
    ]
  }
}"#
    .to_string()
}

fn config_for(server: &MockServer) -> Config {
    Config {
        url: format!("{}/api/articles", server.uri()),
        thumbnail_compression: "https://proxy/".to_string(),
        interval: 5,
    }
}

#[tokio::test]
async fn fetch_feed_renders_upstream_articles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(sample_payload()),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let payload = fetch_feed(&client, &config_for(&server)).await.expect("fetch");

    assert!(payload.starts_with("<!-- Last updated: "));
    assert!(payload.contains("<title>Test</title>"));
    assert!(payload.contains("<link>https://oko.press/test-article</link>"));
    assert!(payload.contains(r#"<guid isPermaLink="false">42</guid>"#));
    assert!(payload.contains("<pubDate>01 May 2023 10:00 +0000</pubDate>"));
    assert!(payload.contains(r#"url="https://proxy//img.jpg""#));
}

#[tokio::test]
async fn fetch_feed_fails_on_bad_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let err = fetch_feed(&client, &config_for(&server)).await.unwrap_err();
    assert!(matches!(err, FeedError::BadStatus { status, .. } if status.as_u16() == 503));
}

#[tokio::test]
async fn fetch_feed_fails_on_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("{\"data\": {\"nodes\": \"not-a-list\"}}"),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let err = fetch_feed(&client, &config_for(&server)).await.unwrap_err();
    assert!(matches!(err, FeedError::Decode(_)));
}

#[tokio::test]
async fn fetch_feed_fails_on_unparseable_timestamp() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(sample_payload().replace("2023-05-01T10:00:00", "yesterday")),
        )
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let err = fetch_feed(&client, &config_for(&server)).await.unwrap_err();
    assert!(matches!(err, FeedError::TimestampParse { .. }));
}
