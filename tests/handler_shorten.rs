mod common;

use serde_json::json;
use std::sync::Arc;

use snaplink::domain::repositories::ShortLinkRepository;
use snaplink::state::AppSettings;

#[tokio::test]
async fn test_shorten_success() {
    let (state, repository) = common::create_default_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "longUrl": "https://example.com/a" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["longUrl"], "https://example.com/a");
    assert_eq!(
        json["shortUrlRendered"],
        format!("{}/s/{}", common::BASE_URL, code)
    );

    let stored = repository.lookup(code).await.unwrap().unwrap();
    assert_eq!(stored.long_url, "https://example.com/a");
}

#[tokio::test]
async fn test_shorten_stores_url_verbatim() {
    let (state, repository) = common::create_default_state();
    let server = common::create_test_server(state);

    let long_url = "HTTPS://Example.COM:443/Path/../x?b=2&a=1#Frag";
    let response = server
        .post("/api/shorten")
        .json(&json!({ "longUrl": long_url }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["longUrl"], long_url);

    let stored = repository
        .lookup(json["code"].as_str().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.long_url, long_url);
}

#[tokio::test]
async fn test_shorten_rejects_invalid_urls() {
    let (state, repository) = common::create_default_state();
    let server = common::create_test_server(state);

    for long_url in [
        "",
        "not-a-url",
        "javascript:alert(1)",
        "ftp://example.com/file",
        " https://example.com",
    ] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "longUrl": long_url }))
            .await;

        assert_eq!(response.status_code(), 400, "{long_url:?}");
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    assert!(repository.is_empty());
}

#[tokio::test]
async fn test_shorten_retries_collisions() {
    let generator = common::ScriptedCodeGenerator::new(&["taken01", "taken01", "fresh02"]);
    let (state, repository) = common::create_test_state(Arc::new(generator), common::test_settings());
    common::insert_link(&repository, "taken01", "https://example.com/first").await;
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "longUrl": "https://example.com/second" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "fresh02");
}

#[tokio::test]
async fn test_shorten_exhaustion_returns_server_error() {
    let generator = common::ScriptedCodeGenerator::new(&["taken01"]);
    let settings = AppSettings {
        max_attempts: 3,
        ..common::test_settings()
    };
    let (state, repository) = common::create_test_state(Arc::new(generator), settings);
    common::insert_link(&repository, "taken01", "https://example.com/first").await;
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "longUrl": "https://example.com/second" }))
        .await;

    assert_eq!(response.status_code(), 500);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn test_shorten_store_unavailable() {
    let server = common::create_unavailable_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "longUrl": "https://example.com/a" }))
        .await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "service_unavailable");
    assert!(!json.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_shorten_trailing_slash_in_base_url() {
    let settings = AppSettings {
        base_url: "https://s.example.com/".to_string(),
        ..common::test_settings()
    };
    let generator = common::ScriptedCodeGenerator::new(&["Xk9pQ2w"]);
    let (state, _) = common::create_test_state(Arc::new(generator), settings);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "longUrl": "https://example.com/a" }))
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortUrlRendered"], "https://s.example.com/s/Xk9pQ2w");
}
