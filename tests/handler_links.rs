mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_link_generates_code() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://google.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    let code = json["code"].as_str().unwrap();
    assert!((6..=8).contains(&code.len()));
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["target_url"], "https://google.com");
    assert_eq!(json["short_url"], format!("{}/{}", common::BASE_URL, code));
    assert_eq!(json["total_clicks"], 0);
    assert_eq!(json["creation_count"], 1);
    assert!(json["last_clicked"].is_null());
}

#[tokio::test]
async fn test_create_same_url_returns_existing_code() {
    let (server, _) = common::create_test_server();

    let first = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://google.com" }))
        .await
        .json::<Value>();

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://google.com" }))
        .await;

    response.assert_status_ok();

    let second = response.json::<Value>();
    assert_eq!(second["code"], first["code"]);
    assert_eq!(second["creation_count"], 2);
}

#[tokio::test]
async fn test_create_with_custom_code_conflict() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://x.com", "custom_code": "abcdef" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["code"], "abcdef");

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://x.com", "custom_code": "abcdef" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"]["code"], "code_conflict");
}

#[tokio::test]
async fn test_create_invalid_url() {
    let (server, _) = common::create_test_server();

    for body in [
        json!({ "target_url": "not-a-url" }),
        json!({ "target_url": "not-a-url", "custom_code": "abcdef" }),
        json!({ "target_url": "not-a-url", "custom_code": "ab-cd1" }),
        json!({ "target_url": "ftp://example.com" }),
    ] {
        let response = server.post("/api/links").json(&body).await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["error"]["code"], "invalid_url");
    }
}

#[tokio::test]
async fn test_create_invalid_custom_code() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://x.com", "custom_code": "abc" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "invalid_code");

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://x.com", "custom_code": "abc-123" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "invalid_code");
}

#[tokio::test]
async fn test_create_empty_url_fails_validation() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_get_link() {
    let (server, _) = common::create_test_server();

    server
        .post("/api/links")
        .json(&json!({ "target_url": "https://example.com", "custom_code": "show12" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/api/links/show12").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["code"], "show12");
    assert_eq!(json["total_clicks"], 0);
}

#[tokio::test]
async fn test_get_link_not_found() {
    let (server, _) = common::create_test_server();

    let response = server.get("/api/links/nope12").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_list_links_newest_first() {
    let (server, _) = common::create_test_server();

    for (code, url) in [
        ("first1", "https://a.com"),
        ("second", "https://b.com"),
        ("third1", "https://c.com"),
    ] {
        server
            .post("/api/links")
            .json(&json!({ "target_url": url, "custom_code": code }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["total"], 3);

    let codes: Vec<&str> = json["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["third1", "second", "first1"]);
}

#[tokio::test]
async fn test_delete_link_then_reuse_code() {
    let (server, _) = common::create_test_server();

    server
        .post("/api/links")
        .json(&json!({ "target_url": "https://old.com", "custom_code": "reuse1" }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete("/api/links/reuse1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server.get("/api/links/reuse1").await.assert_status_not_found();
    server.get("/reuse1").await.assert_status_not_found();
    server
        .delete("/api/links/reuse1")
        .await
        .assert_status_not_found();

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://new.com", "custom_code": "reuse1" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["target_url"], "https://new.com");
}
