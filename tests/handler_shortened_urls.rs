mod common;

use std::collections::HashMap;

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use urlmap::api::routes::api_routes;
use urlmap::domain::entry::Entry;
use urlmap::state::AppState;

fn api_server(state: AppState) -> TestServer {
    let app = Router::new().nest("/api/v1", api_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

fn is_lowercase_hex(id: &str) -> bool {
    id.chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

// ── GET (single and list) ───────────────────────────────────────────────

#[tokio::test]
async fn test_get_existing_entry() {
    let server = api_server(common::create_test_state());

    let response = server.get("/api/v1/shortened_urls/nw").await;

    response.assert_status_ok();
    let entry: Entry = response.json();
    assert_eq!(entry.id, "nw");
    assert_eq!(entry.url, "https://nightwind.me");
}

#[tokio::test]
async fn test_get_missing_entry() {
    let server = api_server(common::create_test_state());

    let response = server.get("/api/v1/shortened_urls/missing").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_list_returns_mapping_keyed_by_id() {
    let state = common::create_test_state();
    state.url_service.upsert("ab12", "https://example.com");
    let server = api_server(state);

    let response = server.get("/api/v1/shortened_urls").await;

    response.assert_status_ok();
    let mapping: HashMap<String, Entry> = response.json();
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping["nw"], Entry::new("nw", "https://nightwind.me"));
    assert_eq!(mapping["ab12"], Entry::new("ab12", "https://example.com"));
}

// ── POST (create) ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_without_id_allocates_hex_id() {
    let server = api_server(common::create_test_state());

    let response = server
        .post("/api/v1/shortened_urls")
        .form(&[("url", "https://example.com")])
        .await;

    assert_eq!(response.status_code(), 201);
    let entry: Entry = response.json();
    assert_eq!(entry.id.len(), 4);
    assert!(is_lowercase_hex(&entry.id));
    assert_eq!(entry.url, "https://example.com");
}

#[tokio::test]
async fn test_create_accepts_json_body() {
    let state = common::create_test_state();
    let server = api_server(state.clone());

    let response = server
        .post("/api/v1/shortened_urls")
        .json(&json!({ "id": "docs", "url": "https://docs.example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let entry: Entry = response.json();
    assert_eq!(entry, Entry::new("docs", "https://docs.example.com"));
    assert_eq!(state.url_service.get("docs").unwrap(), entry);
}

#[tokio::test]
async fn test_create_with_taken_id_names_it() {
    let server = api_server(common::create_test_state());

    let response = server
        .post("/api/v1/shortened_urls")
        .form(&[("id", "nw"), ("url", "https://example.com")])
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("'nw' is not available."));
}

#[tokio::test]
async fn test_create_without_url_is_rejected() {
    let server = api_server(common::create_test_state());

    let response = server
        .post("/api/v1/shortened_urls")
        .form(&[("id", "fresh")])
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_with_empty_url_is_rejected() {
    let server = api_server(common::create_test_state());

    let response = server
        .post("/api/v1/shortened_urls")
        .form(&[("url", "")])
        .await;

    response.assert_status_bad_request();
}

// ── PUT (upsert) ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_upsert_new_id_with_valid_token() {
    let state = common::create_test_state();
    let server = api_server(state.clone());

    let response = server
        .put("/api/v1/shortened_urls/blog")
        .form(&[("url", "https://blog.example.com"), ("token", common::TEST_TOKEN)])
        .await;

    assert_eq!(response.status_code(), 201);
    let entry: Entry = response.json();
    assert_eq!(entry, Entry::new("blog", "https://blog.example.com"));
    assert_eq!(state.url_service.get("blog").unwrap(), entry);
}

#[tokio::test]
async fn test_upsert_overwrites_existing_id() {
    let state = common::create_test_state();
    let server = api_server(state.clone());

    let response = server
        .put("/api/v1/shortened_urls/nw")
        .form(&[("url", "https://example.com/new"), ("token", common::TEST_TOKEN)])
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(
        state.url_service.get("nw").unwrap().url,
        "https://example.com/new"
    );
    assert_eq!(state.url_service.list().len(), 1);
}

#[tokio::test]
async fn test_upsert_with_wrong_token_leaves_store_unchanged() {
    let state = common::create_test_state();
    let server = api_server(state.clone());

    let response = server
        .put("/api/v1/shortened_urls/nw")
        .form(&[("url", "https://evil.example"), ("token", "wrong")])
        .await;

    response.assert_status_unauthorized();
    assert_eq!(
        state.url_service.get("nw").unwrap().url,
        "https://nightwind.me"
    );
}

#[tokio::test]
async fn test_upsert_without_token_is_unauthorized() {
    let server = api_server(common::create_test_state());

    let response = server
        .put("/api/v1/shortened_urls/nw")
        .form(&[("url", "https://example.com")])
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_upsert_token_checked_before_url_validation() {
    let server = api_server(common::create_test_state());

    // Both the token and the url are bad; the token check wins.
    let response = server
        .put("/api/v1/shortened_urls/nw")
        .form(&[("token", "wrong")])
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_upsert_with_token_but_missing_url_is_rejected() {
    let server = api_server(common::create_test_state());

    let response = server
        .put("/api/v1/shortened_urls/nw")
        .form(&[("token", common::TEST_TOKEN)])
        .await;

    response.assert_status_bad_request();
}

// ── DELETE ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_existing_entry() {
    let state = common::create_test_state();
    let server = api_server(state.clone());

    let response = server
        .delete("/api/v1/shortened_urls/nw")
        .form(&[("token", common::TEST_TOKEN)])
        .await;

    assert_eq!(response.status_code(), 204);
    assert_eq!(response.text(), "");
    assert!(state.url_service.get("nw").is_err());
}

#[tokio::test]
async fn test_delete_missing_entry_is_not_found() {
    let server = api_server(common::create_test_state());

    let response = server
        .delete("/api/v1/shortened_urls/missing")
        .form(&[("token", common::TEST_TOKEN)])
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_with_wrong_token_is_unauthorized() {
    let state = common::create_test_state();
    let server = api_server(state.clone());

    let response = server
        .delete("/api/v1/shortened_urls/nw")
        .form(&[("token", "wrong")])
        .await;

    response.assert_status_unauthorized();
    assert!(state.url_service.get("nw").is_ok());
}

#[tokio::test]
async fn test_delete_missing_entry_with_wrong_token_is_unauthorized() {
    // The token check runs before the existence check.
    let server = api_server(common::create_test_state());

    let response = server
        .delete("/api/v1/shortened_urls/missing")
        .form(&[("token", "wrong")])
        .await;

    response.assert_status_unauthorized();
}

// ── Full flow ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_crud_flow_against_seeded_store() {
    let state = common::create_test_state();
    let server = api_server(state.clone());

    // Unknown id is absent.
    server
        .get("/api/v1/shortened_urls/missing")
        .await
        .assert_status_not_found();

    // Create without id or token allocates a fresh 4-hex id.
    let response = server
        .post("/api/v1/shortened_urls")
        .form(&[("url", "https://example.com")])
        .await;
    assert_eq!(response.status_code(), 201);
    let created: Entry = response.json();
    assert_eq!(created.id.len(), 4);
    assert!(is_lowercase_hex(&created.id));

    // Wrong token cannot touch the seed entry.
    let response = server
        .put("/api/v1/shortened_urls/nw")
        .form(&[("url", "https://evil.example"), ("token", "wrong")])
        .await;
    response.assert_status_unauthorized();
    assert_eq!(
        state.url_service.get("nw").unwrap().url,
        "https://nightwind.me"
    );

    // Correct token deletes it; the id then reads as absent.
    let response = server
        .delete("/api/v1/shortened_urls/nw")
        .form(&[("token", common::TEST_TOKEN)])
        .await;
    assert_eq!(response.status_code(), 204);
    server
        .get("/api/v1/shortened_urls/nw")
        .await
        .assert_status_not_found();

    // The created entry is still listed.
    let mapping: HashMap<String, Entry> =
        server.get("/api/v1/shortened_urls").await.json();
    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping[&created.id], created);
}
