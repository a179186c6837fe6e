mod common;

use axum::http::{Method, StatusCode};
use common::{article_payload, send, setup_app};
use serde_json::json;

async fn login(app: &axum::Router) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/login",
        Some(json!({ "username": "editor", "password": "whatever" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["data"]["token"].as_str().expect("token should be a string").to_string()
}

#[tokio::test]
async fn login_issues_token() {
    let app = setup_app(false);

    let (status, body) = send(&app, Method::POST, "/api/login", Some(json!({ "username": "editor" })), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "You are logged in.");
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["expiresIn"], 3600);
}

#[tokio::test]
async fn login_requires_username() {
    let app = setup_app(false);

    let (status, body) = send(&app, Method::POST, "/api/login", Some(json!({ "username": "  " })), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn writes_require_token_when_auth_is_on() {
    let app = setup_app(true);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/blog-articles",
        Some(article_payload("Secret", "classified")),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/blog-articles",
        Some(article_payload("Secret", "classified")),
        Some("not-a-jwt"),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = login(&app).await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/blog-articles",
        Some(article_payload("Secret", "classified")),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, Method::DELETE, "/api/blog-articles/1", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::DELETE, "/api/blog-articles/1", None, Some(&token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn reads_stay_public_when_auth_is_on() {
    let app = setup_app(true);

    let (status, body) = send(&app, Method::GET, "/api/blog-articles", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn out_of_range_expiry_is_refused() {
    let mut security = common::security(false);
    security.jwt_expiry_hours = u64::MAX;
    let state = blog_article_api::AppState::new(
        std::sync::Arc::new(blog_article_api::database::MemoryArticleStore::new()),
        blog_article_api::KeywordExtractor::default(),
        security,
    );
    let app = blog_article_api::build_router(state);

    let (status, body) = send(&app, Method::POST, "/api/login", Some(json!({ "username": "editor" })), None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["data"].is_null());
}
