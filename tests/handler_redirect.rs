mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use snaplink::api::handlers::redirect_handler;
use sqlx::PgPool;

fn redirect_app(state: snaplink::AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    common::create_test_link(&pool, "redir1", "https://example.com/target").await;

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Short URL not found");
}

#[sqlx::test]
async fn test_redirect_increments_click_count(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    common::create_test_link(&pool, "clickme", "https://example.com").await;
    assert_eq!(common::click_count(&pool, "clickme").await, 0);

    let response = server.get("/clickme").await;
    assert_eq!(response.status_code(), 302);

    assert_eq!(common::click_count(&pool, "clickme").await, 1);
}

#[sqlx::test]
async fn test_redirect_counts_each_call(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    common::create_test_link(&pool, "multi", "https://example.com").await;

    for _ in 0..3 {
        let response = server.get("/multi").await;
        assert_eq!(response.status_code(), 302);
    }

    assert_eq!(common::click_count(&pool, "multi").await, 3);
}

#[sqlx::test]
async fn test_redirect_unknown_code_does_not_create_counter(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(redirect_app(state)).unwrap();

    common::create_test_link(&pool, "known1", "https://example.com").await;

    let response = server.get("/unknown").await;
    response.assert_status_not_found();

    // The miss must not touch the existing record.
    assert_eq!(common::click_count(&pool, "known1").await, 0);
}
