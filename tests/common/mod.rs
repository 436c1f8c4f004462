#![allow(dead_code)]

use snaplink::application::services::LinkService;
use snaplink::infrastructure::persistence::PgLinkRepository;
use snaplink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "https://s.example.com";
pub const TEST_CODE_LENGTH: usize = 6;

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let link_service = Arc::new(LinkService::new(
        link_repository,
        TEST_BASE_URL.to_string(),
        TEST_CODE_LENGTH,
    ));

    AppState {
        link_service,
        db: pool,
    }
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (short_code, original_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn click_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
