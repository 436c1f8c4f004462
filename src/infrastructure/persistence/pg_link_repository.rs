//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape shared by all link queries.
#[derive(sqlx::FromRow)]
struct LinkRow {
    short_code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    click_count: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.short_code,
            row.original_url,
            row.created_at,
            row.click_count,
        )
    }
}

/// PostgreSQL repository for link storage and retrieval.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn try_insert(&self, new_link: NewLink) -> Result<Option<Link>, AppError> {
        // ON CONFLICT DO NOTHING makes the existence check and the insert a
        // single race-free statement; no row returned means the code is taken.
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (short_code, original_url)
            VALUES ($1, $2)
            ON CONFLICT (short_code) DO NOTHING
            RETURNING short_code, original_url, created_at, click_count
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT short_code, original_url, created_at, click_count
            FROM links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET click_count = click_count + 1
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
