//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;

/// Application state shared across all request handlers.
///
/// Holds the link service and the connection pool (the latter only for
/// health checks). Cloning is cheap; everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub db: Arc<PgPool>,
}
