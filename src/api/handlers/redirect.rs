//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL, counting the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the link by code
/// 2. Atomically increment its click counter in storage
/// 3. Return 302 Found with `Location` set to the original URL
///
/// The increment has at-least-once semantics; there is no idempotency key,
/// so a retried request counts again.
///
/// # Errors
///
/// Returns 404 Not Found with `{"error": "Short URL not found"}` if the
/// code doesn't exist, 500 Internal Server Error on storage failures.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    debug!("Redirecting {} -> {}", code, link.original_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, link.original_url)]))
}
