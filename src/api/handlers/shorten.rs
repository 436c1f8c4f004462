//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// A missing scheme is tolerated; `https://` is prepended before validation.
///
/// # Response
///
/// ```json
/// {
///   "short_code": "a1b2c3",
///   "short_url": "https://sn.example.com/a1b2c3",
///   "original_url": "https://example.com/some/long/path"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is missing or invalid and
/// 500 Internal Server Error on storage failures, both with an
/// `{"error": "<message>"}` body.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.shorten(&payload.url).await?;
    let short_url = state.link_service.short_url(&link.short_code);

    Ok(Json(ShortenResponse {
        short_code: link.short_code,
        short_url,
        original_url: link.original_url,
    }))
}
