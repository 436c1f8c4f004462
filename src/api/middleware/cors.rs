//! Permissive CORS middleware.

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Creates the cross-origin policy applied to every route.
///
/// The API is consumed directly from browsers on arbitrary origins, so the
/// policy is wildcard: any origin, GET/POST/OPTIONS, any request headers.
/// Preflight OPTIONS requests are answered by the layer itself with 200.
///
/// Credentials are deliberately not allowed; a wildcard origin combined with
/// credentials is rejected by browsers.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
