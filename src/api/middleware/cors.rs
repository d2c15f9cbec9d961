//! CORS policy.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Allows the configured frontend origin, with credentials.
///
/// Credentials rule out wildcard origins, methods and headers, so each is
/// listed explicitly.
pub fn layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}
