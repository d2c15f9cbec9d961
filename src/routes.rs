//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Service descriptor
//! - `GET  /health`  - Store health check
//! - `/api/*`        - Content API
//! - anything else   - `404 {"success": false, "message": "Route not found"}`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Single configured origin, credentials allowed
//! - **Panic recovery** - Generic JSON 500
//! - **Body limit** - Oversized bodies rejected with 413
//! - **Trailing slash** - `/api/services/` is routed as `/api/services`
//!
//! Wrong methods on known paths get the same JSON 404 as unknown paths.

use crate::api;
use crate::api::handlers::{health_handler, index_handler, not_found_handler};
use crate::api::middleware::{cors, panic, tracing};
use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// HTTP-level settings applied to every route.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub cors_origin: HeaderValue,
    pub body_limit: usize,
}

impl HttpSettings {
    /// # Errors
    ///
    /// Returns an error if `client_url` cannot be used as a header value.
    pub fn new(client_url: &str, body_limit: usize) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            cors_origin: HeaderValue::from_str(client_url)?,
            body_limit,
        })
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            body_limit: 10 * 1024 * 1024,
        }
    }
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, settings: &HttpSettings) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state);

    with_middleware(router, settings)
}

/// Wraps a routed application in the fallbacks and middleware stack.
///
/// Routes must already be registered: the method fallback only reaches
/// routes that exist when it is applied.
pub fn with_middleware(router: Router, settings: &HttpSettings) -> NormalizePath<Router> {
    let router = router
        .method_not_allowed_fallback(not_found_handler)
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(settings.body_limit))
        .layer(panic::layer())
        .layer(cors::layer(settings.cors_origin.clone()))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
