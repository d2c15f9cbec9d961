//! Service descriptor and route smoke-test handlers.

use axum::Json;

use crate::api::dto::envelope::MessageResponse;
use crate::api::dto::index::{Endpoints, IndexResponse};

/// `GET /`
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Welcome to AgroNova API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            services: "/api/services".to_string(),
            blog: "/api/blog".to_string(),
            contact: "/api/contact".to_string(),
        },
    })
}

/// `GET /api/test`
pub async fn api_test_handler() -> Json<MessageResponse> {
    Json(MessageResponse::ok("API is working!"))
}

/// Builds a handler answering `GET /api/<resource>/test`.
pub fn route_test_handler(
    resource: &'static str,
) -> impl Fn() -> std::future::Ready<Json<MessageResponse>> + Clone + Send + Sync + 'static {
    move || std::future::ready(Json(MessageResponse::ok(format!("{resource} route is working!"))))
}
