//! API route configuration.

use crate::api::handlers::{
    api_test_handler, blog_detail_handler, blog_list_handler, contact_handler,
    create_service_handler, register_handler, route_test_handler, service_detail_handler,
    service_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /test`            - API smoke test
/// - `GET  /services`        - List active services (`?category=`)
/// - `POST /services`        - Create a service
/// - `GET  /services/test`   - Route smoke test
/// - `GET  /services/{id}`   - Service detail
/// - `GET  /blog`            - List published posts (`?category=&search=&page=&limit=`)
/// - `GET  /blog/test`       - Route smoke test
/// - `GET  /blog/{id}`       - Post detail, counts a view
/// - `POST /contact`         - Submit the contact form
/// - `GET  /contact/test`    - Route smoke test
/// - `POST /auth/register`   - Register an account
/// - `GET  /auth/test`       - Route smoke test
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(api_test_handler))
        .route(
            "/services",
            get(service_list_handler).post(create_service_handler),
        )
        .route("/services/test", get(route_test_handler("Services")))
        .route("/services/{id}", get(service_detail_handler))
        .route("/blog", get(blog_list_handler))
        .route("/blog/test", get(route_test_handler("Blog")))
        .route("/blog/{id}", get(blog_detail_handler))
        .route("/contact", post(contact_handler))
        .route("/contact/test", get(route_test_handler("Contact")))
        .route("/auth/register", post(register_handler))
        .route("/auth/test", get(route_test_handler("Auth")))
}
