mod common;

use agronova_api::infrastructure::memory::MemoryStore;
use agronova_api::routes::{HttpSettings, with_middleware};
use agronova_api::state::Repositories;
use axum::extract::Request;
use axum::http::{HeaderValue, StatusCode, header};
use axum::routing::get;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn test_index_describes_service() {
    let (server, _store) = common::memory_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Welcome to AgroNova API");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(
        json["endpoints"],
        json!({ "services": "/api/services", "blog": "/api/blog", "contact": "/api/contact" })
    );
}

#[tokio::test]
async fn test_route_tests() {
    let (server, _store) = common::memory_server();

    let cases = [
        ("/api/test", "API is working!"),
        ("/api/services/test", "Services route is working!"),
        ("/api/blog/test", "Blog route is working!"),
        ("/api/contact/test", "Contact route is working!"),
    ];

    for (path, message) in cases {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert_eq!(
            response.json::<Value>(),
            json!({ "success": true, "message": message }),
            "unexpected body for {path}"
        );
    }
}

#[tokio::test]
async fn test_unknown_route() {
    let (server, _store) = common::memory_server();

    for path in ["/api/nope", "/nope", "/api/services/1/extra"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>(),
            json!({ "success": false, "message": "Route not found" })
        );
    }
}

#[tokio::test]
async fn test_health_memory_store() {
    let (server, _store) = common::memory_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "memory connected");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_store_unavailable() {
    let server = common::unavailable_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let (server, _store) = common::memory_server();

    let response = server
        .get("/api/services")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "http://localhost:3000"
    );
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        "true"
    );
}

#[tokio::test]
async fn test_cors_never_reflects_other_origins() {
    let (server, _store) = common::memory_server();

    let response = server
        .get("/api/services")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://evil.example"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let (server, _store) = common::memory_server();

    let response = server
        .method(axum::http::Method::OPTIONS, "/api/contact")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .await;

    response.assert_status_ok();
    let allowed = response.header(header::ACCESS_CONTROL_ALLOW_METHODS);
    assert!(allowed.to_str().unwrap().contains("POST"));
}

#[tokio::test]
async fn test_body_limit() {
    let store = Arc::new(MemoryStore::new());
    let settings = HttpSettings {
        body_limit: 64,
        ..HttpSettings::default()
    };
    let server = common::create_test_server_with(Repositories::memory(store), &settings);

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "John Doe",
            "email": "john@example.com",
            "subject": "A subject line",
            "message": "x".repeat(500)
        }))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.json::<Value>()["success"], false);
}

#[tokio::test]
async fn test_wrong_method_on_known_path_is_route_not_found() {
    let (server, _store) = common::memory_server();

    let requests = [
        server.delete("/api/services"),
        server.put("/api/blog/1"),
        server.get("/api/contact"),
        server.post("/health"),
    ];

    for request in requests {
        let response = request.await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>(),
            json!({ "success": false, "message": "Route not found" })
        );
    }
}

#[tokio::test]
async fn test_trailing_slash_is_ignored() {
    let (server, store) = common::memory_server();
    common::create_test_service(&store, "Soil Sensors", "Monitoring").await;

    let response = server.get("/api/services/").await;
    response.assert_status_ok();
    assert_eq!(response.header("x-data-source"), "store");
    assert_eq!(response.json::<Value>()["count"], 1);

    let response = server.get("/api/blog/test/").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "Blog route is working!");
}

async fn exploding_handler() -> &'static str {
    panic!("sensor array exploded")
}

#[tokio::test]
async fn test_panicking_handler_returns_generic_error() {
    let app = with_middleware(
        Router::new().route("/api/explode", get(exploding_handler)),
        &HttpSettings::default(),
    );
    let server = TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap();

    let response = server.get("/api/explode").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": false, "message": "Something went wrong!" })
    );
}
