//! Converts handler panics into the generic 500 envelope.

use std::any::Any;

use axum::{
    Json,
    http::{Response, StatusCode, header},
    response::IntoResponse,
};
use axum::body::Body;
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::dto::envelope::MessageResponse;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response<Body>;

/// Catches panics below this layer. The panic message is logged and never
/// sent to the client.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse {
            success: false,
            message: "Something went wrong!".to_string(),
        }),
    )
        .into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}
