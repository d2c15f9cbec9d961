use axum::http::{Method, Uri};

use crate::error::AppError;

/// Fallback for unmatched routes and for wrong methods on known paths.
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = %uri.path(), "Route not found");
    AppError::not_found("Route not found")
}
