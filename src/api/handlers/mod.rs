//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

use axum::http::HeaderName;

use crate::error::AppError;

pub mod auth;
pub mod blog;
pub mod contact;
pub mod health;
pub mod index;
pub mod not_found;
pub mod services;

pub use auth::register_handler;
pub use blog::{blog_detail_handler, blog_list_handler};
pub use contact::contact_handler;
pub use health::health_handler;
pub use index::{api_test_handler, index_handler, route_test_handler};
pub use not_found::not_found_handler;
pub use services::{create_service_handler, service_detail_handler, service_list_handler};

/// Response header reporting whether list data came from the store or the
/// fallback catalog.
pub const DATA_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-data-source");

/// Parses a record id from the path.
///
/// Store records have positive ids and fallback catalog records negative
/// ones. Anything else cannot name a record, so it is reported as
/// `not_found_message` rather than as a bad request.
pub(crate) fn parse_record_id(raw: &str, not_found_message: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| AppError::not_found(not_found_message))
}
