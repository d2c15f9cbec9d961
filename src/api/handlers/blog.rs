//! Handlers for the blog endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

use crate::api::dto::blog::{BlogListParams, BlogListResponse, BlogPostResponse};
use crate::api::dto::envelope::DataResponse;
use crate::api::handlers::{DATA_SOURCE_HEADER, parse_record_id};
use crate::error::AppError;
use crate::state::AppState;

/// Lists published posts, newest first, one page at a time.
///
/// # Endpoint
///
/// `GET /api/blog?category=&search=&page=&limit=`
///
/// # Query Parameters
///
/// - `category` - exact category match
/// - `search` - case-insensitive match on title, excerpt or tags
/// - `page` - 1-based page number (default 1)
/// - `limit` - page size (default 10, max 100)
///
/// Invalid `page` / `limit` values fall back to the defaults. When nothing
/// in the store matches, or the store fails, the built-in posts are returned
/// as a single page and `X-Data-Source` is `fallback`.
pub async fn blog_list_handler(
    State(state): State<AppState>,
    Query(params): Query<BlogListParams>,
) -> impl IntoResponse {
    let served = state
        .blog_service
        .list(params.query(), params.page_request())
        .await;
    let source = served.source();

    (
        [(DATA_SOURCE_HEADER, source.as_str())],
        Json(BlogListResponse::from(served.into_inner())),
    )
}

/// Returns one post with its author and comments, counting the view.
///
/// # Endpoint
///
/// `GET /api/blog/{id}`
///
/// # Errors
///
/// Returns 404 if the id is not a non-zero integer or names no post.
/// Returns 500 if the lookup fails.
pub async fn blog_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<BlogPostResponse>>, AppError> {
    let id = parse_record_id(&id, "Blog not found")?;
    let post = state.blog_service.get(id).await?;

    Ok(Json(DataResponse::new(post.into())))
}
