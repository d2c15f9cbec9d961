//! Handlers for the services endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::api::dto::envelope::{CreatedResponse, DataResponse, ListResponse};
use crate::api::dto::service::{CreateServiceRequest, ServiceListParams, ServiceResponse};
use crate::api::handlers::{DATA_SOURCE_HEADER, parse_record_id};
use crate::api::validation::validate_payload;
use crate::domain::entities::ServiceFilter;
use crate::error::AppError;
use crate::state::AppState;

/// Lists active services, newest first.
///
/// # Endpoint
///
/// `GET /api/services?category=`
///
/// Always answers 200. When the store has no matching service or cannot be
/// queried, the built-in catalog is returned and `X-Data-Source` is
/// `fallback`.
pub async fn service_list_handler(
    State(state): State<AppState>,
    Query(params): Query<ServiceListParams>,
) -> impl IntoResponse {
    let filter = ServiceFilter::default().with_category(params.category);
    let served = state.service_catalog.list(filter).await;
    let source = served.source();

    let data = served
        .into_inner()
        .into_iter()
        .map(ServiceResponse::from)
        .collect();

    (
        [(DATA_SOURCE_HEADER, source.as_str())],
        Json(ListResponse::new(data)),
    )
}

/// Returns one service.
///
/// # Endpoint
///
/// `GET /api/services/{id}`
///
/// # Errors
///
/// Returns 404 if the id is not a non-zero integer or names no service.
/// Returns 500 if the store fails.
pub async fn service_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<ServiceResponse>>, AppError> {
    let id = parse_record_id(&id, "Service not found")?;
    let service = state.service_catalog.get(id).await?;

    Ok(Json(DataResponse::new(service.into())))
}

/// Creates a service.
///
/// # Endpoint
///
/// `POST /api/services`
///
/// # Errors
///
/// Returns 400 on malformed JSON or failed validation.
/// Returns 500 if the store fails.
pub async fn create_service_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateServiceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse<ServiceResponse>>), AppError> {
    let Json(payload) = payload?;
    validate_payload(&payload)?;

    let service = state.service_catalog.create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            "Service created successfully",
            service.into(),
        )),
    ))
}
