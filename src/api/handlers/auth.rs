//! Handler for account registration.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::auth::{RegisterRequest, RegisteredUser};
use crate::api::dto::envelope::CreatedResponse;
use crate::api::validation::validate_payload;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a user account.
///
/// # Endpoint
///
/// `POST /api/auth/register`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 409 if the email is already registered.
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse<RegisteredUser>>), AppError> {
    let Json(payload) = payload?;
    validate_payload(&payload)?;

    let user = state
        .account_service
        .register(payload.name, payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            "User registered successfully",
            user.into(),
        )),
    ))
}
