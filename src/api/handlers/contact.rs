//! Handler for the contact form.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::contact::{ContactReceipt, ContactRequest};
use crate::api::dto::envelope::CreatedResponse;
use crate::api::validation::validate_payload;
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a contact form submission.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Errors
///
/// Returns 400 with every violated rule if validation fails.
/// Returns 500 if the submission cannot be stored.
pub async fn contact_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse<ContactReceipt>>), AppError> {
    let Json(payload) = payload?;
    validate_payload(&payload)?;

    let contact = state.contact_service.submit(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            "Thank you for your message. We will get back to you soon!",
            contact.into(),
        )),
    ))
}
