//! Handlers for email verification codes.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{OtpRequest, OtpVerifyRequest};
use crate::api::dto::shorten::MessageResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Sends a verification code to a registered address.
///
/// # Endpoint
///
/// `POST /api/auth/otp/request`
///
/// Always answers `202 Accepted` with the same body, whether or not the
/// address belongs to an account.
pub async fn request_otp_handler(
    State(state): State<AppState>,
    Json(payload): Json<OtpRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    payload.validate()?;

    state.otp_service.request_code(&payload.email).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse::new(
            "If the address is registered, a verification code has been sent",
        )),
    ))
}

/// Confirms an address with a previously sent code.
///
/// # Endpoint
///
/// `POST /api/auth/otp/verify`
///
/// # Errors
///
/// Returns 400 for unknown, expired or exhausted codes and for wrong guesses.
/// A wrong guess reports `remaining_attempts` in the error details.
pub async fn verify_otp_handler(
    State(state): State<AppState>,
    Json(payload): Json<OtpVerifyRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    state
        .otp_service
        .verify_code(&payload.email, &payload.code)
        .await?;

    Ok(Json(MessageResponse::new("Email verified")))
}
