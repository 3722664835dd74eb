//! Handler for link shortening endpoint.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{LinkResponse, ShortenRequest};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link owned by the caller.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "destination": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": 42,
///   "code": "aB3xY9",
///   "destination": "https://example.com/some/long/path",
///   "clicks": 0,
///   "owner": 1,
///   "short_url": "http://localhost:3000/aB3xY9",
///   "created_at": "2025-01-01T12:00:00Z"
/// }
/// ```
///
/// Shortening a destination the caller already shortened returns the
/// existing link while the idempotent policy is on.
///
/// # Errors
///
/// - 400 if the destination is missing, empty or not a URL
/// - 401 without a valid session
/// - 503 if no free code could be allocated
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .shorten(payload.destination, Some(user.id))
        .await?;

    let short_url = state.link_service.short_url(&link.code);

    Ok(Json(LinkResponse::new(link, short_url)))
}
