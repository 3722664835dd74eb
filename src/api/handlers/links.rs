//! Handlers for the caller's own links.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::shorten::{LinkResponse, MessageResponse};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists links created by the caller, most recent first.
///
/// # Endpoint
///
/// `GET /api/urls/user`
pub async fn list_user_links_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_for_owner(user.id).await?;

    let items = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link.code);
            LinkResponse::new(link, short_url)
        })
        .collect();

    Ok(Json(items))
}

/// Deletes one of the caller's links.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code does not exist or belongs to another
/// user. The two cases are indistinguishable to the caller.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete(&code, user.id).await?;

    Ok(Json(MessageResponse::new("URL deleted successfully")))
}
