//! Session authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde::Serialize;
use serde_json::json;

use crate::domain::entities::User;
use crate::utils::cookies::session_token_from_headers;
use crate::{error::AppError, state::AppState};

/// Identity attached to authenticated requests as an extension.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub email_verified: bool,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            email_verified: user.is_email_verified(),
        }
    }
}

/// Authenticates requests with the session token.
///
/// # Token Sources
///
/// ```text
/// Authorization: Bearer <token>
/// Cookie: session=<token>
/// ```
///
/// The header wins when both are present.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Bearer` if no token is
/// supplied, or it is unknown, expired or superseded by a later login.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/api/shorten", post(shorten_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = match AuthBearer::from_request_parts(&mut parts, &()).await {
        Ok(AuthBearer(token)) => Some(token),
        Err(_) => session_token_from_headers(&parts.headers),
    }
    .ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            json!({ "reason": "Session token is missing" }),
        )
    })?;

    let user = st.auth_service.authenticate(&token).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser::from(&user));

    Ok(next.run(req).await)
}
