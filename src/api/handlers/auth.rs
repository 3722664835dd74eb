//! Handlers for signup, login, logout and the current identity.

use axum::{
    Extension, Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, SessionResponse, SignupRequest};
use crate::api::dto::shorten::MessageResponse;
use crate::api::middleware::auth::CurrentUser;
use crate::application::services::IssuedSession;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookies::{clear_session_cookie, session_cookie};

/// Registers an account and logs it in.
///
/// # Endpoint
///
/// `POST /api/auth/signup`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "email": "alice@example.com", "password": "correct horse" }
/// ```
///
/// Responds `201 Created` with the session token in the body and in an
/// HttpOnly `session` cookie.
///
/// # Errors
///
/// - 400 on invalid input
/// - 409 if the username or email is already registered
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let issued = state
        .auth_service
        .signup(payload.username, payload.email, payload.password)
        .await?;

    Ok(session_response(&state, StatusCode::CREATED, issued))
}

/// Logs in with username and password.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// A successful login terminates any session the user already had, so the
/// previous token stops working immediately.
///
/// # Errors
///
/// Returns 401 for unknown users and wrong passwords alike.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let issued = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(session_response(&state, StatusCode::OK, issued))
}

/// Ends the caller's session and clears the cookie.
///
/// `POST /api/auth/logout`
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, AppError> {
    state.auth_service.logout(user.id).await?;

    Ok((
        [(header::SET_COOKIE, clear_session_cookie(state.cookie_secure))],
        Json(MessageResponse::new("Logged out")),
    )
        .into_response())
}

/// `GET /api/auth/me`
pub async fn me_handler(Extension(user): Extension<CurrentUser>) -> Json<CurrentUser> {
    Json(user)
}

fn session_response(state: &AppState, status: StatusCode, issued: IssuedSession) -> Response {
    let cookie = session_cookie(
        &issued.token,
        state.auth_service.session_ttl_seconds(),
        state.cookie_secure,
    );

    let body = SessionResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        user: issued.user.into(),
    };

    (status, [(header::SET_COOKIE, cookie)], Json(body)).into_response()
}
