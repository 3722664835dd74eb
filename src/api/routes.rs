//! API route configuration.
//!
//! Routes under [`protected_routes`] require a session, checked by
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    delete_link_handler, list_user_links_handler, login_handler, logout_handler, me_handler,
    request_otp_handler, shorten_handler, signup_handler, verify_otp_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Routes reachable without a session.
///
/// # Endpoints
///
/// - `POST /auth/signup`      - Create an account and log in
/// - `POST /auth/login`       - Log in, replacing any existing session
/// - `POST /auth/otp/request` - Send an email verification code
/// - `POST /auth/otp/verify`  - Confirm an email with a code
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/otp/request", post(request_otp_handler))
        .route("/auth/otp/verify", post(verify_otp_handler))
}

/// Routes that need a valid session.
///
/// # Endpoints
///
/// - `POST   /auth/logout`  - End the current session
/// - `GET    /auth/me`      - Current identity
/// - `POST   /shorten`      - Create a short link
/// - `GET    /urls/user`    - Caller's links, newest first
/// - `DELETE /urls/{code}`  - Delete one of the caller's links
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/logout", post(logout_handler))
        .route("/auth/me", get(me_handler))
        .route("/shorten", post(shorten_handler))
        .route("/urls/user", get(list_user_links_handler))
        .route("/urls/{code}", delete(delete_link_handler))
}
