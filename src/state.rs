//! Shared application state passed to every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, OtpService};

/// Services and settings shared by all request handlers.
///
/// Cloned per request; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
    pub otp_service: Arc<OtpService>,
    /// Adds `Secure` to the session cookie.
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        auth_service: Arc<AuthService>,
        otp_service: Arc<OtpService>,
        cookie_secure: bool,
    ) -> Self {
        Self {
            link_service,
            auth_service,
            otp_service,
            cookie_secure,
        }
    }
}
