//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod links;
pub mod otp;
pub mod redirect;
pub mod shorten;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{login_handler, logout_handler, me_handler, signup_handler};
pub use health::health_handler;
pub use links::{delete_link_handler, list_user_links_handler};
pub use otp::{request_otp_handler, verify_otp_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
