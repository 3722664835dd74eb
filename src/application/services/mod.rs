//! Business logic services for the application layer.

pub mod auth_service;
pub mod link_service;
pub mod otp_service;

pub use auth_service::{AuthService, IssuedSession};
pub use link_service::{LinkService, ShortenPolicy};
pub use otp_service::{OtpPolicy, OtpService};
