//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls and business rules and give HTTP
//! handlers a narrow API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short code allocation, redirects, owner-scoped management
//! - [`services::auth_service::AuthService`] - Signup, login and single-session enforcement
//! - [`services::otp_service::OtpService`] - Email verification codes

pub mod services;
