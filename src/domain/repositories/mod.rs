//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link storage keyed by code
//! - [`UserRepository`] - Account storage
//! - [`SessionRepository`] - Single active session per user
//! - [`OtpRepository`] - Email verification codes

pub mod link_repository;
pub mod otp_repository;
pub mod session_repository;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use otp_repository::OtpRepository;
pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use otp_repository::MockOtpRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
