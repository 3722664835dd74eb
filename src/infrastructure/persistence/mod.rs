//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements mapped through `sqlx::FromRow`.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage, click counting and owner-scoped queries
//! - [`PgUserRepository`] - Accounts
//! - [`PgSessionRepository`] - Single active session per user
//! - [`PgOtpRepository`] - Email verification codes

pub mod pg_link_repository;
pub mod pg_otp_repository;
pub mod pg_session_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_otp_repository::PgOtpRepository;
pub use pg_session_repository::PgSessionRepository;
pub use pg_user_repository::PgUserRepository;
