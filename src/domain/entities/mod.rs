//! Core domain entities.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A short code mapped to a destination URL
//! - [`User`] - A registered account (the owner of links)
//! - [`Session`] - The single active login of a user
//! - [`OtpCode`] - A pending email verification code
//!
//! Creation inputs use separate `New*` structs (`NewLink`, `NewUser`, ...).

pub mod link;
pub mod otp;
pub mod session;
pub mod user;

pub use link::{Link, NewLink};
pub use otp::{NewOtpCode, OtpCode};
pub use session::{NewSession, Session};
pub use user::{NewUser, User};
