//! Helpers shared across layers.
//!
//! - [`code_generator`] - Short codes, session tokens and OTP codes
//! - [`password`] - Argon2id password hashing
//! - [`token_hash`] - Keyed hashing of secrets before storage
//! - [`cookies`] - Session cookie parsing and construction
//! - [`expiry`] - Overflow-checked expiry timestamps

pub mod code_generator;
pub mod cookies;
pub mod expiry;
pub mod password;
pub mod token_hash;
