//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain and application layers.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`mail`] - Outbound mail sinks for verification codes

pub mod mail;
pub mod persistence;
