//! HTTP middleware for request processing.
//!
//! Provides session authentication and request tracing.

pub mod auth;
pub mod tracing;
