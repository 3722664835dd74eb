//! Outbound mail for verification codes.
//!
//! Delivery transport is pluggable through [`Mailer`]. The bundled
//! [`LogMailer`] writes the message to the log, which is enough for local
//! development; a real deployment supplies its own implementation.

mod log_mailer;
mod service;

pub use log_mailer::LogMailer;
pub use service::{MailError, Mailer};

#[cfg(test)]
pub use service::MockMailer;
