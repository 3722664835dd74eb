//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable storage of links keyed by code.
///
/// Every call is a fresh round trip to the backing store; nothing is cached.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds the link `owner` already created for `destination`, if any.
    ///
    /// `None` as owner matches only anonymous links.
    async fn find_by_destination_and_owner(
        &self,
        destination: &str,
        owner: Option<i64>,
    ) -> Result<Option<Link>, AppError>;

    /// Inserts a new link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] (constraint `links_code_key`) if the code
    /// is already taken, even when the caller checked beforehand.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Atomically adds one click.
    ///
    /// Returns `false` if no link has this code.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;

    /// Lists the owner's links, most recently created first.
    async fn list_by_owner(&self, owner: i64) -> Result<Vec<Link>, AppError>;

    /// Deletes the link only if it belongs to `owner`.
    ///
    /// Returns `Ok(true)` if a row was removed.
    async fn delete_by_code_and_owner(&self, code: &str, owner: i64) -> Result<bool, AppError>;

    /// Counts all links.
    async fn count(&self) -> Result<i64, AppError>;
}
