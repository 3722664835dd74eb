//! Repository trait for login sessions.

use crate::domain::entities::{NewSession, Session, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for the single active session of each user.
///
/// Sessions are keyed by user: opening a session replaces the previous row, so
/// a new login ends any older one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores `new_session`, replacing any existing session of the same user.
    ///
    /// Returns the stored session and whether an older one was replaced.
    async fn replace_for_user(&self, new_session: NewSession) -> Result<(Session, bool), AppError>;

    /// Resolves a token hash to the user of a non-expired session.
    async fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<User>, AppError>;

    /// Ends the user's session. Returns `false` if there was none.
    async fn delete_for_user(&self, user_id: i64) -> Result<bool, AppError>;
}
