//! Short link creation, resolution and management.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;
use tracing::{debug, info, warn};

/// Unique constraint guarding `links.code`.
pub const CODE_CONSTRAINT: &str = "links_code_key";

/// Upper bound on code generation attempts per shorten request.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Shorten behaviour switches.
#[derive(Debug, Clone, Copy)]
pub struct ShortenPolicy {
    /// When true, shortening a destination the owner already shortened returns
    /// the existing link instead of allocating a new code.
    pub idempotent: bool,
}

impl Default for ShortenPolicy {
    fn default() -> Self {
        Self { idempotent: true }
    }
}

/// Service for allocating short codes and resolving them.
///
/// Holds no state of its own: every operation is a fresh round trip to the
/// [`LinkRepository`].
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    policy: ShortenPolicy,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin used to build short URLs.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        policy: ShortenPolicy,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            link_repository,
            policy,
            base_url: base_url.into(),
        }
    }

    /// Creates a short link for `destination` owned by `owner`.
    ///
    /// The destination is stored as given; input validation belongs to the
    /// HTTP boundary.
    ///
    /// # Idempotence
    ///
    /// With [`ShortenPolicy::idempotent`] set, an existing link for the same
    /// `(destination, owner)` pair is returned unchanged. Two racing requests
    /// may still both create a link.
    ///
    /// # Code Allocation
    ///
    /// Generates a 6-character code, skips codes already in use and retries
    /// when the insert itself hits the code constraint. Gives up after
    /// [`MAX_CODE_ATTEMPTS`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if no free code was found, and
    /// propagates store errors.
    pub async fn shorten(&self, destination: String, owner: Option<i64>) -> Result<Link, AppError> {
        if self.policy.idempotent
            && let Some(existing) = self
                .link_repository
                .find_by_destination_and_owner(&destination, owner)
                .await?
        {
            debug!(code = %existing.code, ?owner, "Returning existing link for destination");
            return Ok(existing);
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_code();

            if self.link_repository.find_by_code(&code).await?.is_some() {
                debug!(attempt, code, "Short code collision, regenerating");
                continue;
            }

            let new_link = NewLink {
                code,
                destination: destination.clone(),
                owner,
            };

            match self.link_repository.insert(new_link).await {
                Ok(link) => {
                    info!(code = %link.code, ?owner, attempt, "Short link created");
                    metrics::counter!("links_created_total").increment(1);
                    return Ok(link);
                }
                Err(e) if e.conflict_constraint() == Some(CODE_CONSTRAINT) => {
                    warn!(attempt, "Short code taken between check and insert, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(attempts = MAX_CODE_ATTEMPTS, "Giving up on short code allocation");
        Err(AppError::unavailable(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Resolves `code` to its destination and counts the click.
    ///
    /// The increment runs before the caller redirects; if it fails the
    /// request fails rather than dropping the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.resolve_with(code, Ok).await
    }

    /// Like [`resolve`](Self::resolve), but passes the destination through
    /// `accept` first. The click is only counted when `accept` succeeds.
    pub async fn resolve_with<T>(
        &self,
        code: &str,
        accept: impl FnOnce(String) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        let target = accept(link.destination)?;

        if !self.link_repository.increment_clicks(code).await? {
            // Deleted between lookup and increment; the redirect still goes out.
            debug!(code, "Link vanished before click was counted");
        }

        metrics::counter!("redirects_total").increment(1);

        Ok(target)
    }

    /// Lists the owner's links, most recently created first.
    pub async fn list_for_owner(&self, owner: i64) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_by_owner(owner).await
    }

    /// Deletes `code` if `owner` created it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] both when the code is unknown and when it
    /// belongs to someone else, so ownership of foreign codes is not revealed.
    pub async fn delete(&self, code: &str, owner: i64) -> Result<(), AppError> {
        let deleted = self
            .link_repository
            .delete_by_code_and_owner(code, owner)
            .await?;

        if !deleted {
            return Err(AppError::not_found(
                "URL not found",
                json!({ "code": code }),
            ));
        }

        info!(code, owner, "Short link deleted");
        Ok(())
    }

    /// Total number of stored links.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
