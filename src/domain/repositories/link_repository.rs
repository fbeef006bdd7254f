//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for links.
///
/// Every mutating method is a single atomic step in the backing store. Callers
/// never read-modify-write a link themselves.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - In-process `DashMap` implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the code is already taken. The check
    /// is enforced by the store itself, so two racing inserts of the same code
    /// cannot both succeed.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds the oldest link whose target URL equals `target_url` exactly.
    async fn find_by_target_url(&self, target_url: &str) -> Result<Option<Link>, AppError>;

    /// Returns whether a link with this code currently exists.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Lists all links, newest first.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Removes a link. Returns `Ok(false)` if no link had this code.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically bumps `creation_count` and `updated_at`.
    ///
    /// Returns the updated link, or `None` if the code does not exist.
    async fn increment_creation_count(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments `total_clicks` and stamps `last_clicked` and `updated_at`.
    ///
    /// Returns the post-update link, or `None` (with nothing written) if the code
    /// does not exist.
    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
