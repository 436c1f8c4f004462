//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link store.
///
/// The store must provide atomic single-key operations: the counter
/// increment is an atomic add in storage, not a read-modify-write in the
/// application.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with a zero click counter.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` with the persisted record on success
    /// - `Ok(None)` if the short code is already taken, so the caller can
    ///   retry with a freshly generated code
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn try_insert(&self, new_link: NewLink) -> Result<Option<Link>, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically adds one to the click counter of a link.
    ///
    /// Returns `Ok(true)` if a row was updated, `Ok(false)` if the code is
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;
}
