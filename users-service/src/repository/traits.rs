//! Repository trait definitions
//!
//! Async methods use RPITIT (return position `impl Trait` in traits), so
//! implementations can be written with plain `async fn`.

use std::future::Future;

use super::error::RepositoryError;
use crate::models::{NewUser, User, UserChanges};

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Storage for user records
///
/// Implementations must keep ids unique for the lifetime of the store and
/// return records in insertion order from [`find_all`](Self::find_all).
pub trait UserRepository: Send + Sync + 'static {
    /// All users in insertion order
    fn find_all(&self) -> impl Future<Output = RepositoryResult<Vec<User>>> + Send;

    /// Find a user by id
    ///
    /// Returns `Ok(None)` when no record has this id.
    fn find_by_id(&self, id: u64) -> impl Future<Output = RepositoryResult<Option<User>>> + Send;

    /// Create a user, assigning the next id and `created_at`
    ///
    /// # Errors
    ///
    /// Returns a `ValidationFailed` error if the name or email is empty.
    fn create(&self, data: NewUser) -> impl Future<Output = RepositoryResult<User>> + Send;

    /// Apply changes to an existing user and stamp `updated_at`
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error if no user has this id.
    fn update(
        &self,
        id: u64,
        changes: UserChanges,
    ) -> impl Future<Output = RepositoryResult<User>> + Send;

    /// Delete a user
    ///
    /// Returns `true` if the user was deleted, `false` if it didn't exist.
    fn delete(&self, id: u64) -> impl Future<Output = RepositoryResult<bool>> + Send;
}
