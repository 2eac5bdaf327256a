//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::error::AuthResult;

/// User store trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find the user whose email equals `email` OR whose username equals `username`
    ///
    /// Matching is exact and case-sensitive. A `None` identifier never matches.
    async fn find_by_email_or_username(
        &self,
        email: Option<&str>,
        username: Option<&str>,
    ) -> AuthResult<Option<User>>;

    /// Persist a new user
    ///
    /// Fails with `AuthError::DuplicateUser` when the store's uniqueness
    /// constraint on email or username rejects the record.
    async fn insert(&self, user: &User) -> AuthResult<UserId>;
}
