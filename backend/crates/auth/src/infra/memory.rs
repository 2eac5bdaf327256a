//! In-memory user repository for tests, local demos, and embedding.

use std::sync::{Arc, RwLock};

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Process-local user store with the same uniqueness rules as the database
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of a stored user, looked up by id
    pub fn get(&self, user_id: &UserId) -> Option<User> {
        let users = self.users.read().ok()?;
        users.iter().find(|u| &u.user_id == user_id).cloned()
    }
}

fn matches(user: &User, email: Option<&str>, username: Option<&str>) -> bool {
    email == Some(user.email.as_str()) || username == Some(user.username.as_str())
}

impl UserRepository for InMemoryUserRepository {
    async fn find_by_email_or_username(
        &self,
        email: Option<&str>,
        username: Option<&str>,
    ) -> AuthResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AuthError::Storage("user store lock poisoned".to_string()))?;

        Ok(users
            .iter()
            .find(|u| matches(u, email, username))
            .cloned())
    }

    async fn insert(&self, user: &User) -> AuthResult<UserId> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AuthError::Storage("user store lock poisoned".to_string()))?;

        if users
            .iter()
            .any(|u| matches(u, Some(&user.email), Some(&user.username)))
        {
            return Err(AuthError::DuplicateUser);
        }

        users.push(user.clone());
        Ok(user.user_id)
    }
}
