//! Register Use Case
//!
//! Creates a new user account from the submitted fields.

use std::sync::Arc;

use kernel::id::UserId;
use serde_json::{Map, Value};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Register input: every field of the request body
pub struct RegisterInput {
    pub fields: Map<String, Value>,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let mut fields = input.fields;

        let email = take_required(&mut fields, "email")?;
        let username = take_required(&mut fields, "username")?;
        let password = take_required(&mut fields, "password")?;

        // Anything left over is profile data
        let profile = fields;

        // Either identifier taken is a duplicate
        if self
            .user_repo
            .find_by_email_or_username(Some(&email), Some(&username))
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateUser);
        }

        let raw_password = RawPassword::new(password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let user = User::new(email, username, password_hash, profile);

        // The store re-checks uniqueness, closing the race with a concurrent registration
        let user_id = self.user_repo.insert(&user).await?;

        tracing::info!(
            user_id = %user_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput { user_id })
    }
}

/// Remove `name` from the body; it must be a non-empty string
fn take_required(fields: &mut Map<String, Value>, name: &'static str) -> AuthResult<String> {
    match fields.remove(name) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        _ => Err(AuthError::MissingField(name)),
    }
}
