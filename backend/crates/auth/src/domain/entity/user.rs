//! User Entity
//!
//! A registered user: the two unique identifiers, the password hash and
//! whatever other fields were submitted at registration.

use chrono::{DateTime, SecondsFormat, Utc};
use kernel::id::UserId;
use serde_json::{Map, Value};

use crate::domain::value_object::user_password::UserPassword;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Store identifier (UUID v4)
    pub user_id: UserId,
    /// Email (unique)
    pub email: String,
    /// Username (unique)
    pub username: String,
    /// Argon2id hash
    pub password_hash: UserPassword,
    /// Remaining registration fields, stored as submitted
    pub profile: Map<String, Value>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(
        email: String,
        username: String,
        password_hash: UserPassword,
        profile: Map<String, Value>,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            username,
            password_hash,
            profile,
            created_at: Utc::now(),
        }
    }

    /// Sanitized view returned to clients
    ///
    /// Profile fields first, then `id`, `email`, `username` and `createdAt`
    /// (these win over profile fields of the same name). Never contains the hash.
    pub fn public_projection(&self) -> Map<String, Value> {
        let mut view = self.profile.clone();
        view.remove("password");
        view.insert("id".to_string(), Value::from(self.user_id.to_string()));
        view.insert("email".to_string(), Value::from(self.email.clone()));
        view.insert("username".to_string(), Value::from(self.username.clone()));
        view.insert(
            "createdAt".to_string(),
            Value::from(self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        view
    }
}
