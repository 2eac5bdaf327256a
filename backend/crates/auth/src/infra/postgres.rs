//! PostgreSQL Repository Implementation
//!
//! Users live in one table: identifiers and hash in columns, the remaining
//! registration document in a JSONB `profile` column. Unique indexes on
//! `email` and `username` are the authoritative duplicate check.

use chrono::{DateTime, Utc};
use kernel::error::{conversions::sqlx_error_kind, kind::ErrorKind};
use kernel::id::UserId;
use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_password::UserPassword;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn find_by_email_or_username(
        &self,
        email: Option<&str>,
        username: Option<&str>,
    ) -> AuthResult<Option<User>> {
        if email.is_none() && username.is_none() {
            return Ok(None);
        }

        // NULL binds never compare equal, so an absent identifier cannot match
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                username,
                password_hash,
                profile,
                created_at
            FROM users
            WHERE email = $1 OR username = $2
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn insert(&self, user: &User) -> AuthResult<UserId> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                email,
                username,
                password_hash,
                profile,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.email)
        .bind(&user.username)
        .bind(user.password_hash.as_phc_string())
        .bind(Json(&user.profile))
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user.user_id),
            Err(e) if sqlx_error_kind(&e) == ErrorKind::Conflict => {
                tracing::debug!(error = %e, "Unique constraint rejected user insert");
                Err(AuthError::DuplicateUser)
            }
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    username: String,
    password_hash: String,
    profile: Json<Map<String, Value>>,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = UserPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Storage(format!("Invalid password_hash: {}", e)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            email: self.email,
            username: self.username,
            password_hash,
            profile: self.profile.0,
            created_at: self.created_at,
        })
    }
}
