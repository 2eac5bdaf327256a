//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::sqlx_error_kind, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or username already taken
    #[error("User already registered")]
    DuplicateUser,

    /// Unknown user or wrong password (deliberately indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A required request field is absent or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Body is not valid JSON/form data or has a field of the wrong type
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Non-database store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Server-side failure reported to the client with an operation-specific message
    #[error("{message}")]
    Failed {
        message: &'static str,
        #[source]
        source: Box<AuthError>,
    },
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::DuplicateUser
            | AuthError::MissingField(_)
            | AuthError::InvalidBody(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::Database(_)
            | AuthError::Storage(_)
            | AuthError::Hashing(_)
            | AuthError::Failed { .. } => ErrorKind::InternalServerError,
        }
    }

    /// Wrap server-side errors so the client sees `message` instead of internals
    ///
    /// Client errors pass through untouched.
    pub fn or_failed(self, message: &'static str) -> Self {
        if self.kind().is_server_error() {
            AuthError::Failed {
                message,
                source: Box::new(self),
            }
        } else {
            self
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::MissingField(field) => {
                err.with_action(format!("Include `{}` in the request body", field))
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Failed { message, source } => {
                tracing::error!(error = %source, "{}", message);
            }
            AuthError::Database(e) => {
                tracing::error!(error = %e, kind = %sqlx_error_kind(e), "Auth database error");
            }
            AuthError::Storage(msg) | AuthError::Hashing(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
