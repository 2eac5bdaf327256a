//! Error conversions
//!
//! Classification of storage driver errors and the HTTP rendering of [`AppError`].

#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx classification (feature-gated)
// ============================================================================

/// Classify a driver error
///
/// Connection-level failures are `ServiceUnavailable`, constraint violations
/// are `Conflict`/`BadRequest`, everything else is `InternalServerError`.
#[cfg(feature = "sqlx")]
pub fn sqlx_error_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        sqlx::Error::Database(db_err) => {
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            match db_err.code().as_deref() {
                Some("23505") => ErrorKind::Conflict,
                Some("23502") | Some("23514") => ErrorKind::BadRequest,
                Some("53000" | "53100" | "53200" | "53300") => ErrorKind::ServiceUnavailable,
                Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                    ErrorKind::ServiceUnavailable
                }
                _ => ErrorKind::InternalServerError,
            }
        }
        _ => ErrorKind::InternalServerError,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Renders `{ "message": ..., "action"?: ... }` with the mapped status code.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut body = serde_json::json!({ "message": self.message() });
        if let Some(action) = self.action() {
            body["action"] = serde_json::Value::from(action);
        }

        (status, Json(body)).into_response()
    }
}
