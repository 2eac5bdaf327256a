//! Journal Error Types
//!
//! Publishing failures. Responses use the `{ success, message }` body the
//! upload form expects rather than the plain kernel error body.

use std::io;

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::presentation::dto::PublishResponse;

/// Journal-specific result type alias
pub type JournalResult<T> = Result<T, JournalError>;

#[derive(Debug, Error)]
pub enum JournalError {
    /// `imageFile` or `fileFile` absent from the request
    #[error("Missing required upload: {0}")]
    MissingUpload(&'static str),

    /// Body is not well-formed multipart
    #[error("Invalid multipart request: {0}")]
    InvalidMultipart(String),

    /// Body exceeds the configured upload limit
    #[error("Upload exceeds the maximum allowed size")]
    UploadTooLarge,

    #[error("Error reading journal data")]
    LedgerRead(#[source] io::Error),

    /// Ledger file exists but is not a JSON array of entries
    #[error("Error parsing journal data")]
    LedgerCorrupt(#[source] serde_json::Error),

    #[error("Error encoding journal data")]
    LedgerEncode(#[source] serde_json::Error),

    #[error("Error writing to file")]
    LedgerWrite(#[source] io::Error),

    #[error("Error storing uploaded file")]
    BlobStorage(#[source] io::Error),
}

impl JournalError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            JournalError::MissingUpload(_) | JournalError::InvalidMultipart(_) => {
                ErrorKind::BadRequest
            }
            JournalError::UploadTooLarge => ErrorKind::PayloadTooLarge,
            JournalError::LedgerRead(_)
            | JournalError::LedgerCorrupt(_)
            | JournalError::LedgerEncode(_)
            | JournalError::LedgerWrite(_)
            | JournalError::BlobStorage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            JournalError::MissingUpload(field) => {
                err.with_action(format!("Attach a `{}` part to the form", field))
            }
            _ => err,
        }
    }

    fn log(&self) {
        match self {
            JournalError::LedgerRead(e)
            | JournalError::LedgerWrite(e)
            | JournalError::BlobStorage(e) => {
                tracing::error!(error = %e, "{}", self);
            }
            JournalError::LedgerCorrupt(e) | JournalError::LedgerEncode(e) => {
                tracing::error!(error = %e, "{}", self);
            }
            _ => {
                tracing::debug!(error = %self, "Journal request rejected");
            }
        }
    }
}

impl From<MultipartError> for JournalError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            JournalError::UploadTooLarge
        } else {
            JournalError::InvalidMultipart(err.body_text())
        }
    }
}

impl From<MultipartRejection> for JournalError {
    fn from(rejection: MultipartRejection) -> Self {
        JournalError::InvalidMultipart(rejection.body_text())
    }
}

impl IntoResponse for JournalError {
    fn into_response(self) -> Response {
        self.log();
        let app_error = self.to_app_error();
        let status = StatusCode::from_u16(app_error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(PublishResponse::failure(app_error.message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(JournalError::MissingUpload("imageFile").kind().status_code(), 400);
        assert_eq!(JournalError::UploadTooLarge.kind().status_code(), 413);
        assert_eq!(
            JournalError::LedgerWrite(io::Error::other("disk full"))
                .kind()
                .status_code(),
            500
        );
    }

    #[test]
    fn test_ledger_messages() {
        let corrupt = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            JournalError::LedgerCorrupt(corrupt).to_string(),
            "Error parsing journal data"
        );
        assert_eq!(
            JournalError::LedgerRead(io::Error::other("denied")).to_string(),
            "Error reading journal data"
        );
        assert_eq!(
            JournalError::LedgerWrite(io::Error::other("denied")).to_string(),
            "Error writing to file"
        );
    }
}
