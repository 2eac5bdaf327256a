//! Status classification shared by the `auth` and `journal` errors.

use std::fmt;

/// What went wrong, as far as the client is concerned
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::PayloadTooLarge.status_code(), 413);
/// assert!(ErrorKind::ServiceUnavailable.is_server_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Missing field, missing upload part, malformed body
    BadRequest,
    /// Login rejected
    Unauthorized,
    NotFound,
    /// Unique constraint hit
    Conflict,
    /// Upload over `MAX_UPLOAD_BYTES`
    PayloadTooLarge,
    InternalServerError,
    /// Database pool exhausted, closed or unreachable
    ServiceUnavailable,
}

impl ErrorKind {
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::PayloadTooLarge => 413,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Server-side failures hide their cause behind a generic message
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::PayloadTooLarge => "payload_too_large",
            ErrorKind::InternalServerError => "internal",
            ErrorKind::ServiceUnavailable => "unavailable",
        };
        f.write_str(label)
    }
}
