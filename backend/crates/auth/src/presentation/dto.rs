//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Register
// ============================================================================

/// Register request: any JSON object; `email`, `username` and `password` are required
pub type RegisterRequest = Map<String, Value>;

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    /// Store identifier of the new user
    pub id: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    /// Sanitized user record (no password hash)
    pub user: Map<String, Value>,
}
