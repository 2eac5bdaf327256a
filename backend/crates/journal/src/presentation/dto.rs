//! API DTOs (Data Transfer Objects)

use serde::Serialize;

/// Body of every `/uploadAdminJournal` response
#[derive(Debug, Clone, Serialize)]
pub struct PublishResponse {
    pub success: bool,
    pub message: String,
}

impl PublishResponse {
    pub fn published() -> Self {
        Self {
            success: true,
            message: "Journal published successfully!".to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
