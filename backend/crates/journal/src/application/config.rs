//! Application Configuration
//!
//! Where published content lives, relative to a single content root.

use std::path::PathBuf;

/// Image uploads, relative to the content root
pub const IMAGES_DIR: &str = "journals/images";

/// Document uploads, relative to the content root
pub const FILES_DIR: &str = "journals/files";

/// Ledger file, relative to the content root
pub const LEDGER_FILE: &str = "journals/adminadd.json";

/// Default upload body limit (200 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

/// Journal application configuration
#[derive(Debug, Clone)]
pub struct JournalConfig {
    /// Directory the server publishes from
    pub content_root: PathBuf,
    /// Maximum accepted request body for uploads
    pub max_upload_bytes: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("."),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl JournalConfig {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            ..Self::default()
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.content_root.join(LEDGER_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = JournalConfig::default();
        assert_eq!(config.max_upload_bytes, 209_715_200);
        assert_eq!(
            config.ledger_path(),
            PathBuf::from(".").join("journals/adminadd.json")
        );
    }
}
