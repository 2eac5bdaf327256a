//! Journal Entities

use chrono::{DateTime, SubsecRound, Utc};
use kernel::id::JournalId;
use serde::{Deserialize, Serialize};

/// Which content directory an uploaded part belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobRole {
    Image,
    File,
}

impl BlobRole {
    /// Multipart field name carrying this role
    pub const fn field_name(&self) -> &'static str {
        match self {
            BlobRole::Image => "imageFile",
            BlobRole::File => "fileFile",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "imageFile" => Some(BlobRole::Image),
            "fileFile" => Some(BlobRole::File),
            _ => None,
        }
    }
}

/// A payload written by the blob store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub role: BlobRole,
    /// Path relative to the content root, `/`-separated
    pub path: String,
    /// Filename as sent by the client
    pub original_name: String,
}

/// One published journal; an element of the ledger array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: JournalId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISSN-like identifying code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
    pub image_path: String,
    pub file_path: String,
    #[serde(with = "millis_rfc3339")]
    pub published_at: DateTime<Utc>,
}

impl JournalEntry {
    /// New entry with a fresh id, stamped now
    pub fn new(
        journal_name: Option<String>,
        description: Option<String>,
        issn: Option<String>,
        image: &StoredBlob,
        file: &StoredBlob,
    ) -> Self {
        Self {
            id: JournalId::new(),
            journal_name,
            description,
            issn,
            image_path: image.path.clone(),
            file_path: file.path.clone(),
            published_at: Utc::now().trunc_subsecs(3),
        }
    }
}

/// `2024-05-01T10:00:00.000Z`: UTC, always three fractional digits
mod millis_rfc3339 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|at| at.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
