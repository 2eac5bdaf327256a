//! Storage Traits
//!
//! Interfaces for the ledger and the blob store. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::{BlobRole, JournalEntry, StoredBlob};
use crate::error::JournalResult;

/// Ordered, append-only sequence of published journals
#[trait_variant::make(JournalLedger: Send)]
pub trait LocalJournalLedger {
    /// Append `entry` after every existing entry
    async fn append(&self, entry: &JournalEntry) -> JournalResult<()>;

    /// All entries in publish order
    async fn entries(&self) -> JournalResult<Vec<JournalEntry>>;
}

/// Write-once storage for uploaded payloads
#[trait_variant::make(BlobStore: Send)]
pub trait LocalBlobStore {
    /// Store `data` under a fresh unique name keeping the extension of `original_name`
    async fn store(
        &self,
        role: BlobRole,
        original_name: &str,
        data: &[u8],
    ) -> JournalResult<StoredBlob>;
}
