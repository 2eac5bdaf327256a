//! Publish Use Case
//!
//! Stores both uploaded payloads and appends one entry to the ledger.

use std::sync::Arc;

use bytes::Bytes;

use crate::domain::entity::{BlobRole, JournalEntry};
use crate::domain::repository::{BlobStore, JournalLedger};
use crate::error::{JournalError, JournalResult};

/// One fully received file part
#[derive(Debug, Clone)]
pub struct UploadPart {
    /// Filename as sent by the client (may be empty)
    pub original_name: String,
    pub data: Bytes,
}

/// Publish input
#[derive(Debug, Default)]
pub struct PublishInput {
    pub journal_name: Option<String>,
    pub description: Option<String>,
    pub issn: Option<String>,
    pub image: Option<UploadPart>,
    pub file: Option<UploadPart>,
}

/// Publish output
#[derive(Debug)]
pub struct PublishOutput {
    pub entry: JournalEntry,
}

/// Publish use case
pub struct PublishJournalUseCase<L, B>
where
    L: JournalLedger,
    B: BlobStore,
{
    ledger: Arc<L>,
    blobs: Arc<B>,
}

impl<L, B> PublishJournalUseCase<L, B>
where
    L: JournalLedger,
    B: BlobStore,
{
    pub fn new(ledger: Arc<L>, blobs: Arc<B>) -> Self {
        Self { ledger, blobs }
    }

    pub async fn execute(&self, input: PublishInput) -> JournalResult<PublishOutput> {
        // Both parts must be present before anything touches the disk
        let image = input
            .image
            .ok_or(JournalError::MissingUpload(BlobRole::Image.field_name()))?;
        let file = input
            .file
            .ok_or(JournalError::MissingUpload(BlobRole::File.field_name()))?;

        let image_blob = self
            .blobs
            .store(BlobRole::Image, &image.original_name, &image.data)
            .await?;
        let file_blob = self
            .blobs
            .store(BlobRole::File, &file.original_name, &file.data)
            .await?;

        let entry = JournalEntry::new(
            input.journal_name,
            input.description,
            input.issn,
            &image_blob,
            &file_blob,
        );

        self.ledger.append(&entry).await?;

        tracing::info!(
            journal_id = %entry.id,
            image_path = %entry.image_path,
            file_path = %entry.file_path,
            "Journal published"
        );

        Ok(PublishOutput { entry })
    }
}
