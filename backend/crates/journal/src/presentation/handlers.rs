//! HTTP Handlers

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use std::sync::Arc;

use crate::application::{PublishInput, PublishJournalUseCase, UploadPart};
use crate::domain::entity::BlobRole;
use crate::domain::repository::{BlobStore, JournalLedger};
use crate::error::{JournalError, JournalResult};
use crate::presentation::dto::PublishResponse;

/// Shared state for journal handlers
pub struct JournalAppState<L, B> {
    pub ledger: Arc<L>,
    pub blobs: Arc<B>,
}

impl<L, B> Clone for JournalAppState<L, B> {
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger.clone(),
            blobs: self.blobs.clone(),
        }
    }
}

/// POST /uploadAdminJournal
pub async fn upload_admin_journal<L, B>(
    State(state): State<JournalAppState<L, B>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> JournalResult<Json<PublishResponse>>
where
    L: JournalLedger + Send + Sync + 'static,
    B: BlobStore + Send + Sync + 'static,
{
    let input = read_publish_form(multipart?).await?;

    let use_case = PublishJournalUseCase::new(state.ledger.clone(), state.blobs.clone());
    use_case.execute(input).await?;

    Ok(Json(PublishResponse::published()))
}

/// Drain the form, buffering both file parts in full
///
/// Unknown fields are skipped. A repeated file part is rejected.
async fn read_publish_form(mut multipart: Multipart) -> JournalResult<PublishInput> {
    let mut input = PublishInput::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if let Some(role) = BlobRole::from_field_name(&name) {
            let original_name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;

            let slot = match role {
                BlobRole::Image => &mut input.image,
                BlobRole::File => &mut input.file,
            };
            if slot.is_some() {
                return Err(JournalError::InvalidMultipart(format!(
                    "More than one `{}` part",
                    name
                )));
            }
            *slot = Some(UploadPart {
                original_name,
                data,
            });
            continue;
        }

        match name.as_str() {
            "journalName" => input.journal_name = Some(field.text().await?),
            "description" => input.description = Some(field.text().await?),
            "issn" => input.issn = Some(field.text().await?),
            other => tracing::debug!(field = %other, "Skipping unexpected form field"),
        }
    }

    Ok(input)
}
