//! Journal Router

use axum::extract::DefaultBodyLimit;
use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::JournalConfig;
use crate::domain::repository::{BlobStore, JournalLedger};
use crate::presentation::handlers::{self, JournalAppState};

/// Create the Journal router for any ledger and blob store implementation
pub fn journal_router<L, B>(ledger: Arc<L>, blobs: Arc<B>, config: &JournalConfig) -> Router
where
    L: JournalLedger + Send + Sync + 'static,
    B: BlobStore + Send + Sync + 'static,
{
    let state = JournalAppState { ledger, blobs };

    Router::new()
        .route(
            "/uploadAdminJournal",
            post(handlers::upload_admin_journal::<L, B>),
        )
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .with_state(state)
}
