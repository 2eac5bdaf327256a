//! Journal Publishing Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Journal entry and blob types, ledger and blob store traits
//! - `application/` - Publish use case
//! - `infra/` - Filesystem blob store and JSON file ledger
//! - `presentation/` - Multipart handler, DTOs, router
//!
//! ## Consistency Model
//! - Both upload parts are received in full before anything is written
//! - Ledger appends are serialized in-process and written via temp file + rename
//! - Blobs stored before a failed ledger append are not removed

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::JournalConfig;
pub use error::{JournalError, JournalResult};
pub use infra::{FsBlobStore, JsonFileLedger};
pub use presentation::router::journal_router;

#[cfg(test)]
mod tests;
