//! Domain Layer
//!
//! Contains entities and storage traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{BlobRole, JournalEntry, StoredBlob};
pub use repository::{BlobStore, JournalLedger};
