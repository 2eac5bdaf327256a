//! Infrastructure Layer
//!
//! Filesystem-backed storage.

pub mod fs_blob_store;
pub mod json_ledger;

pub use fs_blob_store::FsBlobStore;
pub use json_ledger::JsonFileLedger;
