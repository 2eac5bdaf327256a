//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod publish;

// Re-exports
pub use config::JournalConfig;
pub use publish::{PublishInput, PublishJournalUseCase, PublishOutput, UploadPart};
