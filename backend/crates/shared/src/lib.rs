//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by the `auth` and `journal` contexts:
//! - Unified error type ([`error::app_error::AppError`]) and its HTTP classification
//! - Typed UUID identifiers for users and journal entries
//!
//! Only things with the same meaning in every context belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
