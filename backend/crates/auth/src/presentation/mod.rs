//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;

pub use handlers::AuthAppState;
pub use router::auth_router;
