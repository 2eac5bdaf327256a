//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, password value objects, repository trait
//! - `application/` - Registration and login use cases
//! - `infra/` - PostgreSQL and in-memory user stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration with email + username + password and arbitrary profile fields
//! - Login with email or username + password
//!
//! ## Security Model
//! - Passwords hashed with Argon2id at a fixed work factor
//! - Email and username are unique, enforced by the store itself
//! - Unknown user and wrong password produce the same error
//! - Login responses never include the password hash

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::router::auth_router;
