//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations that carry no domain vocabulary:
//! - Password hashing (Argon2id, fixed work factor, constant-time verification)

pub mod password;
