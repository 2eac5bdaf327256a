//! Server configuration loaded from environment variables.
//!
//! Only `DATABASE_URL` is required; everything else has a default.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use auth::AuthConfig;
use journal::JournalConfig;
use journal::application::config::DEFAULT_MAX_UPLOAD_BYTES;

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Clone)]
pub struct ServerConfig {
    /// Env: `DATABASE_URL` (required)
    pub database_url: String,

    /// Env: `PORT`, bound on all interfaces
    /// Default: `3001`
    pub http_addr: SocketAddr,

    /// Directory served as static content and holding `journals/`.
    /// Env: `CONTENT_ROOT`
    /// Default: `.`
    pub content_root: PathBuf,

    /// Env: `MAX_UPLOAD_BYTES`
    /// Default: 200 MiB
    pub max_upload_bytes: usize,

    /// Env: `PASSWORD_PEPPER`
    pub password_pepper: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .context("DATABASE_URL must be set in environment")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("Invalid MAX_UPLOAD_BYTES: {raw}"))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            database_url,
            http_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            content_root: lookup("CONTENT_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            max_upload_bytes,
            password_pepper: lookup("PASSWORD_PEPPER").filter(|p| !p.is_empty()),
        })
    }

    pub fn auth_config(&self) -> AuthConfig {
        match &self.password_pepper {
            Some(pepper) => AuthConfig::with_pepper(pepper.as_bytes()),
            None => AuthConfig::default(),
        }
    }

    pub fn journal_config(&self) -> JournalConfig {
        JournalConfig::new(&self.content_root).with_max_upload_bytes(self.max_upload_bytes)
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &"[REDACTED]")
            .field("http_addr", &self.http_addr)
            .field("content_root", &self.content_root)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
