//! JSON File Ledger
//!
//! The ledger is one pretty-printed JSON array. Appends hold an async mutex
//! across read-modify-write and replace the file via temp file + rename, so
//! concurrent publishes in this process never lose entries and readers never
//! see a half-written file.
//!
//! Elements are kept as raw JSON on append, so fields this server does not
//! know about survive a rewrite.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::entity::JournalEntry;
use crate::domain::repository::JournalLedger;
use crate::error::{JournalError, JournalResult};

#[derive(Debug)]
pub struct JsonFileLedger {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileLedger {
    /// Open the ledger at `path`, creating its parent directory
    ///
    /// The file itself is created on first append.
    pub async fn open(path: impl Into<PathBuf>) -> JournalResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(JournalError::LedgerWrite)?;
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or blank file is an empty ledger
    async fn read_raw(&self) -> JournalResult<Vec<Value>> {
        match fs::read_to_string(&self.path).await {
            Ok(data) if data.trim().is_empty() => Ok(Vec::new()),
            Ok(data) => serde_json::from_str(&data).map_err(JournalError::LedgerCorrupt),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(JournalError::LedgerRead(e)),
        }
    }
}

impl JournalLedger for JsonFileLedger {
    async fn append(&self, entry: &JournalEntry) -> JournalResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_raw().await?;
        entries.push(serde_json::to_value(entry).map_err(JournalError::LedgerEncode)?);

        let body = serde_json::to_vec_pretty(&entries).map_err(JournalError::LedgerEncode)?;
        write_atomic(&self.path, body)
            .await
            .map_err(JournalError::LedgerWrite)?;

        debug!(entries = entries.len(), "Ledger updated");
        Ok(())
    }

    async fn entries(&self) -> JournalResult<Vec<JournalEntry>> {
        self.read_raw()
            .await?
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(JournalError::LedgerCorrupt))
            .collect()
    }
}

/// Write `contents` to a fresh temp file beside `path` and persist it over `path`
///
/// The temp file gets a random dot-prefixed name, so concurrent writers never
/// share one and the static file server never exposes it.
async fn write_atomic(path: &Path, contents: Vec<u8>) -> io::Result<()> {
    let path = path.to_path_buf();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(&contents)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&path).map_err(|e| e.error)?;

        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}
