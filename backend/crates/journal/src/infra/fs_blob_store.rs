//! Filesystem Blob Store
//!
//! Each payload gets a fresh UUID name inside its role directory under the
//! content root. Files are created with `create_new`, so an existing file is
//! never overwritten.

use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use uuid::Uuid;

use crate::application::config::{FILES_DIR, IMAGES_DIR};
use crate::domain::entity::{BlobRole, StoredBlob};
use crate::domain::repository::BlobStore;
use crate::error::{JournalError, JournalResult};

#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Open the store, creating both role directories if needed
    pub async fn open(root: impl Into<PathBuf>) -> JournalResult<Self> {
        let root = root.into();

        for dir in [IMAGES_DIR, FILES_DIR] {
            fs::create_dir_all(root.join(dir))
                .await
                .map_err(JournalError::BlobStorage)?;
        }

        info!(root = %root.display(), "Blob store initialized");

        Ok(Self { root })
    }

    /// Absolute location of a path returned in [`StoredBlob::path`]
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    fn role_dir(role: BlobRole) -> &'static str {
        match role {
            BlobRole::Image => IMAGES_DIR,
            BlobRole::File => FILES_DIR,
        }
    }
}

impl BlobStore for FsBlobStore {
    async fn store(
        &self,
        role: BlobRole,
        original_name: &str,
        data: &[u8],
    ) -> JournalResult<StoredBlob> {
        let name = format!("{}{}", Uuid::new_v4(), extension_of(original_name));
        let relative = format!("{}/{}", Self::role_dir(role), name);
        let path = self.resolve(&relative);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(JournalError::BlobStorage)?;
        file.write_all(data)
            .await
            .map_err(JournalError::BlobStorage)?;
        file.flush().await.map_err(JournalError::BlobStorage)?;

        debug!(path = %relative, size = data.len(), "Stored upload");

        Ok(StoredBlob {
            role,
            path: relative,
            original_name: original_name.to_string(),
        })
    }
}

/// `.ext` of the client filename, or empty when it has none
///
/// Extensions containing anything but ASCII alphanumerics are dropped.
fn extension_of(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("cover.png"), ".png");
        assert_eq!(extension_of("paper.final.PDF"), ".PDF");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(""), "");
        assert_eq!(extension_of(".hidden"), "");
        assert_eq!(extension_of("weird.p hp"), "");
    }

    #[tokio::test]
    async fn test_open_creates_role_dirs() {
        let dir = TempDir::new().unwrap();
        FsBlobStore::open(dir.path()).await.unwrap();

        assert!(dir.path().join("journals/images").is_dir());
        assert!(dir.path().join("journals/files").is_dir());
    }

    #[tokio::test]
    async fn test_store_writes_under_role_dir() {
        let dir = TempDir::new().unwrap();
        let store = FsBlobStore::open(dir.path()).await.unwrap();

        let image = store
            .store(BlobRole::Image, "cover.png", b"png-bytes")
            .await
            .unwrap();
        let file = store
            .store(BlobRole::File, "paper.pdf", b"pdf-bytes")
            .await
            .unwrap();

        assert!(image.path.starts_with("journals/images/"));
        assert!(image.path.ends_with(".png"));
        assert!(file.path.starts_with("journals/files/"));
        assert!(file.path.ends_with(".pdf"));
        assert_eq!(std::fs::read(store.resolve(&image.path)).unwrap(), b"png-bytes");
        assert_eq!(std::fs::read(store.resolve(&file.path)).unwrap(), b"pdf-bytes");
    }

    #[tokio::test]
    async fn test_same_name_never_collides() {
        let dir = TempDir::new().unwrap();
        let store = FsBlobStore::open(dir.path()).await.unwrap();

        let a = store.store(BlobRole::File, "x.pdf", b"a").await.unwrap();
        let b = store.store(BlobRole::File, "x.pdf", b"b").await.unwrap();

        assert_ne!(a.path, b.path);
        assert_eq!(std::fs::read(store.resolve(&a.path)).unwrap(), b"a");
        assert_eq!(std::fs::read(store.resolve(&b.path)).unwrap(), b"b");
    }
}
