//! Filesystem-backed content store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use async_walkdir::WalkDir;
use futures::StreamExt;
use lectio_core::{Error, Result};

use crate::traits::ContentStore;

/// Content store backed by a single directory of text files.
///
/// The namespace is flat: only files directly under the root are visible.
/// Subdirectories are ignored. A missing root directory behaves as an empty
/// store for listing (with a warning), since that is indistinguishable from
/// a store with no resources yet.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store over the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ContentStore for FsStore {
    async fn exists(&self, name: &str) -> Result<bool> {
        let path = self.root.join(name);
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| Error::io_with_path(e, &path))
    }

    async fn read(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::not_found(name)),
            Err(e) => Err(Error::io_with_path(e, &path)),
        }
    }

    async fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut walker = WalkDir::new(&self.root);

        while let Some(entry) = walker.next().await {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::warn!("Walk error while listing {}: {e}", self.root.display());
                    continue;
                }
            };

            let path = entry.path();

            // Flat namespace: skip directories and anything nested deeper
            if path.is_dir() || path.parent() != Some(self.root.as_path()) {
                continue;
            }

            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

// ============================================================================
// Tests
// ============================================================================
