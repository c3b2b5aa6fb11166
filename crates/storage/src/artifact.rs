use crate::error::StorageError;
use core_types::EnrichedListing;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Reads and writes the enriched-listing artifact at one path.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    path: PathBuf,
}

impl ArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the artifact with `listings` as an indented JSON array.
    pub async fn save(&self, listings: &[EnrichedListing]) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(listings)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.write_error(e))?;
            }
        }

        let mut file = tokio::fs::File::create(&self.path)
            .await
            .map_err(|e| self.write_error(e))?;
        file.write_all(&json).await.map_err(|e| self.write_error(e))?;
        file.flush().await.map_err(|e| self.write_error(e))?;
        file.sync_all().await.map_err(|e| self.write_error(e))?;

        info!(path = %self.path.display(), records = listings.len(), "Enriched listings saved.");
        Ok(())
    }

    /// Reads the whole artifact back. A missing or malformed file is an error.
    pub async fn load(&self) -> Result<Vec<EnrichedListing>, StorageError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StorageError::Read {
                path: self.path.clone(),
                source,
            })?;

        let listings: Vec<EnrichedListing> =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), records = listings.len(), "Enriched listings loaded.");
        Ok(listings)
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
