use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error("Failed to persist enriched listings: {0}")]
    Storage(#[from] storage::StorageError),
}
