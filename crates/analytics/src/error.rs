use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Could not load the enriched listings: {0}")]
    Storage(#[from] storage::StorageError),
}
