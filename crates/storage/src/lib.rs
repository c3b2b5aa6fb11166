//! # Storage Crate
//!
//! The durable hand-off between the enrichment pass and the analytics pass: a
//! single, human-readable JSON file holding the enriched listings.
//!
//! ## Semantics
//!
//! - **Whole-file writes:** every save replaces the artifact entirely. There is
//!   no append mode and no transactional rename; a crash mid-write can leave a
//!   truncated file, which the next load reports as malformed.
//! - **Visible before read:** `save` returns only after the file is flushed and
//!   synced, so a subsequent `load` always sees the complete collection.
//!
//! ## Public API
//!
//! - `ArtifactStore`: writes and reads the enriched collection at a fixed path.
//! - `StorageError`: the specific error types that can be returned from this crate.

pub mod artifact;
pub mod error;

pub use artifact::ArtifactStore;
pub use error::StorageError;
