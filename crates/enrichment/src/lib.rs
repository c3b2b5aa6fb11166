//! # Enrichment Engine
//!
//! Joins vehicle listings against brand/model/year market benchmarks and a
//! single USD exchange rate, producing one `EnrichedListing` per listing.
//!
//! ## Join semantics
//!
//! - **Outer-join-left:** every listing yields exactly one enriched record, in
//!   input order. A listing without a benchmark is compared against zero, so its
//!   diffs equal its own price and mileage.
//! - **Last write wins:** if the benchmark source repeats a key, the later
//!   entry replaces the earlier one. Nothing is merged or averaged.
//! - **One rate:** every `price_usd` is derived from the same rate; a missing or
//!   non-positive rate falls back to 1.
//!
//! The join itself (`enrich`) is pure. `EnrichmentEngine` adds logging and the
//! hand-off to the artifact store.

pub mod engine;
pub mod error;
pub mod index;

pub use engine::{EnrichmentEngine, EnrichmentSummary, effective_rate, enrich};
pub use error::EnrichmentError;
pub use index::{BenchmarkAverages, BenchmarkIndex};
