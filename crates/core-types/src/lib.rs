//! # Core Types
//!
//! The shared vocabulary of the workspace: the raw records fetched from the
//! market data endpoints, the enriched record produced by the enrichment join,
//! and the composite keys both sides of the join agree on.
//!
//! This crate has no knowledge of HTTP, files or reporting. Every other crate
//! depends on it.

pub mod currency;
pub mod error;
pub mod keys;
pub mod structs;
pub mod usd;

// Re-export the core types to provide a clean public API.
pub use currency::CurrencyRates;
pub use error::CoreError;
pub use keys::{BenchmarkKey, ModelKey};
pub use structs::{EnrichedListing, Listing, MarketBenchmark};
pub use usd::UsdPrice;
