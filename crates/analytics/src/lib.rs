//! # Market Analytics Engine
//!
//! Descriptive statistics over the enriched vehicle catalog.
//!
//! ## Architectural Principles
//!
//! - **Pure metrics:** each of the seven metrics in [`metrics`] is a function of
//!   `&[EnrichedListing]` alone. None depends on another, and none reorders or
//!   mutates its input; ranking metrics sort their own view of references.
//! - **Stateless calculation:** `AnalyticsEngine` takes the enriched records and
//!   produces a `MarketReport`. Loading the records from the artifact is the
//!   only fallible step.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: loads the artifact and assembles the report.
//! - `MarketReport`: the seven metrics, in presentation order.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod metrics;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::{MarketReport, ModelCount, ModelPick};
