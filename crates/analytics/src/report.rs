use core_types::{EnrichedListing, ModelKey};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// How often a brand/model appears in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCount {
    pub model: ModelKey,
    pub count: usize,
}

/// The listing kept as the best offer for one brand/model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPick {
    pub model: ModelKey,
    pub listing: EnrichedListing,
}

/// The market report, one field per metric, in the order they are presented.
///
/// Metrics over an empty catalog are `None` or empty rather than errors.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketReport {
    /// Number of enriched listings the metrics were computed over.
    pub total_listings: usize,

    // 1. Most listed brand/model; first seen wins a tie.
    pub most_common_model: Option<ModelCount>,
    // 2. Highest asking prices, at most three.
    pub most_expensive: Vec<EnrichedListing>,
    // 3. Most minus least expensive listing in USD.
    pub usd_price_spread: Option<Decimal>,
    // 4. Listings per color.
    pub color_histogram: BTreeMap<String, usize>,
    // 5. One retained listing per brand/model, in first-seen order.
    pub best_value_per_model: Vec<ModelPick>,
    // 6. Prices closest to their benchmark, at most five.
    pub fairest_prices: Vec<EnrichedListing>,
    // 7. Mileages closest to their benchmark, at most five.
    pub fairest_mileage: Vec<EnrichedListing>,
}

impl MarketReport {
    pub fn is_empty(&self) -> bool {
        self.total_listings == 0
    }
}
