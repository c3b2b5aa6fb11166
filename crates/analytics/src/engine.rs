use crate::error::AnalyticsError;
use crate::metrics;
use crate::report::MarketReport;
use core_types::EnrichedListing;
use storage::ArtifactStore;
use tracing::info;

/// A stateless calculator for the market report.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reloads the persisted enriched listings and computes the report.
    ///
    /// A missing or unreadable artifact is returned as an error; no partial
    /// report is produced.
    pub async fn analyze(&self, store: &ArtifactStore) -> Result<MarketReport, AnalyticsError> {
        let listings = store.load().await?;
        Ok(self.calculate(&listings))
    }

    /// Computes every metric over `listings`.
    ///
    /// The metrics are independent of each other, so the order they are
    /// computed in here does not matter; `MarketReport` fixes the order they
    /// are presented in.
    pub fn calculate(&self, listings: &[EnrichedListing]) -> MarketReport {
        let report = MarketReport {
            total_listings: listings.len(),
            most_common_model: metrics::most_common_model(listings),
            most_expensive: metrics::most_expensive(listings),
            usd_price_spread: metrics::usd_price_spread(listings),
            color_histogram: metrics::color_histogram(listings),
            best_value_per_model: metrics::best_value_per_model(listings),
            fairest_prices: metrics::fairest_prices(listings),
            fairest_mileage: metrics::fairest_mileage(listings),
        };

        info!(
            listings = report.total_listings,
            models = report.best_value_per_model.len(),
            colors = report.color_histogram.len(),
            "Market report calculated."
        );
        report
    }
}
