use crate::MarketDataSource;
use core_types::{CurrencyRates, Listing, MarketBenchmark};
use tracing::{error, info};

/// Everything the enrichment pass needs, fetched once per run.
#[derive(Debug, Clone, Default)]
pub struct MarketData {
    pub listings: Vec<Listing>,
    pub benchmarks: Vec<MarketBenchmark>,
    pub currency_rates: CurrencyRates,
}

/// Fetches the three datasets concurrently and waits for all of them.
///
/// A failed fetch never aborts the run: it is logged and replaced by an empty
/// collection (or empty rates), and enrichment proceeds on degraded data.
pub async fn acquire_all(source: &dyn MarketDataSource) -> MarketData {
    // The three sources are independent; this is the only join point before enrichment.
    let (listings, benchmarks, currency_rates) = tokio::join!(
        source.fetch_listings(),
        source.fetch_benchmarks(),
        source.fetch_currency_rates()
    );

    let listings = listings.unwrap_or_else(|e| {
        error!(error = %e, "Error fetching listings; continuing with none.");
        Vec::new()
    });
    let benchmarks = benchmarks.unwrap_or_else(|e| {
        error!(error = %e, "Error fetching market benchmarks; continuing with none.");
        Vec::new()
    });
    let currency_rates = currency_rates.unwrap_or_else(|e| {
        error!(error = %e, "Error fetching currency rates; continuing without them.");
        CurrencyRates::default()
    });

    info!(
        listings = listings.len(),
        benchmarks = benchmarks.len(),
        has_usd_rate = currency_rates.usd_buy_rate().is_some(),
        "Market data acquired."
    );

    MarketData {
        listings,
        benchmarks,
        currency_rates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use serde_json::{json, Map};

    /// Serves fixed data, or fails every call when `failing` is set.
    struct CannedSource {
        failing: bool,
    }

    fn listing() -> Listing {
        Listing {
            brand: "BMW".into(),
            model: "X1".into(),
            year: 2020,
            price: dec!(100),
            mileage: dec!(10),
            color: "white".into(),
            extra: Map::new(),
        }
    }

    #[async_trait]
    impl MarketDataSource for CannedSource {
        async fn fetch_listings(&self) -> Result<Vec<Listing>, ApiError> {
            if self.failing {
                return Err(ApiError::Status(500, "boom".into()));
            }
            Ok(vec![listing()])
        }

        async fn fetch_benchmarks(&self) -> Result<Vec<MarketBenchmark>, ApiError> {
            if self.failing {
                return Err(ApiError::Deserialization("bad json".into()));
            }
            Ok(vec![MarketBenchmark {
                brand: "BMW".into(),
                model: "X1".into(),
                year: 2020,
                average_price: dec!(90),
                average_mileage: dec!(20),
            }])
        }

        async fn fetch_currency_rates(&self) -> Result<CurrencyRates, ApiError> {
            if self.failing {
                return Err(ApiError::Status(503, String::new()));
            }
            Ok(serde_json::from_value(json!({"USD": {"buy": 50000, "sell": 51000}})).unwrap())
        }
    }

    #[tokio::test]
    async fn passes_through_successful_fetches() {
        let data = acquire_all(&CannedSource { failing: false }).await;

        assert_eq!(data.listings, vec![listing()]);
        assert_eq!(data.benchmarks.len(), 1);
        assert_eq!(data.currency_rates.usd_buy_rate(), Some(dec!(50000)));
    }

    #[tokio::test]
    async fn failed_fetches_degrade_to_empty() {
        let data = acquire_all(&CannedSource { failing: true }).await;

        assert!(data.listings.is_empty());
        assert!(data.benchmarks.is_empty());
        assert!(data.currency_rates.is_empty());
    }
}
