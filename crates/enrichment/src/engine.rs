use crate::error::EnrichmentError;
use crate::index::{BenchmarkAverages, BenchmarkIndex};
use core_types::{CurrencyRates, EnrichedListing, Listing, MarketBenchmark, UsdPrice};
use rust_decimal::Decimal;
use storage::ArtifactStore;
use tracing::{info, warn};

/// Counts describing one enrichment pass, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub listings: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub benchmarks_indexed: usize,
    pub benchmarks_overwritten: usize,
    pub exchange_rate: Decimal,
}

/// The rate actually used for conversion: `rate` when positive, otherwise 1.
pub fn effective_rate(rate: Option<Decimal>) -> Decimal {
    match rate {
        Some(rate) if rate > Decimal::ZERO => rate,
        _ => Decimal::ONE,
    }
}

/// Joins `listings` with `benchmarks` and converts prices with `currency_rate`.
///
/// The output has the same length and order as `listings`.
pub fn enrich(
    listings: &[Listing],
    benchmarks: &[MarketBenchmark],
    currency_rate: Option<Decimal>,
) -> Vec<EnrichedListing> {
    enrich_with_summary(listings, benchmarks, currency_rate).0
}

fn enrich_with_summary(
    listings: &[Listing],
    benchmarks: &[MarketBenchmark],
    currency_rate: Option<Decimal>,
) -> (Vec<EnrichedListing>, EnrichmentSummary) {
    let index = BenchmarkIndex::build(benchmarks);
    let rate = effective_rate(currency_rate);

    let mut matched = 0;
    let enriched: Vec<EnrichedListing> = listings
        .iter()
        .map(|listing| {
            let averages = match index.get(&listing.benchmark_key()) {
                Some(averages) => {
                    matched += 1;
                    *averages
                }
                // Unmatched listings are compared against zero, not skipped.
                None => BenchmarkAverages::default(),
            };
            enrich_one(listing, averages, rate)
        })
        .collect();

    let summary = EnrichmentSummary {
        listings: listings.len(),
        matched,
        unmatched: listings.len() - matched,
        benchmarks_indexed: index.len(),
        benchmarks_overwritten: index.overwritten(),
        exchange_rate: rate,
    };
    (enriched, summary)
}

fn enrich_one(listing: &Listing, averages: BenchmarkAverages, rate: Decimal) -> EnrichedListing {
    let mut listing = listing.clone();
    for field in EnrichedListing::DERIVED_FIELDS {
        listing.extra.remove(field);
    }

    EnrichedListing {
        price_diff_from_average: listing.price - averages.average_price,
        mileage_diff_from_average: listing.mileage - averages.average_mileage,
        price_usd: UsdPrice::convert(listing.price, rate),
        listing,
    }
}

/// Runs the enrichment join and persists the result.
#[derive(Debug, Clone)]
pub struct EnrichmentEngine {
    store: ArtifactStore,
}

impl EnrichmentEngine {
    pub fn new(store: ArtifactStore) -> Self {
        Self { store }
    }

    /// Enriches the listings, overwrites the artifact with the result and
    /// returns it. Only the write can fail.
    pub async fn run(
        &self,
        listings: &[Listing],
        benchmarks: &[MarketBenchmark],
        rates: &CurrencyRates,
    ) -> Result<Vec<EnrichedListing>, EnrichmentError> {
        let usd_rate = rates.usd_buy_rate();
        match usd_rate {
            Some(rate) if rate > Decimal::ZERO => {}
            Some(rate) => warn!(%rate, "USD buy rate is not positive; converting at 1."),
            None => warn!("USD buy rate unavailable; converting at 1."),
        }

        let (enriched, summary) = enrich_with_summary(listings, benchmarks, usd_rate);

        if summary.benchmarks_overwritten > 0 {
            warn!(
                overwritten = summary.benchmarks_overwritten,
                "Duplicate benchmark keys found; the last entry for each key was kept."
            );
        }
        info!(
            listings = summary.listings,
            matched = summary.matched,
            unmatched = summary.unmatched,
            benchmarks = summary.benchmarks_indexed,
            exchange_rate = %summary.exchange_rate,
            "Listings enriched."
        );

        self.store.save(&enriched).await?;
        Ok(enriched)
    }
}
