use crate::error::ApiError;
use async_trait::async_trait;
use configuration::SourcesConfig;
use core_types::{CurrencyRates, Listing, MarketBenchmark};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub mod acquisition;
pub mod error;
// --- Public API ---
pub use acquisition::{acquire_all, MarketData};

/// Longest error body echoed back in an `ApiError::Status`.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// The interface to the three remote datasets the tool works from.
/// The orchestration only sees this trait, so the HTTP implementation can be
/// swapped for a canned one in tests.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetches the vehicle listings to enrich.
    async fn fetch_listings(&self) -> Result<Vec<Listing>, ApiError>;

    /// Fetches the brand/model/year market averages.
    async fn fetch_benchmarks(&self) -> Result<Vec<MarketBenchmark>, ApiError>;

    /// Fetches the current currency quotes.
    async fn fetch_currency_rates(&self) -> Result<CurrencyRates, ApiError>;
}

/// A `MarketDataSource` backed by plain HTTP GETs returning JSON.
#[derive(Clone)]
pub struct HttpMarketDataSource {
    client: reqwest::Client,
    config: SourcesConfig,
}

impl HttpMarketDataSource {
    pub fn new(config: &SourcesConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// GETs `url`, retrying transient failures up to `max_retries` times with a
    /// linearly growing delay.
    async fn get_json<T: DeserializeOwned>(&self, dataset: &str, url: &str) -> Result<T, ApiError> {
        let mut attempt: u32 = 0;
        loop {
            match self.get_once(url).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = backoff_delay(self.config.retry_backoff(), attempt);
                    warn!(dataset, attempt, error = %e, "Fetch failed, retrying in {:?}.", delay);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// GETs a JSON array and decodes it one record at a time. Records that do
    /// not fit `T` are logged and skipped; the rest of the payload is kept.
    async fn get_records<T: DeserializeOwned>(&self, dataset: &str, url: &str) -> Result<Vec<T>, ApiError> {
        let raw: Vec<Value> = self.get_json(dataset, url).await?;
        Ok(parse_records(dataset, raw))
    }

    async fn get_once<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<T>(&text).map_err(|e| ApiError::Deserialization(e.to_string()))
        } else {
            let body: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
            Err(ApiError::Status(status.as_u16(), body))
        }
    }
}

fn parse_records<T: DeserializeOwned>(dataset: &str, raw: Vec<Value>) -> Vec<T> {
    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(dataset, index, error = %e, "Skipping unreadable record.");
                None
            }
        })
        .collect();

    if records.len() < total {
        warn!(dataset, kept = records.len(), skipped = total - records.len(), "Some records were skipped.");
    }
    records
}

fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(attempt)
}

#[async_trait]
impl MarketDataSource for HttpMarketDataSource {
    async fn fetch_listings(&self) -> Result<Vec<Listing>, ApiError> {
        self.get_records("listings", &self.config.listings_url).await
    }

    async fn fetch_benchmarks(&self) -> Result<Vec<MarketBenchmark>, ApiError> {
        self.get_records("benchmarks", &self.config.benchmarks_url).await
    }

    async fn fetch_currency_rates(&self) -> Result<CurrencyRates, ApiError> {
        self.get_json("currency", &self.config.currency_url).await
    }
}
