use crate::error::ConfigError;
use serde::Deserialize;
use std::time::Duration;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub sources: SourcesConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Where the three raw datasets come from and how hard to try fetching them.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// JSON array of vehicle listings.
    pub listings_url: String,
    /// JSON array of brand/model/year market averages.
    pub benchmarks_url: String,
    /// JSON object of currency quotes; only `USD.buy` is used.
    pub currency_url: String,
    /// Per-request timeout.
    pub request_timeout_secs: u64,
    /// Extra attempts after the first failed request.
    pub max_retries: u32,
    /// Delay before retry `n` is `n * retry_backoff_ms`.
    pub retry_backoff_ms: u64,
}

/// Location of the enriched artifact shared by the two passes.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub artifact_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    pub level: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    #[serde(default)]
    pub directory: Option<String>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let urls = [
            ("sources.listings_url", &self.sources.listings_url),
            ("sources.benchmarks_url", &self.sources.benchmarks_url),
            ("sources.currency_url", &self.sources.currency_url),
        ];
        for (name, url) in urls {
            if url.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!("{name} must not be empty")));
            }
        }
        if self.sources.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "sources.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.storage.artifact_path.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "storage.artifact_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl SourcesConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

// --- Default Implementations ---
// These are the public endpoints the tool was built against, so running
// without a config file works out of the box.

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            listings_url: "https://lm-models.s3.ir-thr-at1.arvanstorage.ir/cars.json".to_string(),
            benchmarks_url: "https://lm-models.s3.ir-thr-at1.arvanstorage.ir/market_prices.json"
                .to_string(),
            currency_url: "https://baha24.com/api/v1/price".to_string(),
            request_timeout_secs: 10,
            max_retries: 2,
            retry_backoff_ms: 500,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            artifact_path: "cars_data.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
