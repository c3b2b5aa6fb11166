use crate::keys::{BenchmarkKey, ModelKey};
use crate::usd::UsdPrice;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single vehicle offered for sale.
///
/// Fields the tool does not understand are kept in `extra` and written back
/// untouched next to the known ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub brand: String,
    pub model: String,
    pub year: i32,
    /// Asking price in local currency.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub mileage: Decimal,
    #[serde(default)]
    pub color: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Listing {
    pub fn benchmark_key(&self) -> BenchmarkKey {
        BenchmarkKey::new(&self.brand, &self.model, self.year)
    }

    pub fn model_key(&self) -> ModelKey {
        ModelKey::new(&self.brand, &self.model)
    }
}

/// Market-wide averages for one brand/model/year.
///
/// A missing or null average reads as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketBenchmark {
    pub brand: String,
    pub model: String,
    pub year: i32,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "decimal_or_zero"
    )]
    pub average_price: Decimal,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "decimal_or_zero"
    )]
    pub average_mileage: Decimal,
}

fn decimal_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    rust_decimal::serde::float_option::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl MarketBenchmark {
    pub fn key(&self) -> BenchmarkKey {
        BenchmarkKey::new(&self.brand, &self.model, self.year)
    }
}

/// A listing plus its comparison against the market.
///
/// This is the record persisted to the artifact and read back by the
/// analytics pass. The listing's own fields are flattened so the JSON keeps
/// the shape of the source record with three extra keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedListing {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_diff_from_average: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub mileage_diff_from_average: Decimal,
    pub price_usd: UsdPrice,
}

impl EnrichedListing {
    /// Keys written by enrichment. A source listing carrying any of these has
    /// them replaced, never duplicated.
    pub const DERIVED_FIELDS: [&'static str; 3] = [
        "price_diff_from_average",
        "mileage_diff_from_average",
        "price_usd",
    ];

    pub fn model_key(&self) -> ModelKey {
        self.listing.model_key()
    }

    pub fn price(&self) -> Decimal {
        self.listing.price
    }

    pub fn mileage(&self) -> Decimal {
        self.listing.mileage
    }
}
