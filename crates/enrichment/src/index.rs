use core_types::{BenchmarkKey, MarketBenchmark};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// The two benchmark values a listing is compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BenchmarkAverages {
    pub average_price: Decimal,
    pub average_mileage: Decimal,
}

/// Benchmarks keyed by brand, model and year.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkIndex {
    entries: HashMap<BenchmarkKey, BenchmarkAverages>,
    overwritten: usize,
}

impl BenchmarkIndex {
    /// Indexes `benchmarks` in order; a repeated key replaces the earlier entry.
    pub fn build(benchmarks: &[MarketBenchmark]) -> Self {
        benchmarks.iter().fold(Self::default(), |mut index, benchmark| {
            let averages = BenchmarkAverages {
                average_price: benchmark.average_price,
                average_mileage: benchmark.average_mileage,
            };
            if index.entries.insert(benchmark.key(), averages).is_some() {
                index.overwritten += 1;
            }
            index
        })
    }

    pub fn get(&self, key: &BenchmarkKey) -> Option<&BenchmarkAverages> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many benchmark rows were shadowed by a later row with the same key.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }
}
