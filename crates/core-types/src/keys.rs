use std::fmt;

/// The join key between a listing and its market benchmark.
///
/// Brand, model and year are joined with a single space. Differently formatted
/// parts can collide (`"Land" + "Rover X"` vs `"Land Rover" + "X"`); that is a
/// known limitation of the upstream data, not something this type tries to fix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BenchmarkKey(String);

impl BenchmarkKey {
    pub fn new(brand: &str, model: &str, year: i32) -> Self {
        Self(format!("{brand} {model} {year}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BenchmarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The grouping key used by the per-model report metrics, e.g. `"BMW X1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelKey(String);

impl ModelKey {
    pub fn new(brand: &str, model: &str) -> Self {
        Self(format!("{brand} {model}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
