use crate::error::CoreError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A price converted to US dollars, held at exactly two decimal places.
///
/// On the wire this is decimal text (`"10.00"`), never a float, so the
/// persisted artifact keeps the fixed two-decimal formatting. Arithmetic goes
/// through [`UsdPrice::amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UsdPrice(Decimal);

impl UsdPrice {
    /// Rounds `amount` half away from zero to two decimals.
    pub fn new(amount: Decimal) -> Self {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        Self(rounded)
    }

    /// Converts a local-currency price using `rate` local units per dollar.
    /// The caller guarantees `rate` is positive.
    pub fn convert(local_price: Decimal, rate: Decimal) -> Self {
        Self::new(local_price / rate)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for UsdPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UsdPrice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self::new)
            .map_err(|e| CoreError::InvalidUsdPrice(s.to_string(), e))
    }
}

impl TryFrom<String> for UsdPrice {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UsdPrice> for String {
    fn from(value: UsdPrice) -> Self {
        value.to_string()
    }
}
