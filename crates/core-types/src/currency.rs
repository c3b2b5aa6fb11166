use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// Currency quotes keyed by currency code, as returned by the rates endpoint.
///
/// Each entry is kept as raw JSON; lookups are best-effort and any missing or
/// malformed level simply yields `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CurrencyRates(HashMap<String, Value>);

impl CurrencyRates {
    pub const USD: &'static str = "USD";

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `buy` rate for `code`, accepting either a JSON number or numeric text.
    pub fn buy_rate(&self, code: &str) -> Option<Decimal> {
        match self.0.get(code)?.get("buy")? {
            Value::Number(n) => parse_decimal(&n.to_string()),
            Value::String(s) => parse_decimal(s.trim()),
            _ => None,
        }
    }

    pub fn usd_buy_rate(&self) -> Option<Decimal> {
        self.buy_rate(Self::USD)
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
