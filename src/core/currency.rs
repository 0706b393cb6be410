//! Currency reference data, rates and the rate client abstraction

use super::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub symbol_native: String,
    pub decimal_digits: u32,
    #[serde(default)]
    pub rounding: f64,
    #[serde(default)]
    pub name_plural: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub countries: Vec<String>,
}

/// Units of `code` per one unit of the base the rate was fetched against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub code: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LatestRates {
    pub base: String,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub rates: HashMap<String, ExchangeRate>,
}

impl LatestRates {
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).map(|r| r.value)
    }
}

/// Monthly request accounting reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    pub total: u64,
    pub used: u64,
    pub remaining: u64,
}

impl Quota {
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountStatus {
    pub account_id: String,
    pub account_status: String,
    pub quota: Quota,
}

#[async_trait]
pub trait RateClient: Send + Sync {
    async fn get_status(&self) -> Result<AccountStatus>;

    async fn get_currencies(&self) -> Result<HashMap<String, Currency>>;

    async fn get_latest_rates(&self, base: &str, targets: &[&str]) -> Result<LatestRates>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_deserialization() {
        let json = r#"{
            "symbol": "R$",
            "name": "Brazilian Real",
            "symbol_native": "R$",
            "decimal_digits": 2,
            "rounding": 0,
            "code": "BRL",
            "name_plural": "Brazilian reals",
            "type": "fiat",
            "countries": ["BR"]
        }"#;

        let currency: Currency = serde_json::from_str(json).unwrap();
        assert_eq!(currency.code, "BRL");
        assert_eq!(currency.name, "Brazilian Real");
        assert_eq!(currency.decimal_digits, 2);
        assert_eq!(currency.kind, "fiat");
        assert_eq!(currency.countries, vec!["BR".to_string()]);
    }

    #[test]
    fn test_currency_deserialization_with_minimal_fields() {
        let json = r#"{"symbol": "$", "name": "US Dollar", "decimal_digits": 2, "code": "USD"}"#;

        let currency: Currency = serde_json::from_str(json).unwrap();
        assert_eq!(currency.code, "USD");
        assert!(currency.symbol_native.is_empty());
        assert!(currency.countries.is_empty());
    }

    #[test]
    fn test_quota_exhausted_only_at_zero() {
        let exhausted = Quota {
            total: 300,
            used: 300,
            remaining: 0,
        };
        let available = Quota {
            total: 300,
            used: 299,
            remaining: 1,
        };
        assert!(exhausted.is_exhausted());
        assert!(!available.is_exhausted());
    }

    #[test]
    fn test_latest_rates_lookup_is_scoped_to_code() {
        let rates = LatestRates {
            base: "USD".to_string(),
            last_updated_at: None,
            rates: HashMap::from([(
                "BRL".to_string(),
                ExchangeRate {
                    code: "BRL".to_string(),
                    value: 5.1,
                },
            )]),
        };
        assert_eq!(rates.rate("BRL"), Some(5.1));
        assert_eq!(rates.rate("EUR"), None);
    }
}
