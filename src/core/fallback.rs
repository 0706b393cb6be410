//! Fixed exchange rates used when live rates cannot be fetched.
//!
//! Each direction is listed on its own. The pairs are not all exact inverses
//! of each other and must not be derived from one another.

use super::error::{Error, Result};

const FIXED_RATES: &[(&str, &[(&str, f64)])] = &[
    ("USD", &[("BRL", 5.0), ("EUR", 0.9)]),
    ("EUR", &[("BRL", 6.0), ("USD", 1.0 / 0.9)]),
    ("BRL", &[("USD", 1.0 / 5.0), ("EUR", 1.0 / 6.0)]),
];

#[derive(Debug, Clone, Copy)]
pub struct FixedRateTable {
    rates: &'static [(&'static str, &'static [(&'static str, f64)])],
}

impl Default for FixedRateTable {
    fn default() -> Self {
        Self { rates: FIXED_RATES }
    }
}

impl FixedRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the multiplier for `from -> to`, or `None` when either key is absent.
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        self.rates
            .iter()
            .find(|(base, _)| *base == from)
            .and_then(|(_, targets)| targets.iter().find(|(code, _)| *code == to))
            .map(|(_, rate)| *rate)
    }

    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<(f64, f64)> {
        let rate = self
            .rate(from, to)
            .ok_or_else(|| Error::UnsupportedConversion {
                from: from.to_string(),
                to: to.to_string(),
            })?;
        Ok((amount * rate, rate))
    }

    pub fn bases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rates.iter().map(|(base, _)| *base)
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &'static str, f64)> + '_ {
        self.rates.iter().flat_map(|(base, targets)| {
            targets.iter().map(move |(code, rate)| (*base, *code, *rate))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_literal_rates() {
        let table = FixedRateTable::new();
        assert_eq!(table.rate("USD", "BRL"), Some(5.0));
        assert_eq!(table.rate("USD", "EUR"), Some(0.9));
        assert_eq!(table.rate("EUR", "BRL"), Some(6.0));
        assert_eq!(table.rate("EUR", "USD"), Some(1.0 / 0.9));
        assert_eq!(table.rate("BRL", "USD"), Some(1.0 / 5.0));
        assert_eq!(table.rate("BRL", "EUR"), Some(1.0 / 6.0));
    }

    #[test]
    fn test_missing_keys_are_not_zero() {
        let table = FixedRateTable::new();
        assert_eq!(table.rate("GBP", "USD"), None);
        assert_eq!(table.rate("USD", "GBP"), None);
        assert_eq!(table.rate("USD", "USD"), None);
    }

    #[test]
    fn test_convert_multiplies_amount() {
        let table = FixedRateTable::new();
        for amount in [0.0, 1.0, 10.0, 123.45, 1_000_000.0] {
            for (from, to, rate) in table.pairs() {
                let (value, used) = table.convert(amount, from, to).unwrap();
                assert_eq!(used, rate);
                assert_relative_eq!(value, amount * rate);
            }
        }
    }

    #[test]
    fn test_convert_brl_to_eur() {
        let (value, rate) = FixedRateTable::new().convert(10.0, "BRL", "EUR").unwrap();
        assert_relative_eq!(value, 1.6667, epsilon = 1e-4);
        assert_relative_eq!(rate, 1.0 / 6.0);
    }

    #[test]
    fn test_convert_unsupported_pair() {
        let err = FixedRateTable::new()
            .convert(10.0, "JPY", "BRL")
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedConversion {
                from: "JPY".to_string(),
                to: "BRL".to_string()
            }
        );
    }

    #[test]
    fn test_round_trip_uses_each_direction_literally() {
        let table = FixedRateTable::new();
        let (brl, _) = table.convert(100.0, "EUR", "BRL").unwrap();
        let (back, _) = table.convert(brl, "BRL", "EUR").unwrap();
        assert_relative_eq!(brl, 600.0);
        assert_relative_eq!(back, brl * (1.0 / 6.0));

        let (eur, _) = table.convert(100.0, "USD", "EUR").unwrap();
        let (usd, _) = table.convert(eur, "EUR", "USD").unwrap();
        assert_relative_eq!(eur, 90.0, epsilon = 1e-9);
        assert_relative_eq!(usd, eur * (1.0 / 0.9));
        assert_relative_eq!(usd, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bases_and_pairs() {
        let table = FixedRateTable::new();
        assert_eq!(table.bases().collect::<Vec<_>>(), vec!["USD", "EUR", "BRL"]);
        assert_eq!(table.pairs().count(), 6);
    }
}
