//! Day-by-day rate series built from the fixed-rate table

use super::error::{Error, Result};
use super::fallback::FixedRateTable;
use chrono::{Duration, NaiveDate};

/// Longest series `fixed_rate_history` will build, roughly ten years.
pub const MAX_HISTORY_DAYS: u32 = 3650;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    /// One `(code, rate)` entry per requested currency, in request order.
    pub rates: Vec<(String, f64)>,
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Builds `days` points ending at `today`, oldest first.
///
/// Pairs missing from the table are reported as `0.0`; the identity pair is `1.0`.
pub fn fixed_rate_history(
    table: &FixedRateTable,
    base: &str,
    currencies: &[&str],
    days: u32,
    today: NaiveDate,
) -> Result<Vec<HistoryPoint>> {
    if days > MAX_HISTORY_DAYS {
        return Err(Error::Validation(format!(
            "History is limited to {MAX_HISTORY_DAYS} days, got {days}"
        )));
    }

    let rates: Vec<(String, f64)> = currencies
        .iter()
        .map(|code| {
            let rate = if *code == base {
                1.0
            } else {
                table.rate(base, code).unwrap_or(0.0)
            };
            (code.to_string(), round4(rate))
        })
        .collect();

    (0..days)
        .rev()
        .map(|offset| {
            let date = today
                .checked_sub_signed(Duration::days(i64::from(offset)))
                .ok_or_else(|| {
                    Error::Validation(format!("History date out of range: {today} - {offset} days"))
                })?;
            Ok(HistoryPoint {
                date,
                rates: rates.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_history_for_usd() {
        let history = fixed_rate_history(
            &FixedRateTable::new(),
            "USD",
            &["BRL", "USD", "EUR"],
            7,
            today(),
        )
        .unwrap();

        assert_eq!(history.len(), 7);
        assert_eq!(history[0].date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(history[6].date, today());
        for point in &history {
            assert_eq!(
                point.rates,
                vec![
                    ("BRL".to_string(), 5.0),
                    ("USD".to_string(), 1.0),
                    ("EUR".to_string(), 0.9)
                ]
            );
        }
    }

    #[test]
    fn test_history_rounds_to_four_decimals() {
        let table = FixedRateTable::new();
        let history = fixed_rate_history(&table, "BRL", &["EUR", "USD"], 1, today()).unwrap();
        assert_eq!(
            history[0].rates,
            vec![("EUR".to_string(), 0.1667), ("USD".to_string(), 0.2)]
        );
    }

    #[test]
    fn test_history_unknown_pair_is_zero() {
        let history =
            fixed_rate_history(&FixedRateTable::new(), "GBP", &["USD"], 2, today()).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].rates, vec![("USD".to_string(), 0.0)]);
    }

    #[test]
    fn test_history_with_no_days() {
        let history =
            fixed_rate_history(&FixedRateTable::new(), "USD", &["BRL"], 0, today()).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_day_limit() {
        let table = FixedRateTable::new();
        let history = fixed_rate_history(&table, "USD", &["BRL"], MAX_HISTORY_DAYS, today());
        assert_eq!(history.unwrap().len(), MAX_HISTORY_DAYS as usize);

        let err = fixed_rate_history(&table, "USD", &["BRL"], MAX_HISTORY_DAYS + 1, today())
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = fixed_rate_history(&table, "USD", &["BRL"], 100_000_000, today()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_history_near_minimum_date_fails_instead_of_panicking() {
        let err = fixed_rate_history(&FixedRateTable::new(), "USD", &["BRL"], 2, NaiveDate::MIN)
            .unwrap_err();
        assert!(err.to_string().contains("History date out of range"));
    }
}
