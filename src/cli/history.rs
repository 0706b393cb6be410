use super::ui;
use crate::core::FixedRateTable;
use crate::core::history::{HistoryPoint, fixed_rate_history};
use anyhow::{Context, Result, bail};
use chrono::Local;
use comfy_table::Cell;

pub const DEFAULT_CURRENCIES: [&str; 3] = ["BRL", "USD", "EUR"];

pub fn display_as_table(base: &str, history: &[HistoryPoint]) -> String {
    let mut table = ui::new_styled_table();

    let mut header = vec![ui::header_cell("Date")];
    if let Some(first) = history.first() {
        header.extend(first.rates.iter().map(|(code, _)| ui::header_cell(code)));
    }
    table.set_header(header);

    for point in history {
        let mut row = vec![Cell::new(point.date.format("%d/%m").to_string())];
        row.extend(
            point
                .rates
                .iter()
                .map(|(_, rate)| ui::number_cell(format!("{rate:.4}"))),
        );
        table.add_row(row);
    }

    format!(
        "Fixed-rate history: {}\n\n{}",
        ui::style_text(base, ui::StyleType::Title),
        table
    )
}

pub fn run(base: &str, codes: &[String], days: u32) -> Result<Vec<HistoryPoint>> {
    let table = FixedRateTable::new();
    if !table.bases().any(|b| b == base) {
        bail!(
            "No fixed rates for base currency {base}, supported: {}",
            table.bases().collect::<Vec<_>>().join(", ")
        );
    }

    let currencies: Vec<&str> = if codes.is_empty() {
        DEFAULT_CURRENCIES.to_vec()
    } else {
        codes.iter().map(String::as_str).collect()
    };

    let history = fixed_rate_history(&table, base, &currencies, days, Local::now().date_naive())
        .with_context(|| format!("Failed to build {days}-day history for {base}"))?;
    println!("{}", display_as_table(base, &history));
    Ok(history)
}
