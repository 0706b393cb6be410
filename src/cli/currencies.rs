use super::ui;
use crate::core::{Currency, RateClient};
use anyhow::{Context, Result};
use comfy_table::Cell;
use std::collections::HashMap;

pub fn display_as_table(currencies: &HashMap<String, Currency>) -> String {
    let mut sorted: Vec<&Currency> = currencies.values().collect();
    sorted.sort_by(|a, b| a.code.cmp(&b.code));

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Name"),
        ui::header_cell("Symbol"),
        ui::header_cell("Decimals"),
    ]);
    for currency in sorted {
        table.add_row(vec![
            Cell::new(&currency.code),
            Cell::new(&currency.name),
            Cell::new(&currency.symbol),
            ui::number_cell(currency.decimal_digits.to_string()),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text(
            &format!("Currencies ({})", currencies.len()),
            ui::StyleType::Title
        ),
        table
    )
}

pub async fn run(client: &dyn RateClient) -> Result<HashMap<String, Currency>> {
    let pb = ui::new_spinner("Fetching currencies...");
    let currencies = client.get_currencies().await;
    pb.finish_and_clear();

    let currencies = currencies.context("Failed to fetch currencies")?;
    println!("{}", display_as_table(&currencies));
    Ok(currencies)
}
