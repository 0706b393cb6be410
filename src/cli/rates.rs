use super::ui;
use crate::core::{LatestRates, RateClient};
use anyhow::{Context, Result};
use comfy_table::Cell;

impl LatestRates {
    pub fn display_as_table(&self) -> String {
        let mut codes: Vec<&String> = self.rates.keys().collect();
        codes.sort();

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell(&format!("Rate (per 1 {})", self.base)),
        ]);
        for code in codes {
            table.add_row(vec![
                Cell::new(code),
                ui::format_optional_cell(self.rate(code), |r| format!("{r:.4}")),
            ]);
        }

        let updated = self
            .last_updated_at
            .map_or("N/A".to_string(), |t| {
                t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
            });
        format!(
            "Latest rates: {}\n\n{}\n\n{}",
            ui::style_text(&self.base, ui::StyleType::Title),
            table,
            ui::style_text(&format!("Updated: {updated}"), ui::StyleType::Subtle)
        )
    }
}

pub async fn run(client: &dyn RateClient, base: &str, codes: &[String]) -> Result<LatestRates> {
    let targets: Vec<&str> = codes.iter().map(String::as_str).collect();

    let pb = ui::new_spinner("Fetching latest rates...");
    let latest = client.get_latest_rates(base, &targets).await;
    pb.finish_and_clear();

    let latest = latest.with_context(|| format!("Failed to fetch latest rates for {base}"))?;
    println!("{}", latest.display_as_table());
    Ok(latest)
}
