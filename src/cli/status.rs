use super::ui;
use crate::core::{AccountStatus, RateClient};
use anyhow::{Context, Result};
use comfy_table::Cell;

impl AccountStatus {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Account"),
            ui::header_cell("Status"),
            ui::header_cell("Total"),
            ui::header_cell("Used"),
            ui::header_cell("Remaining"),
        ]);
        table.add_row(vec![
            Cell::new(&self.account_id),
            Cell::new(&self.account_status),
            ui::number_cell(self.quota.total.to_string()),
            ui::number_cell(self.quota.used.to_string()),
            ui::number_cell(self.quota.remaining.to_string()),
        ]);

        let mut output = format!(
            "{}\n\n{}",
            ui::style_text("Monthly quota", ui::StyleType::Title),
            table
        );
        if self.quota.is_exhausted() {
            output.push_str(&format!(
                "\n\n{}",
                ui::style_text(
                    "Quota exhausted, conversions will use fixed rates",
                    ui::StyleType::Warning
                )
            ));
        }
        output
    }
}

pub async fn run(client: &dyn RateClient) -> Result<AccountStatus> {
    let pb = ui::new_spinner("Fetching account status...");
    let status = client.get_status().await;
    pb.finish_and_clear();

    let status = status.context("Failed to fetch account status")?;
    println!("{}", status.display_as_table());
    Ok(status)
}
