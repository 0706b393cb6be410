use super::ui;
use crate::core::{ConversionPolicy, ConversionRequest, ConversionResult, RateSource};
use anyhow::Result;
use comfy_table::Cell;

impl ConversionResult {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Amount"),
            ui::header_cell(&format!("Value ({})", self.to)),
            ui::header_cell("Rate"),
            ui::header_cell("Updated"),
            ui::header_cell("Source"),
        ]);

        let source = match &self.source {
            RateSource::Live { .. } => "live".to_string(),
            RateSource::Fallback { reason } => format!("fixed ({reason})"),
        };

        table.add_row(vec![
            ui::number_cell(format!("{:.2} {}", self.amount, self.from)),
            ui::number_cell(format!("{:.2}", self.value)),
            ui::number_cell(format!("1 {} = {:.4} {}", self.from, self.rate, self.to)),
            ui::format_optional_cell(self.last_updated_at(), |t| {
                t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
            }),
            Cell::new(source),
        ]);

        let mut output = format!(
            "Conversion: {}\n\n",
            ui::style_text(&format!("{} -> {}", self.from, self.to), ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\n{}: {}",
            ui::style_text("Result", ui::StyleType::Label),
            ui::style_text(&format!("{:.2} {}", self.value, self.to), ui::StyleType::Value)
        ));
        if self.is_fallback() {
            output.push_str(&format!(
                "\n{}",
                ui::style_text(
                    "Live rates unavailable, fixed rates were used",
                    ui::StyleType::Warning
                )
            ));
        }
        output
    }
}

pub async fn run(
    policy: &ConversionPolicy,
    request: &ConversionRequest,
) -> Result<ConversionResult> {
    let pb = ui::new_spinner("Converting...");
    let result = policy.convert(request).await;
    pb.finish_and_clear();

    let result = result?;
    println!("{}", result.display_as_table());
    Ok(result)
}
