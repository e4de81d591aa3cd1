use super::{chart, ui};
use crate::core::config::{AssetConfig, ChartConfig};
use crate::core::{Dashboard, PriceRecord};
use comfy_table::{Cell, Table};

impl Dashboard {
    /// Renders the metrics, growth chart and raw data sections.
    pub fn display(&self, asset: &AssetConfig, chart_config: &ChartConfig) -> String {
        let mut output = format!(
            "{}\n{}\n\n",
            ui::style_text("The Hindsight Ledger", ui::StyleType::Title),
            ui::style_text(
                &format!(
                    "What if you had bought {} instead?",
                    asset.name
                ),
                ui::StyleType::Subtitle
            )
        );

        output.push_str(&self.metrics_table(asset).to_string());

        output.push_str(&format!("\n\n{}\n", ui::separator()));
        output.push_str(&format!(
            "{}\n\n",
            ui::style_text(
                &format!(
                    "Growth of {} Investment Over Time",
                    ui::format_currency(self.query.amount)
                ),
                ui::StyleType::TotalLabel
            )
        ));
        output.push_str(&chart::render(
            &self.projection,
            chart_config.width,
            chart_config.height,
        ));

        output.push_str(&format!("\n\n{}\n", ui::separator()));
        output.push_str(&format!(
            "{}\n",
            ui::style_text("Raw Data Snippet", ui::StyleType::TotalLabel)
        ));
        output.push_str(&raw_data_table(&self.recent).to_string());
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                "Parsed from a '~' delimited file; the purchase uses the closest available date.",
                ui::StyleType::Subtle
            )
        ));

        output
    }

    fn metrics_table(&self, asset: &AssetConfig) -> Table {
        let result = &self.result;
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell(&format!("Price on {}", result.resolved_date.format("%Y-%m-%d"))),
            ui::header_cell(&format!("Value on {}", result.current_date.format("%Y-%m-%d"))),
            ui::header_cell("ROI"),
            ui::header_cell("Annualized"),
            ui::header_cell(&format!("{} You'd Own", asset.symbol)),
        ]);

        let units = match &asset.glyph {
            Some(glyph) => format!("{glyph} {:.6}", result.units_owned),
            None => format!("{:.6} {}", result.units_owned, asset.symbol),
        };
        let annualized = match result.annualized_return_percent {
            Some(rate) => ui::change_cell(rate),
            None => ui::number_cell("N/A".to_string()),
        };

        table.add_row(vec![
            ui::number_cell(ui::format_currency(result.buy_price)),
            ui::number_cell(ui::format_currency(result.current_value)),
            ui::change_cell(result.roi_percent),
            annualized,
            ui::number_cell(units),
        ]);
        table
    }
}

fn raw_data_table(records: &[PriceRecord]) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("DATE"), ui::header_cell("CLOSE")]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.date.format("%Y-%m-%d")),
            ui::number_cell(format!("{:.2}", record.close)),
        ]);
    }
    table
}
