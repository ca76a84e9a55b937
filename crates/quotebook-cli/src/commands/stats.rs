//! Stats command implementation.
//!
//! Average and minimum of the selected field for every visible
//! (tenor, coupon type) cell.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use quotebook_engine::aggregation::{best_slice, SliceSummary};
use quotebook_engine::format::ABSENT;

use crate::cli::OutputFormat;
use crate::commands::{column_label, open_board, BoardArgs};
use crate::config::CliConfig;
use crate::output::{print_header, print_json, print_output};

#[derive(Tabled, Serialize)]
struct StatsRow {
    #[tabled(rename = "Cell")]
    cell: String,
    #[tabled(rename = "Quotes")]
    count: usize,
    #[tabled(rename = "Average")]
    average: String,
    #[tabled(rename = "Minimum")]
    minimum: String,
}

impl From<&SliceSummary> for StatsRow {
    fn from(summary: &SliceSummary) -> Self {
        Self {
            cell: column_label(summary.years, &summary.coupon_type),
            count: summary.count,
            average: summary
                .formatted_average()
                .unwrap_or_else(|| ABSENT.to_string()),
            minimum: summary
                .formatted_minimum()
                .unwrap_or_else(|| ABSENT.to_string()),
        }
    }
}

/// Execute the stats command.
pub fn execute(args: BoardArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let board = open_board(&args, config)?;
    let summaries = board.summary();

    match format {
        OutputFormat::Json => print_json(&summaries)?,
        OutputFormat::Table => {
            print_header(&format!(
                "{} {} by tenor",
                board.selected_currency(),
                board.selected_field().label()
            ));
            let rows: Vec<StatsRow> = summaries.iter().map(StatsRow::from).collect();
            print_output(&rows, format)?;

            if let Some(best) = best_slice(&summaries) {
                println!(
                    "Best: {} at {}",
                    best.formatted_minimum().unwrap_or_default(),
                    column_label(best.years, &best.coupon_type)
                );
            }
        }
        OutputFormat::Csv | OutputFormat::Minimal => {
            let rows: Vec<StatsRow> = summaries.iter().map(StatsRow::from).collect();
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
