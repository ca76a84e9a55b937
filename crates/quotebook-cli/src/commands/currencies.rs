//! Currencies command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use quotebook_core::Tenor;
use quotebook_engine::filter::normalize_years;

use crate::cli::OutputFormat;
use crate::commands::{open_board, BoardArgs};
use crate::config::CliConfig;
use crate::output::{print_header, print_json, print_output};

#[derive(Tabled, Serialize)]
struct CurrencyRow {
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "Tenors")]
    tenors: String,
}

#[derive(Serialize)]
struct CurrencyRecord {
    currency: String,
    entries: usize,
    years: Vec<Tenor>,
}

/// Execute the currencies command.
///
/// Currencies come from the whole catalog; entry counts and tenors follow
/// the search, so a currency can show up with nothing under it.
pub fn execute(args: BoardArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let board = open_board(&args, config)?;

    let records: Vec<CurrencyRecord> = board
        .available_currencies()
        .iter()
        .map(|currency| CurrencyRecord {
            currency: currency.to_string(),
            entries: board
                .entries()
                .iter()
                .filter(|e| e.quotes_for(currency.as_str()).is_some())
                .count(),
            years: normalize_years(board.year_index().years(currency.as_str()).to_vec()),
        })
        .collect();

    if format == OutputFormat::Json {
        print_json(&records)?;
        return Ok(());
    }

    let rows: Vec<CurrencyRow> = records
        .into_iter()
        .map(|r| CurrencyRow {
            tenors: r
                .years
                .iter()
                .map(|y| format!("{y}Y"))
                .collect::<Vec<_>>()
                .join(" "),
            currency: r.currency,
            entries: r.entries,
        })
        .collect();

    if format == OutputFormat::Table {
        print_header("Quoted currencies");
    }
    print_output(&rows, format)?;
    Ok(())
}
