//! Rows command implementation.
//!
//! Prints the sorted catalog narrowed to the selected currency, one column
//! per visible (tenor, coupon type) cell.

use anyhow::Result;
use serde::Serialize;

use quotebook_core::{CouponType, Tenor};
use quotebook_engine::filter::QuoteRow;
use quotebook_engine::format::format_cell;
use quotebook_engine::QuoteBoard;

use crate::cli::OutputFormat;
use crate::commands::{column_label, grid_columns, open_board, BoardArgs};
use crate::config::CliConfig;
use crate::output::{print_grid, print_header, print_warning};

#[derive(Serialize)]
struct RowRecord<'a> {
    company: &'a str,
    date_sent: Option<&'a str>,
    preferred: &'a str,
    cells: Vec<CellRecord>,
}

#[derive(Serialize)]
struct CellRecord {
    years: Tenor,
    coupon_type: CouponType,
    value: Option<f64>,
    display: String,
}

/// Execute the rows command.
pub fn execute(args: BoardArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let board = open_board(&args, config)?;
    let columns = grid_columns(&board);
    let rows = board.rows();

    if !rows.is_empty() && !rows.iter().any(QuoteRow::has_currency) {
        print_warning(&format!("No entry is quoted in {}", board.selected_currency()));
    }

    if format == OutputFormat::Table {
        print_header(&format!(
            "{} quotes ({})",
            board.selected_currency(),
            board.selected_field().label()
        ));
    }

    let records: Vec<RowRecord<'_>> = rows
        .iter()
        .map(|row| to_record(&board, row, &columns))
        .collect();
    print_grid(
        &headers(&columns),
        &cells(&board, &rows, &columns),
        &records,
        format,
    )?;
    Ok(())
}

fn headers(columns: &[(Tenor, CouponType)]) -> Vec<String> {
    let mut headers = vec![
        "Company".to_string(),
        "Date Sent".to_string(),
        "Preferred".to_string(),
    ];
    headers.extend(columns.iter().map(|(years, coupon)| column_label(*years, coupon)));
    headers
}

fn cells(
    board: &QuoteBoard,
    rows: &[QuoteRow<'_>],
    columns: &[(Tenor, CouponType)],
) -> Vec<Vec<String>> {
    let field = board.selected_field();
    rows.iter()
        .map(|row| {
            let mut line = vec![
                row.company().to_string(),
                row.entry.date_sent.clone().unwrap_or_default(),
                row.entry.preferred.clone(),
            ];
            line.extend(
                columns
                    .iter()
                    .map(|(years, coupon)| format_cell(field, row.cell(*years, coupon, field))),
            );
            line
        })
        .collect()
}

fn to_record<'a>(
    board: &QuoteBoard,
    row: &QuoteRow<'a>,
    columns: &[(Tenor, CouponType)],
) -> RowRecord<'a> {
    let field = board.selected_field();
    RowRecord {
        company: row.company(),
        date_sent: row.entry.date_sent.as_deref(),
        preferred: &row.entry.preferred,
        cells: columns
            .iter()
            .map(|(years, coupon)| {
                let value = row.cell(*years, coupon, field);
                CellRecord {
                    years: *years,
                    coupon_type: coupon.clone(),
                    value,
                    display: format_cell(field, value),
                }
            })
            .collect(),
    }
}
