//! CLI command implementations.

pub mod currencies;
pub mod rows;
pub mod stats;

use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use quotebook_core::{CouponType, CurrencyCode, PricingField, SortColumn, SortOrder, Tenor};
use quotebook_engine::aggregation::coupon_types_at;
use quotebook_engine::{BoardConfig, QuoteBoard};
use quotebook_ext_json::load_catalog;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Catalog file and selections shared by every command.
///
/// Flags left unset fall back to the configuration file.
#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Catalog file (JSON document with an "Items" array)
    pub file: PathBuf,

    /// Currency to display, as written in the catalog (e.g. USD, EUR)
    #[arg(long)]
    pub currency: Option<String>,

    /// Case-insensitive company name search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort column: date or company
    #[arg(long)]
    pub sort: Option<SortColumn>,

    /// Sort direction: asc or desc
    #[arg(long)]
    pub order: Option<SortOrder>,

    /// Tenors to show (comma-separated, e.g. "2,5,10"). Defaults to all
    #[arg(short, long, value_delimiter = ',')]
    pub years: Vec<Tenor>,

    /// Pricing field: spread, yield or 3mlspread
    #[arg(long)]
    pub field: Option<PricingField>,
}

impl BoardArgs {
    /// Applies command-line overrides on top of the file configuration.
    pub fn board_config(&self, config: &CliConfig) -> BoardConfig {
        let mut board = config.board.clone();
        if let Some(currency) = &self.currency {
            board.default_currency = CurrencyCode::new(currency.as_str());
        }
        if let Some(column) = self.sort {
            board.sort_column = column;
        }
        if let Some(order) = self.order {
            board.sort_order = order;
        }
        if let Some(field) = self.field {
            board.field = field;
        }
        board
    }
}

/// Loads the catalog and drives a board to the requested selections.
///
/// The search is flushed at once; there is no typing to debounce here.
pub fn open_board(args: &BoardArgs, config: &CliConfig) -> CliResult<QuoteBoard> {
    let catalog = load_catalog(&args.file)?;
    let mut board = QuoteBoard::new(catalog, &args.board_config(config))?;

    if let Some(search) = &args.search {
        board.set_search(search.as_str(), Instant::now());
        board.flush_search();
    }
    if !args.years.is_empty() {
        board.set_selected_years(args.years.clone());
    }
    Ok(board)
}

/// (tenor, coupon type) cells shown for the current selection.
pub fn grid_columns(board: &QuoteBoard) -> Vec<(Tenor, CouponType)> {
    let currency = board.selected_currency().as_str();
    board
        .visible_years()
        .into_iter()
        .flat_map(|years| {
            coupon_types_at(board.entries(), currency, years)
                .into_iter()
                .map(move |coupon| (years, coupon))
        })
        .collect()
}

/// Column heading for a grid cell, e.g. `5Y FIX`.
pub fn column_label(years: Tenor, coupon: &CouponType) -> String {
    format!("{years}Y {coupon}")
}
