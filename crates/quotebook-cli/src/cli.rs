//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::BoardArgs;

/// Quotebook - Corporate bond quote catalog CLI
#[derive(Parser)]
#[command(name = "quotebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML). Defaults to ./quotebook.toml when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show sorted quote rows for the selected currency
    Rows(BoardArgs),

    /// Average and minimum per tenor and coupon type
    Stats(BoardArgs),

    /// List quoted currencies and their tenors
    Currencies(BoardArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (tab separated, no headers)
    Minimal,
}
