//! Quotebook CLI - Command-line interface for the bond quote catalog.
//!
//! # Usage
//!
//! ```bash
//! # Show USD quotes, newest first
//! quotebook rows quotes.json
//!
//! # Search, sort by company and show yields for two tenors
//! quotebook rows quotes.json --search acme --sort company --order asc --years 5,10 --field yield
//!
//! # Average and minimum per tenor and coupon type
//! quotebook stats quotes.json --currency EUR
//!
//! # Currencies and their tenors
//! quotebook --format json currencies quotes.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = config::CliConfig::load(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Rows(args) => commands::rows::execute(args, &config, format)?,
        Commands::Stats(args) => commands::stats::execute(args, &config, format)?,
        Commands::Currencies(args) => commands::currencies::execute(args, &config, format)?,
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("quotebook=debug,quotebook_engine=debug,quotebook_ext_json=debug")
    } else {
        EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
