//! # Quotebook Engine
//!
//! Indexing, ordering, filtering and aggregation for the Quotebook bond
//! quote catalog.
//!
//! ## Design Philosophy
//!
//! - **Immutable snapshot**: The raw catalog is never mutated; every view is derived
//! - **Explicit dispatch**: Selection changes go through [`QuoteBoard::dispatch`]
//! - **Injected time**: The search debounce is driven by caller-supplied instants
//!
//! ## Quick Start
//!
//! ```rust
//! use quotebook_core::prelude::*;
//! use quotebook_engine::prelude::*;
//! use std::time::{Duration, Instant};
//!
//! let catalog = RawCatalog::new(vec![
//!     RawEntry::new("Acme Corp")
//!         .with_date_sent("2023-03-01")
//!         .with_quotes(vec![RawQuote::new("USD", 5, CouponType::Fixed).with_spread(120.0)]),
//!     RawEntry::new("Globex").with_date_sent("2023-04-01"),
//! ]);
//!
//! let mut board = QuoteBoard::with_defaults(catalog);
//! assert_eq!(board.selected_years(), &[5]);
//!
//! let t0 = Instant::now();
//! board.dispatch(BoardEvent::SetSearch("acme".into()), t0);
//! board.dispatch(BoardEvent::Tick, t0 + Duration::from_millis(500));
//! assert_eq!(board.entries().len(), 1);
//! ```
//!
//! ## Module Overview
//!
//! - [`indexer`] - Raw entries to indexed quote grids, plus the year index
//! - [`sort`] - Entry ordering with the preferred tie-break
//! - [`filter`] - Currency narrowing and visible tenor columns
//! - [`aggregation`] - Slice averages and minimums
//! - [`board`] - Selection state machine
//! - [`debounce`] - Single-slot debounce timer
//! - [`format`] - Display formatting of values

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregation;
pub mod board;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod format;
pub mod indexer;
pub mod sort;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregation::{average, best_slice, minimum, summarize, SliceSummary};
    pub use crate::board::{BoardEvent, Dirty, QuoteBoard, Selection};
    pub use crate::config::BoardConfig;
    pub use crate::debounce::Debouncer;
    pub use crate::error::{ConfigError, ConfigResult};
    pub use crate::filter::{apply_selection, visible_years, QuoteRow};
    pub use crate::format::{format_cell, format_value};
    pub use crate::indexer::{normalize, NormalizedCatalog, YearIndex};
    pub use crate::sort::{sort_entries, sorted};
}

pub use board::{BoardEvent, Dirty, QuoteBoard, Selection};
pub use config::BoardConfig;
pub use error::{ConfigError, ConfigResult};
