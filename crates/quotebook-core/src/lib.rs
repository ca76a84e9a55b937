//! # Quotebook Core
//!
//! Core types for the Quotebook corporate bond quote catalog.
//!
//! - **Catalog**: The raw `{ "Items": [...] }` document ([`RawCatalog`])
//! - **Grid**: Quotes indexed by currency, tenor and coupon type ([`QuoteGrid`])
//! - **Entries**: Catalog entries with indexed quotes ([`NormalizedEntry`])
//! - **Types**: Selection values such as [`PricingField`] and [`SortOrder`]
//!
//! ## Example
//!
//! ```rust
//! use quotebook_core::prelude::*;
//!
//! let mut grid = QuoteGrid::new();
//! grid.insert(RawQuote::new("USD", 5, CouponType::Fixed).with_spread(120.0));
//!
//! assert_eq!(
//!     grid.value("USD", 5, &CouponType::Fixed, PricingField::Spread),
//!     Some(120.0)
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod entry;
pub mod error;
pub mod grid;
mod lenient;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::{RawCatalog, RawEntry, RawQuote};
    pub use crate::entry::NormalizedEntry;
    pub use crate::error::{QuotebookError, QuotebookResult};
    pub use crate::grid::{CouponQuotes, QuoteGrid, TenorQuotes};
    pub use crate::types::{CouponType, CurrencyCode, PricingField, SortColumn, SortOrder, Tenor};
}

pub use catalog::{RawCatalog, RawEntry, RawQuote};
pub use entry::NormalizedEntry;
pub use error::{QuotebookError, QuotebookResult};
pub use grid::QuoteGrid;
pub use types::{CouponType, CurrencyCode, PricingField, SortColumn, SortOrder, Tenor};
