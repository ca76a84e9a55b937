//! Filter engine.
//!
//! Currency and year selection never remove entries. A row exposes the
//! entry's quotes for the selected currency (if any), and the selected
//! years decide which tenor columns are shown.

use serde::Serialize;

use quotebook_core::grid::TenorQuotes;
use quotebook_core::{CouponType, NormalizedEntry, PricingField, Tenor};

/// One displayed row: an entry narrowed to the selected currency.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuoteRow<'a> {
    /// The underlying entry.
    pub entry: &'a NormalizedEntry,
    /// Quotes in the selected currency, absent if the entry has none.
    pub quotes: Option<&'a TenorQuotes>,
}

impl<'a> QuoteRow<'a> {
    /// Narrows an entry to a currency.
    #[must_use]
    pub fn new(entry: &'a NormalizedEntry, currency: &str) -> Self {
        Self {
            entry,
            quotes: entry.quotes_for(currency),
        }
    }

    /// Company name.
    #[must_use]
    pub fn company(&self) -> &'a str {
        &self.entry.company
    }

    /// Returns true if the entry has quotes in the selected currency.
    #[must_use]
    pub fn has_currency(&self) -> bool {
        self.quotes.is_some()
    }

    /// Value shown in the (tenor, coupon type) cell for a field.
    #[must_use]
    pub fn cell(&self, years: Tenor, coupon: &CouponType, field: PricingField) -> Option<f64> {
        self.quotes?.get(&years)?.get(coupon)?.value(field)
    }
}

/// Narrows every entry to `currency`, keeping order and count.
#[must_use]
pub fn apply_selection<'a>(entries: &'a [NormalizedEntry], currency: &str) -> Vec<QuoteRow<'a>> {
    entries
        .iter()
        .map(|entry| QuoteRow::new(entry, currency))
        .collect()
}

/// Sorts years ascending and drops duplicates.
#[must_use]
pub fn normalize_years(mut years: Vec<Tenor>) -> Vec<Tenor> {
    years.sort_unstable();
    years.dedup();
    years
}

/// Tenor columns to render: the selected years that are available,
/// ascending.
#[must_use]
pub fn visible_years(selected: &[Tenor], available: &[Tenor]) -> Vec<Tenor> {
    let years = selected
        .iter()
        .copied()
        .filter(|years| available.contains(years))
        .collect();
    normalize_years(years)
}
