//! Quote indexer.
//!
//! Turns raw catalog entries into [`NormalizedEntry`] values with a
//! [`QuoteGrid`] each, and builds the [`YearIndex`] of tenors seen per
//! currency in the same pass.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use quotebook_core::{CurrencyCode, NormalizedEntry, QuoteGrid, RawEntry, Tenor};

/// Tenors observed per currency, in first-seen order without duplicates.
///
/// The index covers every entry that survived the search filter, whatever
/// currency is currently selected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct YearIndex {
    by_currency: BTreeMap<CurrencyCode, Vec<Tenor>>,
}

impl YearIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `years` was seen for `currency`.
    pub fn record(&mut self, currency: &CurrencyCode, years: Tenor) {
        let seen = self.by_currency.entry(currency.clone()).or_default();
        if !seen.contains(&years) {
            seen.push(years);
        }
    }

    /// Tenors seen for a currency; empty if the currency was never seen.
    #[must_use]
    pub fn years(&self, currency: &str) -> &[Tenor] {
        self.by_currency.get(currency).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Currencies present in the index, in code order.
    pub fn currencies(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.by_currency.keys()
    }

    /// Number of currencies indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_currency.len()
    }

    /// Returns true if nothing has been indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_currency.is_empty()
    }
}

/// Output of one indexing pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedCatalog {
    /// Entries that matched the search, in catalog order.
    pub entries: Vec<NormalizedEntry>,
    /// Tenors per currency across `entries`.
    pub years: YearIndex,
}

/// Case-insensitive substring match of `search` against a company name.
///
/// An empty search matches everything.
#[must_use]
pub fn matches_search(company: &str, search: &str) -> bool {
    search.is_empty() || company.to_lowercase().contains(&search.to_lowercase())
}

/// Indexes one raw entry, recording its tenors in `years`.
///
/// An entry with no quotes yields `quote: None`. Quotes lacking a currency,
/// tenor or coupon type are skipped; for duplicate keys the last quote in
/// input order wins.
pub fn normalize_entry(raw: &RawEntry, years: &mut YearIndex) -> NormalizedEntry {
    if !raw.has_quotes() {
        return NormalizedEntry::from_raw(raw, None);
    }

    let mut grid = QuoteGrid::new();
    for quote in raw.quotes() {
        if let (Some(currency), Some(tenor)) = (&quote.currency, quote.years) {
            years.record(currency, tenor);
        }
        if !grid.insert(quote.clone()) {
            debug!(company = %raw.company, "skipping quote without currency, tenor or coupon type");
        }
    }

    NormalizedEntry::from_raw(raw, Some(grid))
}

/// Filters entries by company search and indexes the survivors.
///
/// The year index is rebuilt from scratch on every call.
#[must_use]
pub fn normalize(raw: &[RawEntry], search: &str) -> NormalizedCatalog {
    let mut years = YearIndex::new();
    let entries: Vec<NormalizedEntry> = raw
        .iter()
        .filter(|entry| matches_search(&entry.company, search))
        .map(|entry| normalize_entry(entry, &mut years))
        .collect();

    debug!(
        "Indexed {} of {} entries (search: {:?}, currencies: {})",
        entries.len(),
        raw.len(),
        search,
        years.len()
    );

    NormalizedCatalog { entries, years }
}

/// Currencies quoted anywhere in the catalog, in first-seen order.
#[must_use]
pub fn available_currencies(raw: &[RawEntry]) -> Vec<CurrencyCode> {
    let mut currencies: Vec<CurrencyCode> = Vec::new();
    for currency in raw
        .iter()
        .flat_map(RawEntry::quotes)
        .filter_map(|quote| quote.currency.as_ref())
    {
        if !currencies.contains(currency) {
            currencies.push(currency.clone());
        }
    }
    currencies
}
