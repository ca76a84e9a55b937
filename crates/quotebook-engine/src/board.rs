//! Selection state and recompute pipeline.
//!
//! [`QuoteBoard`] owns the immutable catalog snapshot, the user's
//! selections and everything derived from them. Each change goes through
//! [`QuoteBoard::dispatch`], which updates the selection, reruns the
//! affected stages (index, sort, year reset) and reports them in a
//! [`Dirty`] set. Search is the only debounced input: the text is stored
//! at once, re-indexing happens when the timer fires in
//! [`QuoteBoard::poll`].

use serde::Serialize;
use std::time::Instant;
use tracing::debug;

use quotebook_core::{
    CouponType, CurrencyCode, NormalizedEntry, PricingField, RawCatalog, SortColumn, SortOrder,
    Tenor,
};

use crate::aggregation::{self, SliceSummary};
use crate::config::BoardConfig;
use crate::debounce::Debouncer;
use crate::error::ConfigResult;
use crate::filter::{self, QuoteRow};
use crate::format;
use crate::indexer::{self, YearIndex};
use crate::sort;

/// The user's current selections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    /// Selected currency.
    pub currency: CurrencyCode,
    /// Selected tenors, ascending.
    pub years: Vec<Tenor>,
    /// Sort column.
    pub sort_column: SortColumn,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Search text as typed.
    pub search_text: String,
    /// Displayed pricing field.
    pub field: PricingField,
}

/// A change requested by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    /// Select a currency; resets the selected years.
    ChangeCurrency(CurrencyCode),
    /// Replace the selected years.
    SetSelectedYears(Vec<Tenor>),
    /// Sort by a column, flipping direction if it is already active.
    ToggleColumnSort(SortColumn),
    /// Set column and direction explicitly.
    SetSort(SortColumn, SortOrder),
    /// Update the search text (debounced).
    SetSearch(String),
    /// Select the displayed pricing field.
    SetField(PricingField),
    /// Let time pass; fires the search timer if it is due.
    Tick,
}

/// Derived values recomputed by a dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dirty {
    /// Entries were re-indexed from the catalog.
    pub entries: bool,
    /// Entries were re-sorted.
    pub order: bool,
    /// Available years were recomputed.
    pub available_years: bool,
    /// Selected years changed.
    pub selected_years: bool,
    /// Another selection value (field, sort, search text) changed.
    pub selection: bool,
    /// A search recompute is waiting on the debounce timer.
    pub search_pending: bool,
}

impl Dirty {
    /// Returns true if nothing changed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }

    /// Combines two dirty sets.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            entries: self.entries || other.entries,
            order: self.order || other.order,
            available_years: self.available_years || other.available_years,
            selected_years: self.selected_years || other.selected_years,
            selection: self.selection || other.selection,
            search_pending: self.search_pending || other.search_pending,
        }
    }
}

/// Reactive quote board over a static catalog.
#[derive(Debug, Clone)]
pub struct QuoteBoard {
    catalog: RawCatalog,
    selection: Selection,
    applied_search: String,
    entries: Vec<NormalizedEntry>,
    year_index: YearIndex,
    available_currencies: Vec<CurrencyCode>,
    available_years: Vec<Tenor>,
    search_timer: Debouncer<String>,
}

impl QuoteBoard {
    /// Builds a board from a catalog and a validated configuration.
    pub fn new(catalog: RawCatalog, config: &BoardConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(catalog, config))
    }

    /// Builds a board with the default configuration.
    #[must_use]
    pub fn with_defaults(catalog: RawCatalog) -> Self {
        Self::build(catalog, &BoardConfig::default())
    }

    fn build(catalog: RawCatalog, config: &BoardConfig) -> Self {
        let mut board = Self {
            available_currencies: indexer::available_currencies(catalog.entries()),
            catalog,
            selection: Selection {
                currency: config.default_currency.clone(),
                years: Vec::new(),
                sort_column: config.sort_column,
                sort_order: config.sort_order,
                search_text: String::new(),
                field: config.field,
            },
            applied_search: String::new(),
            entries: Vec::new(),
            year_index: YearIndex::new(),
            available_years: Vec::new(),
            search_timer: Debouncer::new(config.search_debounce()),
        };
        board.reindex();
        board.reset_years();

        debug!(
            "Quote board ready: {} entries, {} currencies, currency {}",
            board.entries.len(),
            board.available_currencies.len(),
            board.selection.currency
        );
        board
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Applies an event at time `now` and reports what was recomputed.
    pub fn dispatch(&mut self, event: BoardEvent, now: Instant) -> Dirty {
        debug!("Dispatch {:?}", event);
        match event {
            BoardEvent::ChangeCurrency(currency) => self.change_currency(currency),
            BoardEvent::SetSelectedYears(years) => self.set_selected_years(years),
            BoardEvent::ToggleColumnSort(column) => self.toggle_column_sort(column),
            BoardEvent::SetSort(column, order) => self.set_sort(column, order),
            BoardEvent::SetSearch(text) => self.set_search(text, now),
            BoardEvent::SetField(field) => self.set_field(field),
            BoardEvent::Tick => self.poll(now),
        }
    }

    /// Selects a currency and resets the selected years to every year
    /// available for it.
    pub fn change_currency(&mut self, currency: impl Into<CurrencyCode>) -> Dirty {
        self.selection.currency = currency.into();
        self.reset_years().merge(Dirty {
            selection: true,
            ..Dirty::default()
        })
    }

    /// Replaces the selected years; they are kept in ascending order.
    pub fn set_selected_years(&mut self, years: Vec<Tenor>) -> Dirty {
        self.selection.years = filter::normalize_years(years);
        Dirty {
            selected_years: true,
            ..Dirty::default()
        }
    }

    /// Sorts by `column`. The active column flips direction; a new column
    /// starts ascending.
    pub fn toggle_column_sort(&mut self, column: SortColumn) -> Dirty {
        let order = if self.selection.sort_column == column {
            self.selection.sort_order.flipped()
        } else {
            SortOrder::Ascending
        };
        self.set_sort(column, order)
    }

    /// Sets the sort column and direction, re-sorting if either changed.
    pub fn set_sort(&mut self, column: SortColumn, order: SortOrder) -> Dirty {
        if self.selection.sort_column == column && self.selection.sort_order == order {
            return Dirty::default();
        }
        self.selection.sort_column = column;
        self.selection.sort_order = order;
        self.resort();
        Dirty {
            order: true,
            selection: true,
            ..Dirty::default()
        }
    }

    /// Stores the search text and (re)arms the debounce timer.
    pub fn set_search(&mut self, text: impl Into<String>, now: Instant) -> Dirty {
        let text = text.into();
        self.selection.search_text.clone_from(&text);
        if let Some(superseded) = self.search_timer.arm(text, now) {
            debug!("Search {:?} superseded before firing", superseded);
        }
        Dirty {
            selection: true,
            search_pending: true,
            ..Dirty::default()
        }
    }

    /// Selects the displayed pricing field.
    pub fn set_field(&mut self, field: PricingField) -> Dirty {
        if self.selection.field == field {
            return Dirty::default();
        }
        self.selection.field = field;
        Dirty {
            selection: true,
            ..Dirty::default()
        }
    }

    /// Fires the search timer if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Dirty {
        match self.search_timer.poll(now) {
            Some(search) => self.apply_search(search),
            None => Dirty {
                search_pending: self.search_timer.is_pending(),
                ..Dirty::default()
            },
        }
    }

    /// Fires any pending search immediately.
    pub fn flush_search(&mut self) -> Dirty {
        match self.search_timer.flush() {
            Some(search) => self.apply_search(search),
            None => Dirty::default(),
        }
    }

    // =========================================================================
    // PIPELINE
    // =========================================================================

    /// Re-indexes with `search`. A selection that covered every available
    /// year keeps covering them; a narrowed one is left alone.
    fn apply_search(&mut self, search: String) -> Dirty {
        let follows_available =
            self.selection.years == filter::normalize_years(self.available_years.clone());
        self.applied_search = search;
        self.reindex();

        let indexed = Dirty {
            entries: true,
            order: true,
            ..Dirty::default()
        };
        if follows_available {
            return indexed.merge(self.reset_years());
        }
        self.available_years = self.year_index.years(self.selection.currency.as_str()).to_vec();
        indexed.merge(Dirty {
            available_years: true,
            ..Dirty::default()
        })
    }

    fn reindex(&mut self) {
        let normalized = indexer::normalize(self.catalog.entries(), &self.applied_search);
        self.year_index = normalized.years;
        self.entries = sort::sorted(
            normalized.entries,
            self.selection.sort_column,
            self.selection.sort_order,
        );
    }

    fn resort(&mut self) {
        let entries = std::mem::take(&mut self.entries);
        self.entries = sort::sorted(entries, self.selection.sort_column, self.selection.sort_order);
    }

    fn reset_years(&mut self) -> Dirty {
        self.available_years = self.year_index.years(self.selection.currency.as_str()).to_vec();
        self.selection.years = filter::normalize_years(self.available_years.clone());
        Dirty {
            available_years: true,
            selected_years: true,
            ..Dirty::default()
        }
    }

    // =========================================================================
    // OBSERVABLES
    // =========================================================================

    /// Current selections.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selected currency.
    #[must_use]
    pub fn selected_currency(&self) -> &CurrencyCode {
        &self.selection.currency
    }

    /// Selected years, ascending.
    #[must_use]
    pub fn selected_years(&self) -> &[Tenor] {
        &self.selection.years
    }

    /// Years available for the selected currency, in first-seen order.
    #[must_use]
    pub fn available_years(&self) -> &[Tenor] {
        &self.available_years
    }

    /// Currencies quoted anywhere in the catalog.
    #[must_use]
    pub fn available_currencies(&self) -> &[CurrencyCode] {
        &self.available_currencies
    }

    /// Fields that can be displayed.
    #[must_use]
    pub fn available_fields(&self) -> &'static [PricingField] {
        &PricingField::ALL
    }

    /// Sort column.
    #[must_use]
    pub fn sort_column(&self) -> SortColumn {
        self.selection.sort_column
    }

    /// Sort direction.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.selection.sort_order
    }

    /// Search text as typed, which may not be applied yet.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.selection.search_text
    }

    /// Search text the current entries were indexed with.
    #[must_use]
    pub fn applied_search(&self) -> &str {
        &self.applied_search
    }

    /// Returns true if a search is waiting on the debounce timer.
    #[must_use]
    pub fn search_pending(&self) -> bool {
        self.search_timer.is_pending()
    }

    /// Displayed pricing field.
    #[must_use]
    pub fn selected_field(&self) -> PricingField {
        self.selection.field
    }

    /// Sorted entries matching the applied search.
    #[must_use]
    pub fn entries(&self) -> &[NormalizedEntry] {
        &self.entries
    }

    /// Tenors per currency for the applied search.
    #[must_use]
    pub fn year_index(&self) -> &YearIndex {
        &self.year_index
    }

    /// Rows narrowed to the selected currency.
    #[must_use]
    pub fn rows(&self) -> Vec<QuoteRow<'_>> {
        filter::apply_selection(&self.entries, self.selection.currency.as_str())
    }

    /// Tenor columns to render.
    #[must_use]
    pub fn visible_years(&self) -> Vec<Tenor> {
        filter::visible_years(&self.selection.years, &self.available_years)
    }

    // =========================================================================
    // AGGREGATES
    // =========================================================================

    /// Average of `field` at a slice over the displayed entries.
    #[must_use]
    pub fn average(
        &self,
        currency: &str,
        years: Tenor,
        coupon: &CouponType,
        field: PricingField,
    ) -> Option<f64> {
        aggregation::average(&self.entries, currency, years, coupon, field)
    }

    /// Minimum of `field` at a slice over the displayed entries.
    #[must_use]
    pub fn minimum(
        &self,
        currency: &str,
        years: Tenor,
        coupon: &CouponType,
        field: PricingField,
    ) -> Option<f64> {
        aggregation::minimum(&self.entries, currency, years, coupon, field)
    }

    /// Aggregates for every visible cell of the current selection.
    #[must_use]
    pub fn summary(&self) -> Vec<SliceSummary> {
        aggregation::summarize(
            &self.entries,
            self.selection.currency.as_str(),
            &self.visible_years(),
            self.selection.field,
        )
    }

    /// Formats a value of `field` for display.
    #[must_use]
    pub fn format_value(&self, field: PricingField, value: f64) -> String {
        format::format_value(field, value)
    }
}
