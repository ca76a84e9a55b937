//! Normalized catalog entry.

use serde::{Deserialize, Serialize};

use crate::catalog::RawEntry;
use crate::grid::{QuoteGrid, TenorQuotes};
use crate::types::{CouponType, PricingField, Tenor};

/// A catalog entry whose quotes have been indexed into a [`QuoteGrid`].
///
/// `quote` is `None` when the raw entry had no quotes at all. An entry
/// whose quotes exist but could not be keyed keeps an empty grid, so
/// "never quoted" stays distinguishable from "quoted but nothing usable".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NormalizedEntry {
    /// Entry identifier.
    pub id: Option<String>,
    /// Date the quote was sent.
    pub date_sent: Option<String>,
    /// Company name.
    pub company: String,
    /// Secondary rank label.
    pub preferred: String,
    /// Indexed quotes.
    pub quote: Option<QuoteGrid>,
}

impl NormalizedEntry {
    /// Copies the header fields of a raw entry and attaches `quote`.
    #[must_use]
    pub fn from_raw(raw: &RawEntry, quote: Option<QuoteGrid>) -> Self {
        Self {
            id: raw.id.clone(),
            date_sent: raw.date_sent.clone(),
            company: raw.company.clone(),
            preferred: raw.preferred.clone(),
            quote,
        }
    }

    /// Returns true if the entry has a quote grid.
    #[must_use]
    pub fn has_quotes(&self) -> bool {
        self.quote.is_some()
    }

    /// Returns the quotes for one currency.
    #[must_use]
    pub fn quotes_for(&self, currency: &str) -> Option<&TenorQuotes> {
        self.quote.as_ref()?.currency(currency)
    }

    /// Returns a pricing field at a (currency, tenor, coupon type) point.
    #[must_use]
    pub fn value(
        &self,
        currency: &str,
        years: Tenor,
        coupon: &CouponType,
        field: PricingField,
    ) -> Option<f64> {
        self.quote.as_ref()?.value(currency, years, coupon, field)
    }
}
