//! Aggregation engine.
//!
//! Averages and minimums of one pricing field over the displayed entries,
//! for a single (currency, tenor, coupon type) slice. Entries that have no
//! value at the slice are ignored; when nothing qualifies the result is
//! `None`.
//!
//! A quoted value of exactly zero is a real price and takes part in both
//! the average and the minimum. Only a missing value is excluded.

use serde::Serialize;
use std::collections::BTreeSet;

use quotebook_core::{CouponType, NormalizedEntry, PricingField, Tenor};

use crate::format::format_value;

/// Values present at a slice, one per entry that has it.
pub fn slice_values<'a>(
    entries: &'a [NormalizedEntry],
    currency: &'a str,
    years: Tenor,
    coupon: &'a CouponType,
    field: PricingField,
) -> impl Iterator<Item = f64> + 'a {
    entries
        .iter()
        .filter_map(move |entry| entry.value(currency, years, coupon, field))
}

/// Arithmetic mean of the values present at a slice.
#[must_use]
pub fn average(
    entries: &[NormalizedEntry],
    currency: &str,
    years: Tenor,
    coupon: &CouponType,
    field: PricingField,
) -> Option<f64> {
    let (sum, count) = slice_values(entries, currency, years, coupon, field)
        .fold((0.0_f64, 0_usize), |(sum, count), value| (sum + value, count + 1));

    if count > 0 {
        Some(sum / count as f64)
    } else {
        None
    }
}

/// Smallest value present at a slice.
#[must_use]
pub fn minimum(
    entries: &[NormalizedEntry],
    currency: &str,
    years: Tenor,
    coupon: &CouponType,
    field: PricingField,
) -> Option<f64> {
    slice_values(entries, currency, years, coupon, field).fold(None, |best, value| {
        Some(best.map_or(value, |b: f64| b.min(value)))
    })
}

/// Aggregates for one (tenor, coupon type) cell of the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliceSummary {
    /// Tenor in years.
    pub years: Tenor,
    /// Coupon type.
    pub coupon_type: CouponType,
    /// Aggregated field.
    pub field: PricingField,
    /// Number of entries with a value.
    pub count: usize,
    /// Mean of present values.
    pub average: Option<f64>,
    /// Smallest present value.
    pub minimum: Option<f64>,
}

impl SliceSummary {
    /// Average formatted for display.
    #[must_use]
    pub fn formatted_average(&self) -> Option<String> {
        self.average.map(|v| format_value(self.field, v))
    }

    /// Minimum formatted for display.
    #[must_use]
    pub fn formatted_minimum(&self) -> Option<String> {
        self.minimum.map(|v| format_value(self.field, v))
    }
}

/// Coupon types quoted at (currency, tenor) by any entry, in order.
#[must_use]
pub fn coupon_types_at(
    entries: &[NormalizedEntry],
    currency: &str,
    years: Tenor,
) -> BTreeSet<CouponType> {
    entries
        .iter()
        .filter_map(|entry| entry.quotes_for(currency)?.get(&years))
        .flat_map(|coupons| coupons.keys().cloned())
        .collect()
}

/// Summarizes every (tenor, coupon type) cell for the given tenors.
///
/// Cells are produced for coupon types that some entry quotes at that
/// tenor, even if none of them carries `field`; such cells have a zero
/// count and no aggregates.
#[must_use]
pub fn summarize(
    entries: &[NormalizedEntry],
    currency: &str,
    years: &[Tenor],
    field: PricingField,
) -> Vec<SliceSummary> {
    let mut summaries = Vec::new();
    for &tenor in years {
        for coupon in coupon_types_at(entries, currency, tenor) {
            let count = slice_values(entries, currency, tenor, &coupon, field).count();
            summaries.push(SliceSummary {
                years: tenor,
                field,
                count,
                average: average(entries, currency, tenor, &coupon, field),
                minimum: minimum(entries, currency, tenor, &coupon, field),
                coupon_type: coupon,
            });
        }
    }
    summaries
}

/// The cell with the lowest minimum, i.e. the best price on offer.
#[must_use]
pub fn best_slice(summaries: &[SliceSummary]) -> Option<&SliceSummary> {
    summaries
        .iter()
        .filter(|s| s.minimum.is_some())
        .min_by(|a, b| {
            let (a, b) = (a.minimum.unwrap_or(f64::INFINITY), b.minimum.unwrap_or(f64::INFINITY));
            a.total_cmp(&b)
        })
}
