//! Sort engine.
//!
//! Entries with quotes always come before entries without, whatever the
//! column or direction. Within each group the primary key is the chosen
//! column and ties fall back to `Preferred`, always descending. The sort is
//! stable, so entries equal on both keys keep their input order.

use std::cmp::Ordering;

use quotebook_core::{NormalizedEntry, SortColumn, SortOrder};

/// Compares two entries by column and direction, then by `Preferred`
/// descending.
///
/// A missing `DateSent` orders before any present date when ascending.
#[must_use]
pub fn compare_entries(
    a: &NormalizedEntry,
    b: &NormalizedEntry,
    column: SortColumn,
    order: SortOrder,
) -> Ordering {
    let primary = match column {
        SortColumn::DateSent => a.date_sent.cmp(&b.date_sent),
        SortColumn::Company => a.company.cmp(&b.company),
    };
    order
        .apply(primary)
        .then_with(|| b.preferred.cmp(&a.preferred))
}

/// Orders owned entries, placing unquoted entries last.
#[must_use]
pub fn sorted(
    entries: Vec<NormalizedEntry>,
    column: SortColumn,
    order: SortOrder,
) -> Vec<NormalizedEntry> {
    let (mut quoted, mut unquoted): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(NormalizedEntry::has_quotes);

    quoted.sort_by(|a, b| compare_entries(a, b, column, order));
    unquoted.sort_by(|a, b| compare_entries(a, b, column, order));

    quoted.append(&mut unquoted);
    quoted
}

/// Returns a new ordering of `entries`, leaving the input untouched.
#[must_use]
pub fn sort_entries(
    entries: &[NormalizedEntry],
    column: SortColumn,
    order: SortOrder,
) -> Vec<NormalizedEntry> {
    sorted(entries.to_vec(), column, order)
}
