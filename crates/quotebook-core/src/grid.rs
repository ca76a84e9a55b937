//! Three-level quote mapping: currency → tenor → coupon type → quote.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::RawQuote;
use crate::types::{CouponType, CurrencyCode, PricingField, Tenor};

/// Quotes for one (currency, tenor) point, keyed by coupon type.
pub type CouponQuotes = BTreeMap<CouponType, RawQuote>;

/// Quotes for one currency, keyed by tenor.
pub type TenorQuotes = BTreeMap<Tenor, CouponQuotes>;

/// Normalized quotes of a single entry.
///
/// Holds at most one quote per (currency, tenor, coupon type). Every level
/// is either present with at least one quote below it, or absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteGrid {
    by_currency: BTreeMap<CurrencyCode, TenorQuotes>,
}

impl QuoteGrid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a quote at its key, replacing any quote already there.
    ///
    /// Returns `false` without inserting if the quote lacks a currency,
    /// tenor or coupon type.
    pub fn insert(&mut self, quote: RawQuote) -> bool {
        let Some((currency, years, coupon)) = quote.key() else {
            return false;
        };
        let (currency, coupon) = (currency.clone(), coupon.clone());
        self.by_currency
            .entry(currency)
            .or_default()
            .entry(years)
            .or_default()
            .insert(coupon, quote);
        true
    }

    /// Returns the quotes for a currency.
    #[must_use]
    pub fn currency(&self, currency: &str) -> Option<&TenorQuotes> {
        self.by_currency.get(currency)
    }

    /// Returns the quote at a (currency, tenor, coupon type) point.
    #[must_use]
    pub fn get(&self, currency: &str, years: Tenor, coupon: &CouponType) -> Option<&RawQuote> {
        self.currency(currency)?.get(&years)?.get(coupon)
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
        self.get(currency, years, coupon)?.value(field)
    }

    /// Currencies present in the grid, in code order.
    pub fn currencies(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.by_currency.keys()
    }

    /// Iterates every quote with its key.
    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, Tenor, &CouponType, &RawQuote)> {
        self.by_currency.iter().flat_map(|(currency, tenors)| {
            tenors.iter().flat_map(move |(years, coupons)| {
                coupons
                    .iter()
                    .map(move |(coupon, quote)| (currency, *years, coupon, quote))
            })
        })
    }

    /// Number of quotes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_currency
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeMap::len)
            .sum()
    }

    /// Returns true if the grid holds no quotes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_currency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut grid = QuoteGrid::new();
        assert!(grid.insert(RawQuote::new("USD", 5, CouponType::Fixed).with_spread(120.0)));
        assert!(grid.insert(RawQuote::new("USD", 5, CouponType::FloatingRateNote).with_spread(90.0)));
        assert!(grid.insert(RawQuote::new("EUR", 10, CouponType::Fixed).with_yield(3.1)));

        assert_eq!(grid.len(), 3);
        assert_eq!(
            grid.value("USD", 5, &CouponType::Fixed, PricingField::Spread),
            Some(120.0)
        );
        assert_eq!(
            grid.value("EUR", 10, &CouponType::Fixed, PricingField::Spread),
            None
        );
        assert!(grid.get("GBP", 5, &CouponType::Fixed).is_none());
        assert!(grid.get("USD", 7, &CouponType::Fixed).is_none());
        assert_eq!(grid.currency("USD").map(|t| t.len()), Some(1));
    }

    #[test]
    fn test_last_insert_wins() {
        let mut grid = QuoteGrid::new();
        grid.insert(RawQuote::new("USD", 5, CouponType::Fixed).with_spread(100.0));
        grid.insert(RawQuote::new("USD", 5, CouponType::Fixed).with_spread(150.0));

        assert_eq!(grid.len(), 1);
        assert_eq!(
            grid.value("USD", 5, &CouponType::Fixed, PricingField::Spread),
            Some(150.0)
        );
    }

    #[test]
    fn test_unkeyed_quote_is_rejected() {
        let mut grid = QuoteGrid::new();
        let quote = RawQuote {
            spread: Some(1.0),
            ..RawQuote::default()
        };
        assert!(!grid.insert(quote));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_iter_is_ordered() {
        let mut grid = QuoteGrid::new();
        grid.insert(RawQuote::new("USD", 10, CouponType::Fixed));
        grid.insert(RawQuote::new("EUR", 5, CouponType::FloatingRateNote));
        grid.insert(RawQuote::new("USD", 2, CouponType::Fixed));

        let keys: Vec<_> = grid
            .iter()
            .map(|(c, y, t, _)| (c.to_string(), y, t.clone()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("EUR".to_string(), 5, CouponType::FloatingRateNote),
                ("USD".to_string(), 2, CouponType::Fixed),
                ("USD".to_string(), 10, CouponType::Fixed),
            ]
        );
    }
}
