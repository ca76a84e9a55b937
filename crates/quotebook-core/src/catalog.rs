//! Raw quote catalog as delivered by the data loader.
//!
//! The catalog is a trusted, already-parsed document of shape
//! `{ "Items": [ ... ] }`. Nothing here validates; every field that can be
//! missing in practice is an `Option` (or defaults to empty) so that a
//! sparse record never rejects the whole document. A field of the wrong
//! JSON type is read as missing, and a list element that is not an object
//! is dropped.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::types::{CouponType, CurrencyCode, PricingField, Tenor};

/// A single price quote for one (currency, tenor, coupon type) point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawQuote {
    /// Notional amount.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub amount: Option<Decimal>,

    /// Currency code.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub currency: Option<CurrencyCode>,

    /// Tenor in years.
    #[serde(default, deserialize_with = "lenient::tenor")]
    pub years: Option<Tenor>,

    /// Coupon convention.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub coupon_type: Option<CouponType>,

    /// Spread in basis points.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub spread: Option<f64>,

    /// Yield in percent.
    #[serde(default, rename = "Yield", deserialize_with = "lenient::optional")]
    pub yield_value: Option<f64>,

    /// 3-month-Libor spread in basis points.
    #[serde(
        default,
        rename = "3MLSpread",
        alias = "FloatingSpread",
        deserialize_with = "lenient::optional"
    )]
    pub floating_spread: Option<f64>,
}

impl RawQuote {
    /// Creates a quote keyed by currency, tenor and coupon type.
    #[must_use]
    pub fn new(currency: impl Into<CurrencyCode>, years: Tenor, coupon_type: CouponType) -> Self {
        Self {
            currency: Some(currency.into()),
            years: Some(years),
            coupon_type: Some(coupon_type),
            ..Self::default()
        }
    }

    /// Sets the notional amount.
    #[must_use]
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the spread.
    #[must_use]
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = Some(spread);
        self
    }

    /// Sets the yield.
    #[must_use]
    pub fn with_yield(mut self, yield_value: f64) -> Self {
        self.yield_value = Some(yield_value);
        self
    }

    /// Sets the 3-month-Libor spread.
    #[must_use]
    pub fn with_floating_spread(mut self, floating_spread: f64) -> Self {
        self.floating_spread = Some(floating_spread);
        self
    }

    /// Returns the value of a pricing field, if quoted.
    #[must_use]
    pub fn value(&self, field: PricingField) -> Option<f64> {
        match field {
            PricingField::Spread => self.spread,
            PricingField::Yield => self.yield_value,
            PricingField::FloatingSpread => self.floating_spread,
        }
    }

    /// Returns the (currency, tenor, coupon type) key, if all three are present.
    #[must_use]
    pub fn key(&self) -> Option<(&CurrencyCode, Tenor, &CouponType)> {
        match (&self.currency, self.years, &self.coupon_type) {
            (Some(currency), Some(years), Some(coupon)) => Some((currency, years, coupon)),
            _ => None,
        }
    }
}

/// One company's entry in the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawEntry {
    /// Entry identifier.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub id: Option<String>,

    /// Date the quote was sent, as supplied.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub date_sent: Option<String>,

    /// Company name.
    #[serde(default, deserialize_with = "lenient::string")]
    pub company: String,

    /// Secondary rank label used to break sort ties.
    #[serde(default, deserialize_with = "lenient::string")]
    pub preferred: String,

    /// Quotes; `None` or empty means no pricing is available.
    #[serde(default, deserialize_with = "lenient::list")]
    pub quote: Option<Vec<RawQuote>>,
}

impl RawEntry {
    /// Creates an entry for a company with no quotes.
    #[must_use]
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            ..Self::default()
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the sent date.
    #[must_use]
    pub fn with_date_sent(mut self, date_sent: impl Into<String>) -> Self {
        self.date_sent = Some(date_sent.into());
        self
    }

    /// Sets the preferred label.
    #[must_use]
    pub fn with_preferred(mut self, preferred: impl Into<String>) -> Self {
        self.preferred = preferred.into();
        self
    }

    /// Sets the quote list.
    #[must_use]
    pub fn with_quotes(mut self, quotes: Vec<RawQuote>) -> Self {
        self.quote = Some(quotes);
        self
    }

    /// Returns the quotes, or an empty slice if there are none.
    #[must_use]
    pub fn quotes(&self) -> &[RawQuote] {
        self.quote.as_deref().unwrap_or_default()
    }

    /// Returns true if the entry carries at least one quote.
    #[must_use]
    pub fn has_quotes(&self) -> bool {
        !self.quotes().is_empty()
    }
}

/// The full catalog document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawCatalog {
    /// Catalog entries in document order.
    #[serde(rename = "Items", default, deserialize_with = "lenient::elements")]
    pub items: Vec<RawEntry>,
}

impl RawCatalog {
    /// Creates a catalog from entries.
    #[must_use]
    pub fn new(items: Vec<RawEntry>) -> Self {
        Self { items }
    }

    /// Returns the entries in document order.
    #[must_use]
    pub fn entries(&self) -> &[RawEntry] {
        &self.items
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of raw quotes across all entries.
    #[must_use]
    pub fn quote_count(&self) -> usize {
        self.items.iter().map(|e| e.quotes().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const DOCUMENT: &str = r#"{
        "Items": [
            {
                "Id": "q-1",
                "DateSent": "2023-04-12",
                "Company": "Acme Corp",
                "Preferred": "2",
                "Quote": [
                    {"Amount": 500000000, "Currency": "USD", "Years": 5, "CouponType": "FIX",
                     "Spread": 120, "Yield": 4.5, "3MLSpread": null},
                    {"Amount": 500000000, "Currency": "EUR", "Years": 7, "CouponType": "FRN",
                     "Spread": 95, "Yield": null, "3MLSpread": 88}
                ]
            },
            {"Id": null, "DateSent": null, "Company": "Other Co", "Preferred": "1", "Quote": null}
        ]
    }"#;

    #[test]
    fn test_parse_document() {
        let catalog: RawCatalog = serde_json::from_str(DOCUMENT).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.quote_count(), 2);

        let acme = &catalog.entries()[0];
        assert_eq!(acme.id.as_deref(), Some("q-1"));
        assert!(acme.has_quotes());

        let usd = &acme.quotes()[0];
        assert_eq!(usd.amount, Some(dec!(500000000)));
        assert_eq!(usd.coupon_type, Some(CouponType::Fixed));
        assert_eq!(usd.value(PricingField::Yield), Some(4.5));
        assert_eq!(usd.value(PricingField::FloatingSpread), None);

        let eur = &acme.quotes()[1];
        assert_eq!(eur.value(PricingField::FloatingSpread), Some(88.0));

        let other = &catalog.entries()[1];
        assert!(other.quote.is_none());
        assert!(!other.has_quotes());
        assert!(other.date_sent.is_none());
    }

    #[test]
    fn test_sparse_quote_still_parses() {
        let quote: RawQuote = serde_json::from_str(r#"{"Currency": "USD", "Spread": 10}"#).unwrap();
        assert_eq!(quote.spread, Some(10.0));
        assert!(quote.key().is_none());
    }

    #[test]
    fn test_key() {
        let quote = RawQuote::new("USD", 10, CouponType::FloatingRateNote);
        let (currency, years, coupon) = quote.key().unwrap();
        assert_eq!(currency, "USD");
        assert_eq!(years, 10);
        assert_eq!(coupon, &CouponType::FloatingRateNote);
    }

    #[test]
    fn test_empty_quote_list_has_no_quotes() {
        let entry = RawEntry::new("Empty").with_quotes(vec![]);
        assert!(entry.quote.is_some());
        assert!(!entry.has_quotes());
    }

    #[test]
    fn test_mistyped_fields_are_absent() {
        let quote: RawQuote = serde_json::from_str(
            r#"{"Amount": 250000000, "Currency": "USD", "Years": 5.0, "CouponType": "FIX",
                "Spread": "n/a", "Yield": 4.5, "3MLSpread": true}"#,
        )
        .unwrap();
        let expected = RawQuote::new("USD", 5, CouponType::Fixed)
            .with_amount(dec!(250000000))
            .with_yield(4.5);
        assert_eq!(quote, expected);
        assert!(quote.key().is_some());
    }

    #[test]
    fn test_mistyped_entry_keeps_its_neighbours() {
        let catalog: RawCatalog = serde_json::from_str(
            r#"{"Items": [
                {"Company": "Good Co", "Quote": [{"Currency": "USD", "Years": 5, "CouponType": "FIX", "Spread": 90}]},
                {"Company": 42, "Preferred": 1, "DateSent": 20230401, "Quote": [7, {"Currency": 840, "Years": 3}]},
                "not an entry",
                {"Company": "Flat Co", "Quote": "none"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 3);

        let good = &catalog.entries()[0];
        assert_eq!(good.company, "Good Co");
        assert_eq!(good.quotes()[0].value(PricingField::Spread), Some(90.0));

        let bad = &catalog.entries()[1];
        assert_eq!(bad.company, "");
        assert_eq!(bad.preferred, "");
        assert!(bad.date_sent.is_none());
        assert_eq!(bad.quotes().len(), 1);
        assert!(bad.quotes()[0].currency.is_none());
        assert_eq!(bad.quotes()[0].years, Some(3));

        let flat = &catalog.entries()[2];
        assert!(flat.quote.is_none());
    }

    #[test]
    fn test_items_must_be_a_list() {
        assert!(serde_json::from_str::<RawCatalog>(r#"{"Items": 5}"#).is_err());
    }
}
