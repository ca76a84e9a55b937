//! Coupon type grouping key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coupon convention of a quote.
///
/// The catalog labels fixed-rate quotes `FIX` and floating-rate notes `FRN`.
/// Any other label is kept verbatim in [`CouponType::Other`] so that a
/// single odd record does not reject the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CouponType {
    /// Fixed-rate coupon.
    Fixed,
    /// Floating-rate note.
    FloatingRateNote,
    /// Unrecognized label, passed through as-is.
    Other(String),
}

impl CouponType {
    /// The two coupon types the catalog knows about, in display order.
    pub const KNOWN: [CouponType; 2] = [CouponType::Fixed, CouponType::FloatingRateNote];

    /// Returns the catalog label for this coupon type.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CouponType::Fixed => "FIX",
            CouponType::FloatingRateNote => "FRN",
            CouponType::Other(label) => label,
        }
    }
}

impl From<String> for CouponType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "FIX" | "Fixed" => CouponType::Fixed,
            "FRN" | "FloatingRateNote" => CouponType::FloatingRateNote,
            _ => CouponType::Other(label),
        }
    }
}

impl From<&str> for CouponType {
    fn from(label: &str) -> Self {
        CouponType::from(label.to_string())
    }
}

impl From<CouponType> for String {
    fn from(coupon: CouponType) -> Self {
        match coupon {
            CouponType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for CouponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(CouponType::from("FIX"), CouponType::Fixed);
        assert_eq!(CouponType::from("Fixed"), CouponType::Fixed);
        assert_eq!(CouponType::from("FRN"), CouponType::FloatingRateNote);
        assert_eq!(
            CouponType::from("ZERO"),
            CouponType::Other("ZERO".to_string())
        );
    }

    #[test]
    fn test_serde_uses_catalog_labels() {
        let parsed: Vec<CouponType> = serde_json::from_str(r#"["FIX","FRN","STEP"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                CouponType::Fixed,
                CouponType::FloatingRateNote,
                CouponType::Other("STEP".to_string()),
            ]
        );
        assert_eq!(
            serde_json::to_string(&CouponType::FloatingRateNote).unwrap(),
            "\"FRN\""
        );
    }

    #[test]
    fn test_ordering_puts_fixed_first() {
        assert!(CouponType::Fixed < CouponType::FloatingRateNote);
    }
}
