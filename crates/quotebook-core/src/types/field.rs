//! Pricing fields that can be displayed and aggregated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuotebookError;

/// A displayable pricing field of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum PricingField {
    /// Spread in basis points.
    #[default]
    Spread,
    /// Yield in percent.
    Yield,
    /// 3-month-Libor spread in basis points.
    #[serde(rename = "3MLSpread", alias = "FloatingSpread")]
    FloatingSpread,
}

impl PricingField {
    /// Every selectable field, in display order.
    pub const ALL: [PricingField; 3] = [
        PricingField::Spread,
        PricingField::Yield,
        PricingField::FloatingSpread,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PricingField::Spread => "Spread",
            PricingField::Yield => "Yield",
            PricingField::FloatingSpread => "3-month-Libor spread",
        }
    }

    /// Returns true if the field is quoted in basis points.
    #[must_use]
    pub fn is_basis_points(&self) -> bool {
        !matches!(self, PricingField::Yield)
    }
}

impl fmt::Display for PricingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PricingField {
    type Err = QuotebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spread" => Ok(PricingField::Spread),
            "yield" => Ok(PricingField::Yield),
            "3mlspread" | "floatingspread" | "floating-spread" | "libor" => {
                Ok(PricingField::FloatingSpread)
            }
            _ => Err(QuotebookError::unknown_field(s)),
        }
    }
}
