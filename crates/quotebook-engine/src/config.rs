//! Board configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use quotebook_core::{CurrencyCode, PricingField, SortColumn, SortOrder};

use crate::error::{ConfigError, ConfigResult, MAX_SEARCH_DEBOUNCE_MS};

fn default_search_debounce_ms() -> u64 {
    500
}

/// Initial selections and timing for a [`QuoteBoard`](crate::QuoteBoard).
///
/// Every field has a default, so a partial TOML table such as
/// `search_debounce_ms = 250` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Currency selected on start-up.
    pub default_currency: CurrencyCode,

    /// Quiet period after the last search keystroke before re-indexing.
    pub search_debounce_ms: u64,

    /// Initial sort column.
    pub sort_column: SortColumn,

    /// Initial sort direction.
    pub sort_order: SortOrder,

    /// Initially displayed pricing field.
    pub field: PricingField,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_currency: CurrencyCode::default(),
            search_debounce_ms: default_search_debounce_ms(),
            sort_column: SortColumn::DateSent,
            sort_order: SortOrder::Descending,
            field: PricingField::Spread,
        }
    }
}

impl BoardConfig {
    /// Sets the start-up currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<CurrencyCode>) -> Self {
        self.default_currency = currency.into();
        self
    }

    /// Sets the search debounce delay in milliseconds.
    #[must_use]
    pub fn with_search_debounce_ms(mut self, ms: u64) -> Self {
        self.search_debounce_ms = ms;
        self
    }

    /// Sets the initial sort.
    #[must_use]
    pub fn with_sort(mut self, column: SortColumn, order: SortOrder) -> Self {
        self.sort_column = column;
        self.sort_order = order;
        self
    }

    /// Sets the initial pricing field.
    #[must_use]
    pub fn with_field(mut self, field: PricingField) -> Self {
        self.field = field;
        self
    }

    /// The search debounce delay.
    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Checks the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let code = self.default_currency.as_str();
        if code.is_empty() || code.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidCurrency {
                code: code.to_string(),
            });
        }
        if self.search_debounce_ms > MAX_SEARCH_DEBOUNCE_MS {
            return Err(ConfigError::DebounceTooLong {
                ms: self.search_debounce_ms,
                max: MAX_SEARCH_DEBOUNCE_MS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.default_currency, "USD");
        assert_eq!(config.search_debounce(), Duration::from_millis(500));
        assert_eq!(config.sort_column, SortColumn::DateSent);
        assert_eq!(config.sort_order, SortOrder::Descending);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let config = BoardConfig::default().with_currency("");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCurrency { .. })
        ));

        let config = BoardConfig::default().with_search_debounce_ms(60_000);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DebounceTooLong { ms: 60_000, .. })
        ));
    }

    #[test]
    fn test_partial_toml() {
        let config: BoardConfig = toml::from_str(
            r#"
            default_currency = "EUR"
            sort_order = "Ascending"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_currency, "EUR");
        assert_eq!(config.sort_order, SortOrder::Ascending);
        assert_eq!(config.search_debounce_ms, 500);
        assert_eq!(config.field, PricingField::Spread);
    }
}
