//! Engine configuration errors.

use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Upper bound on the search debounce delay, in milliseconds.
pub const MAX_SEARCH_DEBOUNCE_MS: u64 = 10_000;

/// Errors raised when a board configuration is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The default currency code is empty or contains whitespace.
    #[error("Invalid default currency: '{code}'")]
    InvalidCurrency {
        /// The rejected code.
        code: String,
    },

    /// The search debounce delay is longer than allowed.
    #[error("Search debounce of {ms} ms exceeds the {max} ms limit")]
    DebounceTooLong {
        /// Configured delay.
        ms: u64,
        /// Allowed maximum.
        max: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidCurrency {
            code: "U SD".to_string(),
        };
        assert!(err.to_string().contains("U SD"));

        let err = ConfigError::DebounceTooLong {
            ms: 20_000,
            max: MAX_SEARCH_DEBOUNCE_MS,
        };
        assert!(err.to_string().contains("20000"));
    }
}
