//! Error types for the Quotebook core.
//!
//! The catalog transforms themselves are total: missing data degrades to
//! `None` instead of failing. Errors only arise when selection values are
//! parsed from user-supplied text.

use thiserror::Error;

/// A specialized Result type for Quotebook core operations.
pub type QuotebookResult<T> = Result<T, QuotebookError>;

/// Errors raised while parsing selection values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuotebookError {
    /// Unknown pricing field name.
    #[error("Unknown pricing field: {value} (expected spread, yield or 3mlspread)")]
    UnknownField {
        /// The rejected input.
        value: String,
    },

    /// Unknown sort column name.
    #[error("Unknown sort column: {value} (expected date or company)")]
    UnknownSortColumn {
        /// The rejected input.
        value: String,
    },

    /// Unknown sort order name.
    #[error("Unknown sort order: {value} (expected asc or desc)")]
    UnknownSortOrder {
        /// The rejected input.
        value: String,
    },
}

impl QuotebookError {
    /// Create an unknown field error.
    #[must_use]
    pub fn unknown_field(value: impl Into<String>) -> Self {
        Self::UnknownField {
            value: value.into(),
        }
    }

    /// Create an unknown sort column error.
    #[must_use]
    pub fn unknown_sort_column(value: impl Into<String>) -> Self {
        Self::UnknownSortColumn {
            value: value.into(),
        }
    }

    /// Create an unknown sort order error.
    #[must_use]
    pub fn unknown_sort_order(value: impl Into<String>) -> Self {
        Self::UnknownSortOrder {
            value: value.into(),
        }
    }
}
