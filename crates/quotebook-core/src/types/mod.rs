//! Domain types for the quote catalog.
//!
//! - [`CurrencyCode`]: Currency a quote is priced in
//! - [`CouponType`]: Fixed vs floating-rate note
//! - [`PricingField`]: Displayable pricing field
//! - [`SortColumn`] / [`SortOrder`]: Catalog ordering

mod coupon;
mod currency;
mod field;
mod sort;

pub use coupon::CouponType;
pub use currency::CurrencyCode;
pub use field::PricingField;
pub use sort::{SortColumn, SortOrder};

/// Bond tenor in whole years.
pub type Tenor = u32;
