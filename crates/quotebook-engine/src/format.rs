//! Display formatting of pricing values.

use quotebook_core::PricingField;

/// Placeholder shown for a cell with no value.
pub const ABSENT: &str = "-";

/// Formats a pricing value for display.
///
/// Yields render as a percentage with three decimals (`4.500%`). Spreads
/// render as a whole number of basis points with a `bp` suffix and an
/// explicit `+` when positive (`+120bp`, `0bp`, `-5bp`).
#[must_use]
pub fn format_value(field: PricingField, value: f64) -> String {
    if field.is_basis_points() {
        format_bp(value)
    } else {
        format!("{value:.3}%")
    }
}

/// Formats an optional value, using [`ABSENT`] when missing.
#[must_use]
pub fn format_cell(field: PricingField, value: Option<f64>) -> String {
    value.map_or_else(|| ABSENT.to_string(), |v| format_value(field, v))
}

#[allow(clippy::cast_possible_truncation)]
fn format_bp(value: f64) -> String {
    let bp = value.round() as i64;
    if bp > 0 {
        format!("+{bp}bp")
    } else {
        format!("{bp}bp")
    }
}
