//! Lighten / darken hex colors along the OKLCH lightness axis.
//!
//! Round-trips through the reverse and forward conversions in
//! [`color`](crate::color): hex in, lightness nudged, hex out. Chroma and
//! hue carry over exactly from the reverse conversion (subject to its
//! bounded approximation error), so the adjusted color stays the *same*
//! color, just lighter or darker — unlike naive RGB scaling, which shifts
//! hue.

use crate::color::Color;
use crate::error::MalformedColorError;

/// Lighten a hex color by `amount` in OKLCH lightness, clamped at white.
///
/// `amount` is not range-checked: a negative value darkens (equivalent to
/// [`darken`] with the magnitude), and `amount == 0` is the identity up to
/// the ≤1-RGB-unit round-trip error.
///
/// # Errors
///
/// Returns [`MalformedColorError`] if `hex` is not a `#rrggbb` string.
///
/// # Examples
///
/// ```
/// let lighter = runhue::lighten("#808080", 0.2)?;
/// assert_ne!(lighter, "#808080");
/// # Ok::<(), runhue::MalformedColorError>(())
/// ```
pub fn lighten(hex: &str, amount: f64) -> Result<String, MalformedColorError> {
    Ok(Color::from_hex(hex)?.lighten(amount).to_hex())
}

/// Darken a hex color by `amount` in OKLCH lightness, clamped at black.
///
/// Symmetric to [`lighten`]; a negative `amount` lightens.
///
/// # Errors
///
/// Returns [`MalformedColorError`] if `hex` is not a `#rrggbb` string.
pub fn darken(hex: &str, amount: f64) -> Result<String, MalformedColorError> {
    Ok(Color::from_hex(hex)?.darken(amount).to_hex())
}
