//! Error types for the color engine.
//!
//! The engine has exactly one failure mode: a hex string that does not
//! match the canonical `#rrggbb` form. Everything else degrades instead of
//! failing — palette counts are `usize` (negative counts are
//! unrepresentable, zero yields an empty palette) and out-of-range
//! lightness/chroma values are clamped at the final RGB encoding step.

use thiserror::Error;

/// A hex color string failed to parse.
///
/// Valid input is exactly `#` followed by 6 hex digits (case-insensitive).
/// Raised by [`Color::from_hex`](crate::Color::from_hex) and the
/// [`adjust`](crate::adjust) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed hex color {input:?}: expected \"#rrggbb\"")]
pub struct MalformedColorError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl MalformedColorError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}
