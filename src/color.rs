// SPDX-License-Identifier: MIT
//
// OKLCH ↔ sRGB-hex conversion, the numeric core of the crate.
//
// Single-character variable names (r, g, b, l, c, h, a, s, m) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
//
// Conversion pipeline:
//
//   OKLCH → OKLAB → LMS → linear sRGB → sRGB → "#rrggbb"
//
// and the approximate inverse in the other direction. The matrices are
// Björn Ottosson's published OKLab constants
// (https://bottosson.github.io/posts/oklab/). All math is f64: the
// ≤1-RGB-unit round-trip guarantee depends on double precision.

use std::fmt;

use crate::error::MalformedColorError;

/// A color in OKLCH, the cylindrical form of the OKLab perceptually
/// uniform color space.
///
/// - `l`: lightness, 0.0 (black) to 1.0 (white)
/// - `c`: chroma, 0.0 (gray) upward — values beyond ~0.4 are outside any
///   practical gamut
/// - `h`: hue angle in degrees, wrapping modulo 360
///
/// `Color` is an ephemeral intermediate: the representation that crosses
/// the crate boundary is always the hex string from [`Color::to_hex`].
/// No range validation is performed on construction; out-of-gamut values
/// clip silently at the final RGB encoding step.
///
/// # Examples
///
/// ```
/// use runhue::Color;
///
/// let teal = Color::new(0.7, 0.15, 180.0);
/// assert_eq!(teal.to_hex(), teal.lighten(0.0).to_hex());
///
/// let parsed = Color::from_hex("#40c4aa")?;
/// assert!(parsed.l > 0.0 && parsed.l < 1.0);
/// # Ok::<(), runhue::MalformedColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Lightness: 0.0 to 1.0.
    pub l: f64,
    /// Chroma: 0.0 upward, ~0.4 is the practical ceiling.
    pub c: f64,
    /// Hue angle in degrees.
    pub h: f64,
}

impl Color {
    /// Create a color from OKLCH values. No validation — degenerate inputs
    /// produce degenerate (but valid) hex output.
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Parse a canonical hex color (`#rrggbb`, case-insensitive) into
    /// OKLCH via the approximate inverse conversion.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedColorError`] unless the input is exactly `#`
    /// followed by 6 hex digits.
    pub fn from_hex(s: &str) -> Result<Self, MalformedColorError> {
        let (r, g, b) = parse_hex(s)?;
        Ok(Self::from_rgb8(r, g, b))
    }

    /// Convert 8-bit sRGB channels to OKLCH (approximate inverse path).
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let r = srgb_to_linear(f64::from(r) / 255.0);
        let g = srgb_to_linear(f64::from(g) / 255.0);
        let b = srgb_to_linear(f64::from(b) / 255.0);
        let (l, a, b) = linear_srgb_to_oklab(r, g, b);
        let c = a.hypot(b);
        let h = normalize_hue(b.atan2(a).to_degrees());
        Self { l, c, h }
    }

    /// Encode as a canonical lowercase `#rrggbb` string.
    ///
    /// Out-of-gamut channels are clamped to [0, 1] before encoding (gamut
    /// clipping); channel values round to the nearest integer, half away
    /// from zero. Every input produces a valid hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Convert to 8-bit sRGB with gamut clipping.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let h_rad = self.h.to_radians();
        let a = self.c * h_rad.cos();
        let b = self.c * h_rad.sin();
        let (r, g, b) = oklab_to_linear_srgb(self.l, a, b);
        (
            encode_channel(r),
            encode_channel(g),
            encode_channel(b),
        )
    }

    /// Increase lightness by `amount`, clamped to [0, 1]. Chroma and hue
    /// are untouched. A negative `amount` darkens.
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        Self {
            l: (self.l + amount).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Decrease lightness by `amount`, clamped to [0, 1]. A negative
    /// `amount` lightens.
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.lighten(-amount)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Normalize a hue angle to [0, 360).
#[inline]
pub(crate) fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

// ─── OKLAB ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Both directions pass through LMS (cone response) space. The forward
// direction cubes the LMS' values; the reverse takes cube roots (f64::cbrt
// is signed, which matters for out-of-gamut intermediates).

/// OKLAB (L, a, b) → linear sRGB. Output may be outside [0, 1].
fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    // OKLAB → LMS' (then cube to undo the cube root)
    let l_ = 0.215_803_7573_f64.mul_add(b, 0.396_337_7774_f64.mul_add(a, l_ok));
    let m_ = 0.063_854_1728_f64.mul_add(-b, 0.105_561_3458_f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_5480_f64.mul_add(-b, 0.089_484_1775_f64.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → linear sRGB
    let r = 0.230_969_9292_f64.mul_add(s, 4.076_741_6621_f64.mul_add(l, -3.307_711_5913 * m));
    let g = 0.341_319_3965_f64.mul_add(-s, (-1.268_438_0046_f64).mul_add(l, 2.609_757_4011 * m));
    let b = 1.707_614_7010_f64.mul_add(s, (-0.004_196_0863_f64).mul_add(l, -0.703_418_6147 * m));

    (r, g, b)
}

/// Linear sRGB → OKLAB (L, a, b).
fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    // Linear sRGB → LMS
    let l = 0.051_445_9929_f64.mul_add(b, 0.412_221_4708_f64.mul_add(r, 0.536_332_5363 * g));
    let m = 0.107_396_9566_f64.mul_add(b, 0.211_903_4982_f64.mul_add(r, 0.680_699_5451 * g));
    let s = 0.629_978_7005_f64.mul_add(b, 0.088_302_4619_f64.mul_add(r, 0.281_718_8376 * g));

    // Signed cube roots: LMS components can go negative out of gamut.
    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_0468_f64.mul_add(-s_, 0.210_454_2553_f64.mul_add(l_, 0.793_617_7850 * m_));
    let a = 0.450_593_7099_f64.mul_add(s_, 1.977_998_4951_f64.mul_add(l_, -2.428_592_2050 * m_));
    let b = 0.808_675_7660_f64.mul_add(-s_, 0.025_904_0371_f64.mul_add(l_, 0.782_771_7662 * m_));

    (l_ok, a, b)
}

// ─── Linear sRGB ↔ sRGB (gamma) ─────────────────────────────────────────────

/// Apply the sRGB gamma curve to one linear channel.
#[inline]
fn linear_to_srgb(x: f64) -> f64 {
    if x <= 0.003_130_8 {
        12.92 * x
    } else {
        1.055f64.mul_add(x.powf(1.0 / 2.4), -0.055)
    }
}

/// Remove the sRGB gamma curve from one channel.
#[inline]
fn srgb_to_linear(x: f64) -> f64 {
    if x <= 0.040_45 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Gamma-encode one linear channel and quantize to 8 bits.
///
/// Clamp happens here, and only here — gamut clipping is deferred to the
/// last possible moment so intermediate math stays exact.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn encode_channel(x: f64) -> u8 {
    (linear_to_srgb(x).clamp(0.0, 1.0) * 255.0).round() as u8
}

// ─── Hex parsing ─────────────────────────────────────────────────────────────

/// Parse exactly `#rrggbb` (case-insensitive) into 8-bit channels.
fn parse_hex(s: &str) -> Result<(u8, u8, u8), MalformedColorError> {
    let bytes = s.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return Err(MalformedColorError::new(s));
    }
    let byte_at = |i: usize| -> Result<u8, MalformedColorError> {
        let hi = parse_hex_digit(bytes[i]).ok_or_else(|| MalformedColorError::new(s))?;
        let lo = parse_hex_digit(bytes[i + 1]).ok_or_else(|| MalformedColorError::new(s))?;
        Ok(hi << 4 | lo)
    };
    Ok((byte_at(1)?, byte_at(3)?, byte_at(5)?))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Helper: assert two hex colors differ by at most 1 per RGB channel.
    fn assert_hex_close(actual: &str, expected: &str) {
        let a = parse_hex(actual).unwrap();
        let e = parse_hex(expected).unwrap();
        let close = |x: u8, y: u8| (i16::from(x) - i16::from(y)).unsigned_abs() <= 1;
        assert!(
            close(a.0, e.0) && close(a.1, e.1) && close(a.2, e.2),
            "hex mismatch: got {actual}, expected {expected}"
        );
    }

    #[test]
    fn output_matches_canonical_form() {
        for (l, c, h) in [
            (0.7, 0.15, 0.0),
            (0.7, 0.15, 120.0),
            (0.3, 0.05, 300.0),
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
        ] {
            let hex = Color::new(l, c, h).to_hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(
                hex[1..].bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()),
                "not lowercase hex: {hex}"
            );
        }
    }

    #[test]
    fn black_and_white_endpoints() {
        assert_eq!(Color::new(0.0, 0.0, 0.0).to_hex(), "#000000");
        assert_eq!(Color::new(1.0, 0.0, 0.0).to_hex(), "#ffffff");
    }

    #[test]
    fn out_of_range_lightness_clips() {
        // No error paths: degenerate inputs clamp to the gamut boundary.
        assert_eq!(Color::new(2.0, 0.0, 0.0).to_hex(), "#ffffff");
        assert_eq!(Color::new(-1.0, 0.0, 0.0).to_hex(), "#000000");
    }

    #[test]
    fn huge_chroma_still_produces_valid_hex() {
        let hex = Color::new(0.5, 3.0, 150.0).to_hex();
        assert!(parse_hex(&hex).is_ok());
    }

    #[test]
    fn round_trip_within_one_unit() {
        // forward(reverse(hex)) must stay within ±1 per channel.
        for hex in [
            "#dc8a78", "#40c4aa", "#7aa6f5", "#000000", "#ffffff", "#808080",
            "#ff0000", "#00ff00", "#0000ff", "#123456", "#fedcba", "#0a0b0c",
        ] {
            let color = Color::from_hex(hex).unwrap();
            assert_hex_close(&color.to_hex(), hex);
        }
    }

    #[test]
    fn round_trip_exhaustive_grays() {
        for v in (0u8..=255).step_by(7) {
            let hex = format!("#{v:02x}{v:02x}{v:02x}");
            let color = Color::from_hex(&hex).unwrap();
            assert_hex_close(&color.to_hex(), &hex);
        }
    }

    #[test]
    fn reverse_of_black_is_zero() {
        let black = Color::from_hex("#000000").unwrap();
        assert!(black.l.abs() < 1e-6);
        assert!(black.c.abs() < 1e-6);
    }

    #[test]
    fn reverse_of_white_is_full_lightness() {
        let white = Color::from_hex("#ffffff").unwrap();
        assert!((white.l - 1.0).abs() < 1e-3, "white L was {}", white.l);
        assert!(white.c < 1e-3, "white C was {}", white.c);
    }

    #[test]
    fn red_hue_near_29() {
        // Pure sRGB red sits near hue 29° in OKLCH.
        let red = Color::from_hex("#ff0000").unwrap();
        assert!(red.h > 20.0 && red.h < 35.0, "red hue was {}", red.h);
        assert!(red.c > 0.2, "red chroma was {}", red.c);
    }

    #[test]
    fn hue_is_normalized() {
        for hex in ["#4080c0", "#c04080", "#80c040"] {
            let color = Color::from_hex(hex).unwrap();
            assert!((0.0..360.0).contains(&color.h), "hue was {}", color.h);
        }
    }

    #[test]
    fn lightness_is_monotone_in_decoded_output() {
        // For fixed chroma and hue, raising L never lowers the decoded L.
        let mut prev = Color::from_hex(&Color::new(0.1, 0.1, 200.0).to_hex())
            .unwrap()
            .l;
        for step in 2..=9 {
            let l = f64::from(step) / 10.0;
            let decoded = Color::from_hex(&Color::new(l, 0.1, 200.0).to_hex())
                .unwrap()
                .l;
            assert!(
                decoded >= prev,
                "decoded L regressed at input L={l}: {decoded} < {prev}"
            );
            prev = decoded;
        }
    }

    #[test]
    fn uppercase_input_accepted() {
        let upper = Color::from_hex("#DC8A78").unwrap();
        let lower = Color::from_hex("#dc8a78").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_hex(), "#dc8a78");
    }

    #[test]
    fn malformed_hex_rejected() {
        for bad in ["", "#", "#12345", "#1234567", "dc8a78", "#dc8a7g", "#dc 8a7", "##c8a78"] {
            let err = Color::from_hex(bad).unwrap_err();
            assert_eq!(err.input, bad);
        }
    }

    #[test]
    fn display_is_hex() {
        let color = Color::from_hex("#40c4aa").unwrap();
        assert_eq!(format!("{color}"), "#40c4aa");
    }

    #[test]
    fn lighten_raises_lightness_only() {
        let color = Color::new(0.5, 0.1, 90.0);
        let lighter = color.lighten(0.2);
        assert!((lighter.l - 0.7).abs() < 1e-12);
        assert!((lighter.c - color.c).abs() < 1e-12);
        assert!((lighter.h - color.h).abs() < 1e-12);
    }

    #[test]
    fn lighten_clamps_at_white() {
        assert!((Color::new(0.9, 0.1, 90.0).lighten(0.5).l - 1.0).abs() < 1e-12);
    }

    #[test]
    fn darken_clamps_at_black() {
        assert!(Color::new(0.1, 0.1, 90.0).darken(0.5).l.abs() < 1e-12);
    }

    #[test]
    fn negative_lighten_darkens() {
        let color = Color::new(0.5, 0.1, 90.0);
        assert_eq!(color.lighten(-0.2), color.darken(0.2));
    }
}
