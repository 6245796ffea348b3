//! Palette generation — ordered sequences of distinguishable colors.
//!
//! Four strategies, each a pure function from a count to an ordered list
//! of hex strings:
//!
//! - [`uniform`] — evenly spaced hues at constant lightness/chroma. The
//!   workhorse for up to ~8 categories.
//! - [`varied`] — hue spacing plus a zigzag through the lightness–chroma
//!   plane, for when hue alone stops being enough (more than ~8 colors).
//! - [`sequential`] — a light-to-dark single-hue ramp for ordinal data.
//! - [`diverging`] — two hues meeting at a neutral midpoint, for data
//!   with a meaningful center.
//!
//! Order is significant: callers map index → category. All strategies
//! return an empty vec for `n == 0` and are deterministic for a given
//! parameter set.

use crate::color::{Color, normalize_hue};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Which palette-generation strategy to run, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Evenly spaced hues, constant lightness and chroma.
    Uniform(UniformParams),
    /// Hue spacing plus a lightness/chroma zigzag for extra separation.
    Varied(VariedParams),
    /// Light-to-dark ramp at a single hue.
    Sequential(SequentialParams),
    /// Two hues diverging from a neutral midpoint.
    Diverging(DivergingParams),
}

/// Parameters for [`uniform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformParams {
    /// OKLCH lightness. 0.7 reads well on white backgrounds; ~0.65 suits
    /// dark ones.
    pub lightness: f64,
    /// OKLCH chroma. 0.15 is vivid without being garish.
    pub chroma: f64,
    /// Starting hue angle in degrees — rotates the whole palette.
    pub hue_start: f64,
    /// Span of hues to use. 360 covers the full wheel; less restricts the
    /// palette to a slice of the spectrum.
    pub hue_range: f64,
}

impl Default for UniformParams {
    fn default() -> Self {
        Self {
            lightness: 0.7,
            chroma: 0.15,
            hue_start: 0.0,
            hue_range: 360.0,
        }
    }
}

/// Parameters for [`varied`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariedParams {
    /// (min, max) lightness walked by the zigzag.
    pub lightness_range: (f64, f64),
    /// (min, max) chroma walked by the zigzag.
    pub chroma_range: (f64, f64),
}

impl Default for VariedParams {
    fn default() -> Self {
        Self {
            lightness_range: (0.55, 0.8),
            chroma_range: (0.12, 0.18),
        }
    }
}

/// Parameters for [`sequential`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialParams {
    /// The single hue of the ramp. Default 250 (blue).
    pub hue: f64,
}

impl Default for SequentialParams {
    fn default() -> Self {
        Self { hue: 250.0 }
    }
}

/// Parameters for [`diverging`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergingParams {
    /// Hue for the low half. Default 250 (blue).
    pub hue_low: f64,
    /// Hue for the high half. Default 30 (orange).
    pub hue_high: f64,
}

impl Default for DivergingParams {
    fn default() -> Self {
        Self {
            hue_low: 250.0,
            hue_high: 30.0,
        }
    }
}

/// Generate `n` colors under the given strategy.
///
/// The single funnel for all four strategies — equivalent to calling the
/// per-strategy function directly.
#[must_use]
pub fn palette(n: usize, strategy: &Strategy) -> Vec<String> {
    match strategy {
        Strategy::Uniform(p) => uniform(n, p),
        Strategy::Varied(p) => varied(n, p),
        Strategy::Sequential(p) => sequential(n, p),
        Strategy::Diverging(p) => diverging(n, p),
    }
}

/// Generate `n` evenly hue-spaced colors at constant lightness and chroma.
///
/// `hue_i = (hue_start + i * hue_range / n) mod 360`. With the default
/// full-wheel range the step is `360 / n`, which leaves a gap before the
/// first hue repeats — the first and last colors never collide.
#[must_use]
pub fn uniform(n: usize, params: &UniformParams) -> Vec<String> {
    (0..n)
        .map(|i| {
            let hue = normalize_hue(params.hue_start + i as f64 * params.hue_range / n as f64);
            Color::new(params.lightness, params.chroma, hue).to_hex()
        })
        .collect()
}

/// Generate `n` colors varying lightness and chroma alongside hue.
///
/// Hue remains the primary separation axis (`i * 360 / n`). On top of it,
/// even indices walk lightness down from the top of the range while chroma
/// rises, and odd indices walk lightness up from the midpoint while chroma
/// falls — a zigzag through the L–C plane that keeps neighbours apart when
/// many hues start to crowd. Intended for palettes past ~8 entries.
///
/// The zigzag parameterization is a tuned heuristic; its exact thresholds
/// are reference behavior, reproduced bit for bit.
#[must_use]
pub fn varied(n: usize, params: &VariedParams) -> Vec<String> {
    let (l_min, l_max) = params.lightness_range;
    let (c_min, c_max) = params.chroma_range;

    (0..n)
        .map(|i| {
            let hue = normalize_hue(i as f64 * 360.0 / n as f64);
            // n == 1 would divide by zero; a single color gets t = 0.
            let t = i as f64 / (n - 1).max(1) as f64;

            let (lightness, chroma) = if i % 2 == 0 {
                (
                    (l_max - l_min).mul_add(t.mul_add(-0.5, 1.0), l_min),
                    (c_max - c_min).mul_add(t, c_min),
                )
            } else {
                (
                    (l_max - l_min).mul_add(t.mul_add(0.5, 0.5), l_min),
                    (c_max - c_min).mul_add(-(t * 0.5), c_max),
                )
            };

            Color::new(lightness, chroma, hue).to_hex()
        })
        .collect()
}

/// Generate a light-to-dark ramp at a single hue, for ordered data.
///
/// Lightness falls linearly from 0.9 to 0.35 across the ramp; chroma rises
/// from 0.08 to 0.20 so the dark end doesn't go muddy.
#[must_use]
pub fn sequential(n: usize, params: &SequentialParams) -> Vec<String> {
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1).max(1) as f64;
            let lightness = t.mul_add(-0.55, 0.9);
            let chroma = t.mul_add(0.12, 0.08);
            Color::new(lightness, chroma, params.hue).to_hex()
        })
        .collect()
}

/// Generate a diverging palette: `hue_low` through neutral to `hue_high`.
///
/// Symmetric about `mid = (n - 1) / 2`. The low side ramps dark+saturated
/// toward light+neutral; the high side mirrors it back down. The exact
/// midpoint index (odd `n` only) is a neutral near-white. Odd counts look
/// best — even counts simply have no neutral entry.
#[must_use]
pub fn diverging(n: usize, params: &DivergingParams) -> Vec<String> {
    let mid = (n as f64 - 1.0) / 2.0;

    (0..n)
        .map(|i| {
            let i = i as f64;
            let (lightness, chroma, hue) = if i < mid {
                let t = if mid > 0.0 { i / mid } else { 0.0 };
                (t.mul_add(0.45, 0.45), 0.18 * (1.0 - t), params.hue_low)
            } else if i > mid {
                let span = n as f64 - 1.0 - mid;
                let t = if span > 0.0 { (i - mid) / span } else { 0.0 };
                (t.mul_add(-0.45, 0.9), 0.18 * t, params.hue_high)
            } else {
                // True midpoint: neutral, hue irrelevant at zero chroma.
                (0.9, 0.0, 0.0)
            };
            Color::new(lightness, chroma, hue).to_hex()
        })
        .collect()
}

/// Categorical preset: uniform spacing tuned for chart pop on white
/// backgrounds (lightness 0.65, chroma 0.18).
#[must_use]
pub fn categorical(n: usize) -> Vec<String> {
    uniform(
        n,
        &UniformParams {
            lightness: 0.65,
            chroma: 0.18,
            ..UniformParams::default()
        },
    )
}

// ---------------------------------------------------------------------------
// ColorMap
// ---------------------------------------------------------------------------

/// A prebuilt palette with wrapping index lookup.
///
/// Convenient when categories arrive one at a time and may outnumber the
/// palette: [`ColorMap::get`] wraps out-of-bounds indices around instead
/// of panicking, and an empty map falls back to gray.
///
/// # Examples
///
/// ```
/// use runhue::ColorMap;
///
/// let cm = ColorMap::new(3);
/// assert_eq!(cm.len(), 3);
/// assert_eq!(cm.get(0), cm.get(3)); // wraps
/// ```
#[derive(Debug, Clone)]
pub struct ColorMap {
    colors: Vec<String>,
}

/// Fallback for lookups against an empty map.
const GRAY_FALLBACK: &str = "#808080";

impl ColorMap {
    /// Build a map of `n` uniform colors with default parameters.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            colors: uniform(n, &UniformParams::default()),
        }
    }

    /// Build a map of `n` uniform colors with explicit parameters.
    #[must_use]
    pub fn with_params(n: usize, params: &UniformParams) -> Self {
        Self {
            colors: uniform(n, params),
        }
    }

    /// Build a map of `n` varied colors (better separation past ~8).
    #[must_use]
    pub fn varied(n: usize) -> Self {
        Self {
            colors: varied(n, &VariedParams::default()),
        }
    }

    /// Look up a color by index, wrapping modulo the palette length.
    /// An empty map returns a gray fallback.
    #[must_use]
    pub fn get(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            GRAY_FALLBACK
        } else {
            &self.colors[index % self.colors.len()]
        }
    }

    /// Number of colors in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the map holds no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over the colors in palette order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.colors.iter()
    }
}

impl std::ops::Index<usize> for ColorMap {
    type Output = str;

    /// Direct (non-wrapping) indexing. Panics out of bounds, like a slice.
    fn index(&self, index: usize) -> &Self::Output {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a ColorMap {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
