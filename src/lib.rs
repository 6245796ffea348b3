//! # runhue — perceptually uniform run colors
//!
//! Generates visually distinguishable hex colors for a set of categories
//! (experiment runs in a dashboard, series in a chart). All generation
//! happens in OKLCH, a perceptually uniform color space: equal numeric
//! steps correspond to equal perceived differences, so evenly spaced hues
//! actually *look* evenly spaced.
//!
//! # Architecture
//!
//! ```text
//! run identifiers
//!     │
//!     ▼
//! assign.rs:  pick a strategy (uniform / varied) and zip ids with colors
//!     │
//!     ▼
//! palette.rs: generate ordered OKLCH color sequences (four strategies)
//!     │
//!     ▼
//! color.rs:   OKLCH → OKLAB → linear sRGB → sRGB → "#rrggbb"
//! ```
//!
//! [`adjust`] runs the pipeline in both directions independently: hex in,
//! lightness nudged in OKLCH, hex out.
//!
//! # Boundary
//!
//! The only representation that crosses the crate boundary is the canonical
//! hex string: `#` followed by 6 lowercase hex digits. OKLCH and linear-RGB
//! values are internal intermediates. Everything is a pure, deterministic,
//! synchronous function of its inputs — no I/O, no shared state, safe to
//! call from any thread.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Mathematical code uses small integer-to-float casts (loop indices, angles).
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod adjust;
pub mod assign;
pub mod color;
pub mod error;
pub mod palette;

pub use adjust::{darken, lighten};
pub use assign::{RunColorOptions, colors_for_runs};
pub use color::Color;
pub use error::MalformedColorError;
pub use palette::{ColorMap, Strategy, palette};
