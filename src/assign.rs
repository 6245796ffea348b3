//! Assign colors to run identifiers.
//!
//! A thin composition over [`palette`](crate::palette): pick a strategy
//! from the identifier count, generate a palette of matching length, and
//! zip the two. The result preserves identifier order (dashboards list
//! runs in insertion order, and the legend should match).

use indexmap::IndexMap;

use crate::palette::{self, UniformParams, VariedParams};

/// Options for [`colors_for_runs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunColorOptions {
    /// OKLCH lightness for the uniform strategy.
    pub lightness: f64,
    /// OKLCH chroma for the uniform strategy.
    pub chroma: f64,
    /// Force the varied strategy regardless of run count.
    pub varied: bool,
}

impl Default for RunColorOptions {
    fn default() -> Self {
        Self {
            lightness: 0.7,
            chroma: 0.15,
            varied: false,
        }
    }
}

/// Map each run identifier to a hex color.
///
/// Uses the varied strategy when `options.varied` is set or when there are
/// more than 8 runs (past that point hue spacing alone stops separating
/// well); otherwise uniform spacing at the option's lightness and chroma.
/// Identifiers pair positionally with the generated palette, and the
/// returned map iterates in input order.
///
/// Duplicate identifiers collapse under normal map semantics — the last
/// occurrence wins, leaving earlier palette entries unused. Callers are
/// expected to pass unique identifiers.
///
/// # Examples
///
/// ```
/// use runhue::{RunColorOptions, colors_for_runs};
///
/// let colors = colors_for_runs(&["train", "eval", "test"], &RunColorOptions::default());
/// assert_eq!(colors.len(), 3);
/// assert!(colors["train"].starts_with('#'));
/// ```
#[must_use]
pub fn colors_for_runs<S: AsRef<str>>(
    run_ids: &[S],
    options: &RunColorOptions,
) -> IndexMap<String, String> {
    let n = run_ids.len();
    let colors = if options.varied || n > 8 {
        palette::varied(n, &VariedParams::default())
    } else {
        palette::uniform(
            n,
            &UniformParams {
                lightness: options.lightness,
                chroma: options.chroma,
                ..UniformParams::default()
            },
        )
    };

    run_ids
        .iter()
        .zip(colors)
        .map(|(id, color)| (id.as_ref().to_owned(), color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_match_input_identifiers() {
        let colors = colors_for_runs(&["train", "eval", "test"], &RunColorOptions::default());
        let keys: Vec<&str> = colors.keys().map(String::as_str).collect();
        assert_eq!(keys, ["train", "eval", "test"]);
    }

    #[test]
    fn values_are_canonical_hex() {
        let colors = colors_for_runs(&["a", "b", "c"], &RunColorOptions::default());
        for color in colors.values() {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].bytes().all(|b| b.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn small_run_set_uses_uniform_strategy() {
        let ids = ["a", "b", "c"];
        let colors = colors_for_runs(&ids, &RunColorOptions::default());
        let expected = palette::uniform(3, &UniformParams::default());
        let values: Vec<&String> = colors.values().collect();
        assert_eq!(values, expected.iter().collect::<Vec<_>>());
    }

    #[test]
    fn many_runs_switch_to_varied_strategy() {
        let ids: Vec<String> = (0..12).map(|i| format!("run{i}")).collect();
        let colors = colors_for_runs(&ids, &RunColorOptions::default());
        assert_eq!(colors.len(), 12);

        let expected = palette::varied(12, &VariedParams::default());
        let values: Vec<&String> = colors.values().collect();
        assert_eq!(values, expected.iter().collect::<Vec<_>>());

        let unique: HashSet<&String> = colors.values().collect();
        assert_eq!(unique.len(), 12, "12 auto-varied colors should be distinct");
    }

    #[test]
    fn exactly_eight_runs_stay_uniform() {
        let ids: Vec<String> = (0..8).map(|i| format!("run{i}")).collect();
        let colors = colors_for_runs(&ids, &RunColorOptions::default());
        let expected = palette::uniform(8, &UniformParams::default());
        let values: Vec<&String> = colors.values().collect();
        assert_eq!(values, expected.iter().collect::<Vec<_>>());
    }

    #[test]
    fn varied_flag_forces_varied_for_small_sets() {
        let opts = RunColorOptions {
            varied: true,
            ..RunColorOptions::default()
        };
        let colors = colors_for_runs(&["a", "b", "c"], &opts);
        let expected = palette::varied(3, &VariedParams::default());
        let values: Vec<&String> = colors.values().collect();
        assert_eq!(values, expected.iter().collect::<Vec<_>>());
    }

    #[test]
    fn custom_lightness_and_chroma_flow_through() {
        let opts = RunColorOptions {
            lightness: 0.6,
            chroma: 0.2,
            varied: false,
        };
        let colors = colors_for_runs(&["a", "b"], &opts);
        let defaults = colors_for_runs(&["a", "b"], &RunColorOptions::default());
        assert_ne!(colors, defaults);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        let colors = colors_for_runs::<&str>(&[], &RunColorOptions::default());
        assert!(colors.is_empty());
    }

    #[test]
    fn duplicate_identifiers_collapse() {
        // Documented input-validation debt: duplicates collapse, last wins.
        let colors = colors_for_runs(&["a", "b", "a"], &RunColorOptions::default());
        assert_eq!(colors.len(), 2);
        let expected = palette::uniform(3, &UniformParams::default());
        assert_eq!(colors["a"], expected[2]);
        assert_eq!(colors["b"], expected[1]);
    }

    #[test]
    fn insertion_order_preserved() {
        let ids = ["zulu", "alpha", "mike"];
        let colors = colors_for_runs(&ids, &RunColorOptions::default());
        let keys: Vec<&str> = colors.keys().map(String::as_str).collect();
        assert_eq!(keys, ids);
    }
}
