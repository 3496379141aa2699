//! WCAG contrast audit of a generated theme.
//!
//! Generation never adjusts colors for readability: a theme's colors are a
//! pure function of its seeds. This module only measures. Each `*_fg` role
//! is checked against its `*_bg` sibling, and `foreground` against
//! `background`; pairs below [`MIN_CONTRAST`] are reported.

use crate::colors::ThemeColors;
use crate::role::{ROLES, role_index};

/// WCAG 2.1 AA minimum for normal text.
pub const MIN_CONTRAST: f64 = 4.5;

/// A foreground role and the background it is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastPair {
    pub fg: &'static str,
    pub bg: &'static str,
}

/// A pair that fell short of the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastIssue {
    pub pair: ContrastPair,
    pub ratio: f64,
}

/// Every text-on-surface pair in the role table, in table order.
pub fn contrast_pairs() -> impl Iterator<Item = ContrastPair> {
    let main = ContrastPair {
        fg: "foreground",
        bg: "background",
    };
    let siblings = ROLES.iter().filter_map(|role| {
        let stem = role.key.strip_suffix("_fg")?;
        let bg = ROLES.get(role_index(&format!("{stem}_bg"))?)?.key;
        Some(ContrastPair { fg: role.key, bg })
    });
    std::iter::once(main).chain(siblings)
}

/// Pairs of `colors` below [`MIN_CONTRAST`].
#[must_use]
pub fn audit(colors: &ThemeColors) -> Vec<ContrastIssue> {
    audit_with(colors, MIN_CONTRAST)
}

/// Pairs of `colors` whose contrast ratio is below `min_ratio`.
#[must_use]
pub fn audit_with(colors: &ThemeColors, min_ratio: f64) -> Vec<ContrastIssue> {
    contrast_pairs()
        .filter_map(|pair| {
            let ratio = colors.get(pair.fg)?.contrast_ratio(colors.get(pair.bg)?);
            (ratio < min_ratio).then_some(ContrastIssue { pair, ratio })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use edit_color::Rgb;

    use super::*;
    use crate::generator::{SaturationRange, ThemeGenerator, Variant};
    use crate::role::ROLE_COUNT;

    /// Foreground-ish roles white, everything else black.
    fn black_and_white() -> ThemeColors {
        let mut colors = [Rgb::BLACK; ROLE_COUNT];
        for (slot, role) in colors.iter_mut().zip(ROLES.iter()) {
            if role.key.ends_with("_fg") || role.key == "foreground" {
                *slot = Rgb::WHITE;
            }
        }
        ThemeColors::new(colors, Vec::new())
    }

    #[test]
    fn pairs_cover_every_fg_with_a_bg() {
        let pairs: Vec<_> = contrast_pairs().collect();
        assert_eq!(pairs.len(), 41);
        assert_eq!(pairs[0].fg, "foreground");
        assert!(pairs.contains(&ContrastPair {
            fg: "syntax_escape_fg",
            bg: "syntax_escape_bg"
        }));
        assert!(pairs.iter().all(|p| p.fg != "trailing_ws"));
    }

    #[test]
    fn black_on_white_passes() {
        assert!(audit(&black_and_white()).is_empty());
    }

    #[test]
    fn flat_theme_fails_everywhere() {
        let flat = ThemeColors::new([Rgb::new(0x80, 0x80, 0x80); ROLE_COUNT], Vec::new());
        let issues = audit(&flat);
        assert_eq!(issues.len(), 41);
        assert!(issues.iter().all(|i| (i.ratio - 1.0).abs() < 1e-12));
    }

    #[test]
    fn threshold_is_configurable() {
        assert_eq!(audit_with(&black_and_white(), 21.5).len(), 41);
    }

    #[test]
    fn christmas_dark_main_text_is_readable() {
        let colors = ThemeGenerator::new(&[0, 120, 45], Variant::Dark, SaturationRange::new(60, 85))
            .generate(Vec::new())
            .colors;
        let issues = audit(&colors);
        assert!(issues.iter().all(|i| i.pair.fg != "foreground"));
    }
}
