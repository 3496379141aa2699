//! Color derivation, from hue seeds to concrete collision-free colors.
//!
//! A [`ThemeGenerator`] owns everything one theme variant needs: the variant
//! (dark or light), the saturation range, the resolved hue seeds, and the set
//! of colors already handed out. Each role recipe maps a hue and a small
//! variation index to an HSL triple with fixed arithmetic, then asks
//! [`ThemeGenerator::unique_color`] for a color nobody else in the theme uses.
//!
//! Uniqueness is best-effort: a colliding candidate is perturbed along a
//! fixed recurrence at most [`MAX_ATTEMPTS`] times, and if every candidate is
//! taken the last one is accepted anyway.

use std::collections::HashSet;

use edit_color::{Rgb, hsl_to_rgb};
use tracing::warn;

use crate::attr::AttributeOverride;
use crate::colors::ThemeColors;
use crate::role::{ROLE_COUNT, ROLES, Recipe};

/// Perturbation budget per color before a collision is accepted.
pub const MAX_ATTEMPTS: u32 = 100;

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

/// Dark or light half of a theme pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Dark,
    Light,
}

impl Variant {
    /// Both variants in the order they are written.
    pub const BOTH: [Self; 2] = [Self::Dark, Self::Light];

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// File-name suffix (`christmas-dark.ini`).
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Display-name suffix (`Christmas Dark`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ---------------------------------------------------------------------------
// Saturation range and hue seeds
// ---------------------------------------------------------------------------

/// Saturation bounds in percent. Backgrounds and foregrounds build up from
/// `min`; accents step down from `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaturationRange {
    pub min: i32,
    pub max: i32,
}

impl SaturationRange {
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl Default for SaturationRange {
    fn default() -> Self {
        Self::new(40, 80)
    }
}

/// Which of the four hue seeds a recipe draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seed {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
}

/// The four hue seeds of a theme, with missing ones filled in.
///
/// Themes list 1–4 hues. Absent seeds rotate the primary hue by 120°, 240°
/// and 60° respectively. Hues past the fourth are ignored; an empty list
/// behaves like a single hue of 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueSeeds([i32; 4]);

impl HueSeeds {
    #[must_use]
    pub fn resolve(hues: &[i32]) -> Self {
        let primary = hues.first().copied().unwrap_or(0);
        let seed = |index: usize, offset: i32| {
            hues.get(index)
                .copied()
                .unwrap_or_else(|| (primary + offset).rem_euclid(360))
        };
        Self([primary, seed(1, 120), seed(2, 240), seed(3, 60)])
    }

    #[must_use]
    pub const fn get(self, seed: Seed) -> i32 {
        match seed {
            Seed::Primary => self.0[0],
            Seed::Secondary => self.0[1],
            Seed::Tertiary => self.0[2],
            Seed::Quaternary => self.0[3],
        }
    }
}

// ---------------------------------------------------------------------------
// Generation output
// ---------------------------------------------------------------------------

/// Bookkeeping from one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationStats {
    /// Total perturbation steps taken across all roles.
    pub perturbations: u32,
    /// Roles that ran out of attempts and kept a duplicate color.
    pub exhausted: u32,
}

/// A finished theme variant: the colors plus how hard they were to find.
#[derive(Debug, Clone)]
pub struct GeneratedTheme {
    pub colors: ThemeColors,
    pub stats: GenerationStats,
}

// ---------------------------------------------------------------------------
// ThemeGenerator
// ---------------------------------------------------------------------------

/// Derives the colors of one theme variant.
///
/// The collision set lives as long as the generator, so uniqueness spans
/// every role of the variant. Dark and light variants use separate
/// generators and never see each other's colors.
#[derive(Debug, Clone)]
pub struct ThemeGenerator {
    variant: Variant,
    saturation: SaturationRange,
    seeds: HueSeeds,
    used: HashSet<Rgb>,
    stats: GenerationStats,
}

impl ThemeGenerator {
    #[must_use]
    pub fn new(hues: &[i32], variant: Variant, saturation: SaturationRange) -> Self {
        Self {
            variant,
            saturation,
            seeds: HueSeeds::resolve(hues),
            used: HashSet::with_capacity(ROLE_COUNT),
            stats: GenerationStats::default(),
        }
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub const fn seeds(&self) -> HueSeeds {
        self.seeds
    }

    #[must_use]
    pub const fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// Whether `color` has already been handed out by this generator.
    #[must_use]
    pub fn is_used(&self, color: Rgb) -> bool {
        self.used.contains(&color)
    }

    /// Derive every role in table order and hand back the finished variant.
    ///
    /// `attributes` pass through untouched into the result.
    #[must_use]
    pub fn generate(mut self, attributes: Vec<AttributeOverride>) -> GeneratedTheme {
        let mut colors = [Rgb::default(); ROLE_COUNT];
        for (slot, role) in colors.iter_mut().zip(ROLES.iter()) {
            *slot = self.derive(role.recipe);
        }
        GeneratedTheme {
            colors: ThemeColors::new(colors, attributes),
            stats: self.stats,
        }
    }

    /// Derive one color from a recipe.
    pub fn derive(&mut self, recipe: Recipe) -> Rgb {
        match recipe {
            Recipe::Background(seed, v) => self.background(self.seeds.get(seed), v),
            Recipe::Foreground(seed, v) => self.foreground(self.seeds.get(seed), v),
            Recipe::Accent(seed, v) => self.accent(self.seeds.get(seed), v),
            Recipe::SubtleBackground(seed, v) => self.subtle_background(self.seeds.get(seed), v),
            Recipe::Warning(v) => self.warning(v),
            Recipe::Error(v) => self.error(v),
            Recipe::Success(v) => self.success(v),
        }
    }

    /// Find a color no other role of this theme uses, starting from the
    /// given HSL candidate.
    ///
    /// The hue is wrapped into [0, 360), saturation clamped to [0, 100] and
    /// lightness to [5, 95]. While the candidate is taken, lightness cycles
    /// through a 90-wide band, saturation through an 80-wide band offset by
    /// 10, and the hue advances 7°. After [`MAX_ATTEMPTS`] perturbations the
    /// last candidate is kept even if it collides. Whatever is returned is
    /// recorded as used.
    pub fn unique_color(&mut self, hue: i32, sat: i32, light: i32) -> Rgb {
        let mut hue = hue.rem_euclid(360);
        let mut sat = sat.clamp(0, 100);
        let mut light = light.clamp(5, 95);

        let mut color = candidate(hue, sat, light);
        let mut attempts = 0;
        while self.used.contains(&color) && attempts < MAX_ATTEMPTS {
            light = 5 + (light + 3).rem_euclid(90);
            sat = 10 + (sat + 5).rem_euclid(80);
            hue = (hue + 7).rem_euclid(360);
            color = candidate(hue, sat, light);
            attempts += 1;
        }
        self.stats.perturbations += attempts;

        if !self.used.insert(color) {
            self.stats.exhausted += 1;
            warn!(
                color = %color,
                attempts,
                variant = self.variant.suffix(),
                "collision budget exhausted, keeping duplicate color"
            );
        }
        color
    }

    // ── Role recipes ─────────────────────────────────────────────────

    /// Editor surfaces: very dark (dark) or very light (light).
    pub fn background(&mut self, hue: i32, variation: i32) -> Rgb {
        let light = if self.variant.is_dark() {
            8 + (variation * 2) % 10
        } else {
            92 - (variation * 2) % 8
        };
        let sat = self.saturation.min + (variation * 4) % 15;
        self.unique_color(hue, sat, light)
    }

    /// Text: the inverse of backgrounds.
    pub fn foreground(&mut self, hue: i32, variation: i32) -> Rgb {
        let light = if self.variant.is_dark() {
            70 + (variation * 3) % 25
        } else {
            25 + (variation * 3) % 20
        };
        let sat = self.saturation.min + 15 + (variation * 5) % 25;
        self.unique_color(hue, sat, light)
    }

    /// Highlights: mid lightness, saturation stepping down from the max.
    pub fn accent(&mut self, hue: i32, intensity: i32) -> Rgb {
        let light = if self.variant.is_dark() {
            55 + (intensity * 4) % 20
        } else {
            45 + (intensity * 4) % 15
        };
        let sat = self.saturation.max - (intensity * 3) % 15;
        self.unique_color(hue, sat, light)
    }

    /// Panels and bars one step removed from the main background.
    pub fn subtle_background(&mut self, hue: i32, variation: i32) -> Rgb {
        let light = if self.variant.is_dark() {
            14 + (variation * 2) % 8
        } else {
            86 - (variation * 2) % 8
        };
        let sat = self.saturation.min + (variation * 3) % 12;
        self.unique_color(hue, sat, light)
    }

    /// Oranges and yellows around 35°.
    pub fn warning(&mut self, variation: i32) -> Rgb {
        let hue = 35 + (variation * 8) % 25;
        let light = if self.variant.is_dark() {
            60 + (variation * 4) % 15
        } else {
            45 + (variation * 4) % 12
        };
        self.unique_color(hue, 75, light)
    }

    /// Reds around 5°.
    pub fn error(&mut self, variation: i32) -> Rgb {
        let hue = 5 + (variation * 6) % 15;
        let light = if self.variant.is_dark() {
            55 + (variation * 4) % 18
        } else {
            42 + (variation * 4) % 12
        };
        self.unique_color(hue, 78, light)
    }

    /// Greens around 125°.
    pub fn success(&mut self, variation: i32) -> Rgb {
        let hue = 125 + (variation * 8) % 25;
        let light = if self.variant.is_dark() {
            50 + (variation * 4) % 18
        } else {
            38 + (variation * 4) % 12
        };
        self.unique_color(hue, 60, light)
    }
}

fn candidate(hue: i32, sat: i32, light: i32) -> Rgb {
    hsl_to_rgb(f64::from(hue), f64::from(sat), f64::from(light))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn christmas(variant: Variant) -> ThemeGenerator {
        ThemeGenerator::new(&[0, 120, 45], variant, SaturationRange::new(60, 85))
    }

    fn hex(s: &str) -> Rgb {
        Rgb::from_hex(s).unwrap()
    }

    // ── Seeds ────────────────────────────────────────────────────────

    #[test]
    fn missing_seeds_rotate_primary() {
        let seeds = HueSeeds::resolve(&[300]);
        assert_eq!(seeds.get(Seed::Primary), 300);
        assert_eq!(seeds.get(Seed::Secondary), 60);
        assert_eq!(seeds.get(Seed::Tertiary), 180);
        assert_eq!(seeds.get(Seed::Quaternary), 0);
    }

    #[test]
    fn explicit_seeds_win() {
        let seeds = HueSeeds::resolve(&[30, 180, 300, 60]);
        assert_eq!(seeds, HueSeeds([30, 180, 300, 60]));
        let three = HueSeeds::resolve(&[0, 120, 45]);
        assert_eq!(three, HueSeeds([0, 120, 45, 60]));
    }

    #[test]
    fn empty_hues_fall_back_to_red() {
        assert_eq!(HueSeeds::resolve(&[]), HueSeeds([0, 120, 240, 60]));
    }

    // ── Recipes ──────────────────────────────────────────────────────

    #[test]
    fn first_colors_of_christmas_dark() {
        let mut generator = christmas(Variant::Dark);
        assert_eq!(generator.background(0, 0), hex("#200808"));
        assert_eq!(generator.foreground(0, 0), hex("#eb7979"));
    }

    #[test]
    fn first_colors_of_christmas_light() {
        let mut generator = christmas(Variant::Light);
        assert_eq!(generator.background(0, 0), hex("#f6dede"));
        assert_eq!(generator.foreground(0, 0), hex("#6f0f0f"));
    }

    #[test]
    fn dark_backgrounds_are_dark_and_foregrounds_bright() {
        let mut generator = christmas(Variant::Dark);
        for v in 0..10 {
            let bg = generator.background(0, v);
            let fg = generator.foreground(0, v);
            assert!(bg.relative_luminance() < 0.1, "bg {bg} too light");
            assert!(fg.relative_luminance() > bg.relative_luminance());
        }
    }

    #[test]
    fn light_backgrounds_are_light() {
        // Later variations collide and get perturbed out of the light band.
        let mut generator = christmas(Variant::Light);
        for v in 0..6 {
            let bg = generator.background(0, v);
            assert!(bg.relative_luminance() > 0.5, "bg {bg} too dark");
        }
    }

    #[test]
    fn alert_hues_ignore_theme_seeds() {
        let mut a = ThemeGenerator::new(&[200], Variant::Dark, SaturationRange::new(0, 8));
        let mut b = ThemeGenerator::new(&[20], Variant::Dark, SaturationRange::new(80, 95));
        assert_eq!(a.error(0), b.error(0));
        assert_eq!(a.warning(1), b.warning(1));
        assert_eq!(a.success(2), b.success(2));
    }

    // ── Collision avoidance ──────────────────────────────────────────

    #[test]
    fn repeated_request_is_perturbed() {
        let mut generator = christmas(Variant::Dark);
        let first = generator.unique_color(0, 50, 50);
        let second = generator.unique_color(0, 50, 50);
        assert_ne!(first, second);
        assert_eq!(second, candidate(7, 65, 58));
        assert_eq!(generator.stats().perturbations, 1);
        assert!(generator.is_used(first) && generator.is_used(second));
    }

    #[test]
    fn inputs_are_clamped_before_conversion() {
        let mut generator = christmas(Variant::Dark);
        assert_eq!(generator.unique_color(-30, 150, 100), candidate(330, 100, 95));
        assert_eq!(generator.unique_color(400, -10, 0), candidate(40, 0, 5));
    }

    #[traced_test]
    #[test]
    fn exhausted_budget_keeps_last_candidate() {
        let mut generator = christmas(Variant::Dark);

        // Occupy every candidate the recurrence will visit from (0, 50, 50).
        let (mut hue, mut sat, mut light) = (0, 50, 50);
        let mut last = candidate(hue, sat, light);
        generator.used.insert(last);
        for _ in 0..MAX_ATTEMPTS {
            light = 5 + (light + 3) % 90;
            sat = 10 + (sat + 5) % 80;
            hue = (hue + 7) % 360;
            last = candidate(hue, sat, light);
            generator.used.insert(last);
        }
        let occupied = generator.used.len();

        let color = generator.unique_color(0, 50, 50);
        assert_eq!(color, last);
        assert_eq!(generator.used.len(), occupied);
        assert_eq!(generator.stats().exhausted, 1);
        assert_eq!(generator.stats().perturbations, MAX_ATTEMPTS);
        assert!(logs_contain("collision budget exhausted"));
    }

    // ── Whole-theme generation ───────────────────────────────────────

    #[test]
    fn generate_is_deterministic() {
        let a = christmas(Variant::Dark).generate(Vec::new());
        let b = christmas(Variant::Dark).generate(Vec::new());
        assert_eq!(a.colors, b.colors);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn generate_fills_every_role_uniquely() {
        let generated = christmas(Variant::Light).generate(Vec::new());
        assert_eq!(generated.colors.distinct_count(), ROLE_COUNT);
        assert_eq!(generated.stats.exhausted, 0);
    }

    #[test]
    fn variants_are_independent() {
        let dark = christmas(Variant::Dark).generate(Vec::new());
        let light = christmas(Variant::Light).generate(Vec::new());
        assert_ne!(dark.colors.get("background"), light.colors.get("background"));
    }

    #[test]
    fn attributes_pass_through() {
        let attrs = vec![AttributeOverride::new("syntax_keyword_attr", "bold")];
        let generated = christmas(Variant::Dark).generate(attrs.clone());
        assert_eq!(generated.colors.attributes(), attrs.as_slice());
    }

    proptest::proptest! {
        #[test]
        fn duplicates_are_exactly_the_exhausted_roles(
            hues in proptest::collection::vec(-360i32..720, 0..=4),
            min in 0i32..100,
            width in 0i32..40,
            dark in proptest::bool::ANY,
        ) {
            let variant = if dark { Variant::Dark } else { Variant::Light };
            let saturation = SaturationRange::new(min, min + width);
            let generated = ThemeGenerator::new(&hues, variant, saturation).generate(Vec::new());
            let exhausted = usize::try_from(generated.stats.exhausted).unwrap();
            proptest::prop_assert_eq!(generated.colors.distinct_count(), ROLE_COUNT - exhausted);

            let again = ThemeGenerator::new(&hues, variant, saturation).generate(Vec::new());
            proptest::prop_assert_eq!(again.colors, generated.colors);
        }
    }

    #[test]
    fn christmas_keyword_color() {
        let generated = christmas(Variant::Dark).generate(Vec::new());
        assert_eq!(generated.colors.get("syntax_keyword_fg"), Some(hex("#9af8a5")));
        assert_eq!(generated.colors.get("syntax_escape_bg"), Some(hex("#490f08")));
    }
}
