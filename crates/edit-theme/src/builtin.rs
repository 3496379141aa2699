//! The shipped theme table: every theme pair the editor bundles.
//!
//! Table order is the generation order of a full regeneration run. Each
//! entry is pure data; [`ThemeDefinition::generate`] turns it into colors.

use crate::attr::AttributeOverride;
use crate::generator::{GeneratedTheme, SaturationRange, ThemeGenerator, Variant};

/// Static description of one theme pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDefinition {
    /// Kebab-case base name; also the file-name stem.
    pub name: &'static str,
    /// One to four hue seeds in degrees.
    pub hues: &'static [i32],
    pub saturation: SaturationRange,
    /// `(key, value)` attribute overrides, written in this order.
    pub attributes: &'static [(&'static str, &'static str)],
}

impl ThemeDefinition {
    #[must_use]
    pub fn attribute_overrides(&self) -> Vec<AttributeOverride> {
        self.attributes
            .iter()
            .map(|&(key, value)| AttributeOverride::new(key, value))
            .collect()
    }

    /// Derive one variant of this theme with a fresh generator.
    #[must_use]
    pub fn generate(&self, variant: Variant) -> GeneratedTheme {
        ThemeGenerator::new(self.hues, variant, self.saturation).generate(self.attribute_overrides())
    }
}

const fn theme(
    name: &'static str,
    hues: &'static [i32],
    (min, max): (i32, i32),
    attributes: &'static [(&'static str, &'static str)],
) -> ThemeDefinition {
    ThemeDefinition {
        name,
        hues,
        saturation: SaturationRange::new(min, max),
        attributes,
    }
}

/// Number of shipped theme pairs.
pub const BUILTIN_COUNT: usize = 56;

#[rustfmt::skip]
pub static BUILTIN_THEMES: [ThemeDefinition; BUILTIN_COUNT] = [
    // ── Colorblindness-friendly themes ──
    theme("protanopia", &[210, 50, 270], (40, 70), &[]),
    theme("deuteranopia", &[220, 45, 280], (40, 70), &[]),
    theme("tritanopia", &[0, 120, 30], (50, 75), &[]),
    theme("achromatopsia", &[0, 0, 0], (0, 8), &[]),

    // ── Holidays ──
    theme("christmas", &[0, 120, 45], (60, 85), &[("syntax_keyword_attr", "bold")]),
    theme("easter", &[300, 60, 180], (45, 65), &[("syntax_comment_attr", "italic")]),
    theme("halloween", &[25, 270, 0], (70, 90), &[("syntax_keyword_attr", "bold")]),
    theme("thanksgiving", &[25, 35, 15], (50, 75), &[]),
    theme("st-patricks", &[120, 90, 150], (55, 80), &[("syntax_function_attr", "bold")]),
    theme("valentines", &[340, 0, 330], (60, 85), &[("syntax_string_attr", "italic")]),
    theme("independence-day", &[0, 220, 45], (70, 90), &[("syntax_keyword_attr", "bold")]),
    theme("new-years", &[45, 270, 0], (65, 85), &[("syntax_number_attr", "bold")]),
    theme("hanukkah", &[220, 45, 210], (55, 75), &[]),
    theme("diwali", &[30, 45, 0], (70, 90), &[("syntax_keyword_attr", "bold")]),
    theme("chinese-new-year", &[0, 45, 30], (75, 90), &[("syntax_function_attr", "bold")]),
    theme("mardi-gras", &[270, 45, 120], (65, 85), &[]),

    // ── Decades ──
    theme("1820s-regency", &[30, 45, 180], (25, 45), &[]),
    theme("1830s-romantic", &[35, 280, 20], (25, 50), &[]),
    theme("1840s-victorian-early", &[280, 40, 30], (30, 50), &[]),
    theme("1850s-victorian", &[285, 45, 25], (35, 55), &[]),
    theme("1860s-civil-war", &[210, 30, 0], (30, 55), &[]),
    theme("1870s-gilded", &[45, 280, 35], (40, 60), &[]),
    theme("1880s-aesthetic", &[120, 280, 45], (35, 55), &[]),
    theme("1890s-art-nouveau", &[120, 45, 200], (40, 60), &[]),
    theme("1900s-edwardian", &[30, 200, 280], (40, 60), &[]),
    theme("1910s-belle-epoque", &[45, 300, 180], (40, 60), &[]),
    theme("1920s-art-deco", &[45, 0, 180], (55, 75), &[("syntax_keyword_attr", "bold")]),
    theme("1930s-depression", &[35, 180, 20], (30, 55), &[]),
    theme("1940s-wartime", &[120, 35, 200], (35, 55), &[]),
    theme("1950s-atomic", &[180, 330, 45], (55, 75), &[]),
    theme("1960s-psychedelic", &[30, 180, 300, 60], (75, 95), &[("syntax_keyword_attr", "bold"), ("syntax_comment_attr", "italic")]),
    theme("1970s-earth-tones", &[25, 90, 35], (45, 70), &[]),
    theme("1980s-neon", &[300, 180, 330], (80, 95), &[("syntax_keyword_attr", "bold")]),
    theme("1990s-grunge", &[180, 270, 30], (40, 65), &[]),
    theme("2000s-web", &[200, 30, 280], (50, 75), &[]),
    theme("2010s-flat", &[190, 340, 45], (55, 75), &[]),
    theme("2020s-modern", &[260, 180, 330], (50, 75), &[("syntax_comment_attr", "italic")]),

    // ── Cyberpunk ──
    theme("cyberpunk-neon", &[300, 180, 60], (85, 100), &[("syntax_keyword_attr", "bold"), ("syntax_comment_attr", "italic")]),
    theme("cyberpunk-matrix", &[120, 150, 90], (80, 95), &[("syntax_function_attr", "bold")]),
    theme("cyberpunk-blade-runner", &[20, 200, 280], (65, 85), &[("syntax_keyword_attr", "bold")]),
    theme("cyberpunk-akira", &[0, 220, 45], (75, 95), &[("syntax_keyword_attr", "bold")]),
    theme("cyberpunk-ghost", &[200, 280, 340], (60, 80), &[("syntax_comment_attr", "italic")]),

    // ── Synthwave ──
    theme("synthwave-retro", &[280, 320, 200], (80, 95), &[("syntax_keyword_attr", "bold"), ("syntax_string_attr", "italic")]),
    theme("synthwave-sunset", &[320, 280, 30], (85, 100), &[("syntax_function_attr", "bold")]),
    theme("synthwave-outrun", &[300, 180, 340], (85, 100), &[("syntax_keyword_attr", "bold")]),
    theme("synthwave-miami", &[180, 320, 45], (80, 95), &[]),
    theme("synthwave-arcade", &[270, 180, 60], (85, 100), &[("syntax_keyword_attr", "bold")]),

    // ── Darkwave ──
    theme("darkwave-gothic", &[270, 300, 0], (25, 50), &[("syntax_comment_attr", "italic")]),
    theme("darkwave-industrial", &[0, 30, 200], (20, 45), &[("syntax_keyword_attr", "bold")]),
    theme("darkwave-ethereal", &[240, 280, 200], (25, 50), &[("syntax_comment_attr", "italic"), ("syntax_string_attr", "italic")]),
    theme("darkwave-coldwave", &[200, 240, 270], (20, 45), &[]),
    theme("darkwave-deathrock", &[280, 0, 300], (30, 55), &[("syntax_keyword_attr", "bold")]),

    // ── High Contrast ──
    theme("high-contrast", &[60, 180, 300, 0], (90, 100), &[("syntax_keyword_attr", "bold"), ("syntax_function_attr", "bold")]),
    theme("high-contrast-warm", &[0, 30, 60], (90, 100), &[("syntax_keyword_attr", "bold")]),
    theme("high-contrast-cool", &[180, 220, 260], (90, 100), &[("syntax_keyword_attr", "bold")]),
    theme("high-contrast-mono", &[0], (0, 8), &[("syntax_keyword_attr", "bold"), ("syntax_comment_attr", "italic")]),
];

/// Look up a shipped theme by its base name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<&'static ThemeDefinition> {
    BUILTIN_THEMES.iter().find(|def| def.name == name)
}

/// Base names of all shipped themes, in table order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_THEMES.iter().map(|def| def.name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
