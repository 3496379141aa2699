// SPDX-License-Identifier: MIT
//
// Rgb: an opaque 8-bit sRGB color, the unit every theme file is made of.
//
// Theme files store colors as `#rrggbb`. `Rgb` is the typed form of that
// string: it hashes and compares by channel value, so two roles that would
// print the same hex are detected as a collision without string handling.

use std::fmt;
use std::str::FromStr;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8 bits per channel.
///
/// # Examples
///
/// ```
/// use edit_color::Rgb;
///
/// let teal = Rgb::new(0x32, 0x65, 0x99);
/// assert_eq!(teal.to_hex(), "#326599");
/// assert_eq!(Rgb::from_hex("#326599"), Some(teal));
/// assert_eq!(Rgb::from_hex("326599"), Some(teal));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `rrggbb` color, with or without a leading `#`.
    ///
    /// Exactly six hex digits are accepted, in either case. Returns `None`
    /// for anything else (short forms, alpha, stray characters).
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let bytes = s.as_bytes();
        if bytes.len() != 6 {
            return None;
        }
        Some(Self::new(
            parse_hex_byte(bytes[0], bytes[1])?,
            parse_hex_byte(bytes[2], bytes[3])?,
            parse_hex_byte(bytes[4], bytes[5])?,
        ))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Difference between the largest and smallest channel.
    ///
    /// Zero for pure grays; a cheap stand-in for saturation when checking
    /// that a palette stays achromatic.
    #[must_use]
    pub fn channel_spread(self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min
    }

    /// Relative luminance per WCAG 2.1, in [0.0, 1.0].
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let (r, g, b) = (linearize(self.r), linearize(self.g), linearize(self.b));
        0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
    }

    /// WCAG 2.1 contrast ratio against `other`, in [1.0, 21.0].
    ///
    /// Symmetric: argument order does not matter.
    #[must_use]
    pub fn contrast_ratio(self, other: Self) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error from parsing a string that is not a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRgbError(String);

impl fmt::Display for ParseRgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color {:?}", self.0)
    }
}

impl std::error::Error for ParseRgbError {}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| ParseRgbError(s.to_owned()))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Inverse sRGB gamma for one 8-bit channel.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
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

#[inline]
fn parse_hex_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(parse_hex_digit(hi)? << 4 | parse_hex_digit(lo)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
