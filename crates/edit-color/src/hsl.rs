// SPDX-License-Identifier: MIT
//
// HSL → RGB conversion.
//
// Single-character variable names (h, s, l, r, g, b) are the standard
// convention in color science.
#![allow(clippy::many_single_char_names)]
//
// The algorithm is the classic two-term HLS form:
//
//   m2 = l·(1+s)        if l ≤ ½
//   m2 = l + s − l·s    otherwise
//   m1 = 2l − m2
//
//   channel(hue) = piecewise-linear ramp between m1 and m2,
//                  sampled at hue + ⅓ (red), hue (green), hue − ⅓ (blue)
//
// Full lightness is pinned to white. Channels are scaled by 255 and
// truncated, not rounded. Generated theme files are compared byte for byte
// between runs, so every float step here is fixed: no `mul_add`, no
// reordering of the expressions.
#![allow(clippy::suboptimal_flops)]

use crate::rgb::Rgb;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space using the conventional editor ranges.
///
/// - `h`: hue in degrees, 0–360
/// - `s`: saturation in percent, 0–100
/// - `l`: lightness in percent, 0–100
///
/// Values outside those ranges are accepted and clamped on conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Return a copy with every component clamped into its valid range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            h: self.h.clamp(0.0, 360.0),
            s: self.s.clamp(0.0, 100.0),
            l: self.l.clamp(0.0, 100.0),
        }
    }

    /// Convert to 8-bit RGB. Never fails.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let Self { h, s, l } = self.clamped();
        let (r, g, b) = hls_to_unit_rgb(h / 360.0, l / 100.0, s / 100.0);
        Rgb::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

// ─── Free functions ──────────────────────────────────────────────────────────

/// Convert HSL (0–360, 0–100, 0–100) to an [`Rgb`] value.
///
/// Inputs are clamped first, so every input produces a valid color.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    Hsl::new(h, s, l).to_rgb()
}

/// Convert HSL (0–360, 0–100, 0–100) to a lowercase `#rrggbb` string.
///
/// ```
/// use edit_color::hsl_to_hex;
///
/// assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
/// assert_eq!(hsl_to_hex(210.0, 50.0, 0.0), "#000000");
/// assert_eq!(hsl_to_hex(210.0, 50.0, 100.0), "#ffffff");
/// ```
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

/// HLS with all components in the unit interval; returns unit RGB.
fn hls_to_unit_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    // `l + s - l·s` drifts below 1.0 for many `s`, which would truncate
    // full lightness to #fefefe.
    if l >= 1.0 {
        return (1.0, 1.0, 1.0);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
    let m1 = 2.0 * l - m2;
    (
        ramp(m1, m2, h + ONE_THIRD),
        ramp(m1, m2, h),
        ramp(m1, m2, h - ONE_THIRD),
    )
}

/// Sample the HLS channel ramp at `hue` (wrapped into [0, 1)).
fn ramp(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        return m1 + (m2 - m1) * hue * 6.0;
    }
    if hue < 0.5 {
        return m2;
    }
    if hue < TWO_THIRDS {
        return m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0;
    }
    m1
}

/// Scale a unit channel to a byte by truncation.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(v: f64) -> u8 {
    // `as` saturates, so tiny negative float error lands on 0.
    (v * 255.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
