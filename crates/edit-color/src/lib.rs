// SPDX-License-Identifier: MIT
//
// edit-color: the color primitives behind the theme generator.
//
//   hsl → HSL (0-360, 0-100, 0-100) to 8-bit RGB, clamped and total
//   rgb → `Rgb` value type: `#rrggbb` formatting/parsing, WCAG luminance
//
// Everything here is pure arithmetic. Generated theme files must be
// byte-stable across runs and platforms, so the conversion avoids fused
// multiply-adds and rounds channels exactly one way (truncation).

pub mod hsl;
pub mod rgb;

pub use hsl::{Hsl, hsl_to_hex, hsl_to_rgb};
pub use rgb::{ParseRgbError, Rgb};
