//! # edit-theme: procedural theme generation for the edit text editor
//!
//! Turns a handful of hue seeds into a complete theme file: 89 named colors
//! for the editor chrome and syntax highlighting, none of them repeated,
//! in a dark and a light variant.
//!
//! # Architecture
//!
//! ```text
//! ThemeDefinition (name, hues, saturation, attrs)
//!     │
//!     ▼
//! generator.rs: resolve hue seeds, derive each role's HSL, avoid collisions
//!     │                ▲
//!     │         role.rs: the 89 roles, their sections and recipes
//!     ▼
//! colors.rs:    ThemeColors (role → Rgb, plus attribute overrides)
//!     │
//!     ▼
//! writer.rs:    key=value text, one banner per section
//!     │
//!     ▼
//! output.rs:    {name}-dark.ini / {name}-light.ini in the output dir
//! ```
//!
//! `reader.rs` parses written files back with the editor's loader rules and
//! `contrast.rs` audits text/background pairs. Neither feeds back into
//! generation: output is a pure function of the theme table.
//!
//! # Determinism
//!
//! Identical definitions always produce byte-identical files. Collision
//! retries depend on which colors are already taken, so both the role table
//! order and the theme table order matter.

pub mod attr;
pub mod builtin;
pub mod colors;
pub mod contrast;
pub mod error;
pub mod generator;
pub mod output;
pub mod reader;
pub mod role;
pub mod writer;

pub use attr::{AttributeOverride, TextAttr};
pub use builtin::{BUILTIN_THEMES, ThemeDefinition, builtin_names, builtin_theme};
pub use colors::ThemeColors;
pub use error::{Result, ThemeError};
pub use generator::{GeneratedTheme, SaturationRange, ThemeGenerator, Variant};
pub use output::{GenerationReport, OutputConfig, regenerate_all};
