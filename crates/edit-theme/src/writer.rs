//! Theme file serialization.
//!
//! ```text
//! # Christmas Dark
//! # Auto-generated theme with unique colors for all hooks
//! name=Christmas Dark
//!
//! # Core UI
//! background=#200808
//! ...
//!
//! # Text Attributes
//! syntax_keyword_attr=bold
//! ```
//!
//! Sections follow [`Section::ALL`]; the attribute section is only written
//! when the theme has overrides.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::colors::ThemeColors;
use crate::error::{Result, ThemeError};
use crate::role::{Section, roles_in};

/// Second header line of every generated file.
pub const GENERATED_NOTICE: &str = "# Auto-generated theme with unique colors for all hooks";

/// Render a complete theme file.
#[must_use]
pub fn render_theme(name: &str, colors: &ThemeColors) -> String {
    let mut out = String::with_capacity(4096);
    let _ = writeln!(out, "# {name}");
    let _ = writeln!(out, "{GENERATED_NOTICE}");
    let _ = writeln!(out, "name={name}");

    let palette = colors.as_array();
    for section in Section::ALL {
        let _ = writeln!(out, "\n# {}", section.title());
        for (index, role) in roles_in(section) {
            let _ = writeln!(out, "{}={}", role.key, palette[index]);
        }
    }

    if !colors.attributes().is_empty() {
        out.push_str("\n# Text Attributes\n");
        for attr in colors.attributes() {
            let _ = writeln!(out, "{}={}", attr.key, attr.value);
        }
    }
    out
}

/// Write a theme file to `path`, creating parent directories and replacing
/// any existing file.
///
/// # Errors
///
/// Returns [`ThemeError::Io`] if a directory cannot be created or the file
/// cannot be written.
pub fn write_theme(path: &Path, name: &str, colors: &ThemeColors) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ThemeError::io("create directory", parent, e))?;
    }
    let content = render_theme(name, colors);
    fs::write(path, &content).map_err(|e| ThemeError::io("write", path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote theme");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::AttributeOverride;
    use crate::generator::{SaturationRange, ThemeGenerator, Variant};
    use crate::role::ROLE_COUNT;
    use pretty_assertions::assert_eq;

    fn christmas_dark(attrs: Vec<AttributeOverride>) -> ThemeColors {
        ThemeGenerator::new(&[0, 120, 45], Variant::Dark, SaturationRange::new(60, 85))
            .generate(attrs)
            .colors
    }

    #[test]
    fn header_and_first_section() {
        let text = render_theme("Christmas Dark", &christmas_dark(Vec::new()));
        let head: Vec<&str> = text.lines().take(7).collect();
        assert_eq!(
            head,
            [
                "# Christmas Dark",
                "# Auto-generated theme with unique colors for all hooks",
                "name=Christmas Dark",
                "",
                "# Core UI",
                "background=#200808",
                "foreground=#eb7979",
            ]
        );
    }

    #[test]
    fn banners_in_fixed_order() {
        let text = render_theme("T", &christmas_dark(Vec::new()));
        let banners: Vec<&str> = text
            .lines()
            .filter_map(|l| l.strip_prefix("# "))
            .skip(2)
            .collect();
        let expected: Vec<&str> = Section::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(banners, expected);
    }

    #[test]
    fn one_line_per_role_and_trailing_newline() {
        let text = render_theme("T", &christmas_dark(Vec::new()));
        let color_lines = text.lines().filter(|l| l.contains("=#")).count();
        assert_eq!(color_lines, ROLE_COUNT);
        assert!(text.ends_with("syntax_escape_bg=#490f08\n"));
    }

    #[test]
    fn attributes_section_only_when_present() {
        let plain = render_theme("T", &christmas_dark(Vec::new()));
        assert!(!plain.contains("# Text Attributes"));

        let attrs = vec![
            AttributeOverride::new("syntax_keyword_attr", "bold"),
            AttributeOverride::new("syntax_comment_attr", "italic"),
        ];
        let styled = render_theme("T", &christmas_dark(attrs));
        assert!(styled.ends_with(
            "syntax_escape_bg=#490f08\n\n# Text Attributes\nsyntax_keyword_attr=bold\nsyntax_comment_attr=italic\n"
        ));
    }

    #[test]
    fn write_creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/themes/christmas-dark.ini");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale").unwrap();

        let colors = christmas_dark(Vec::new());
        write_theme(&path, "Christmas Dark", &colors).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_theme("Christmas Dark", &colors));
    }

    #[test]
    fn write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c.ini");
        write_theme(&path, "C", &christmas_dark(Vec::new())).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn write_error_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should go.
        let path = dir.path().join("taken");
        std::fs::create_dir(&path).unwrap();
        let err = write_theme(&path, "T", &christmas_dark(Vec::new())).unwrap_err();
        assert!(matches!(err, ThemeError::Io { action: "write", .. }), "{err}");
    }
}
