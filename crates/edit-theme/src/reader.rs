//! Theme file parsing, following the editor's loader rules.
//!
//! Lines starting with `#` and empty lines are skipped, as is any line
//! without `=`. The key is split at the first `=`, right-trimmed, and the
//! value trimmed on both sides. Later assignments to the same key win.
//!
//! Unlike the editor, which falls back to built-in defaults, the reader is
//! strict: a file must name itself and define every role.

use std::fs;
use std::path::Path;

use edit_color::Rgb;

use crate::attr::AttributeOverride;
use crate::colors::ThemeColors;
use crate::error::{Result, ThemeError};
use crate::role::{ROLE_COUNT, ROLES, role_index};

/// A parsed theme file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeFile {
    /// Display name from the `name=` line.
    pub name: String,
    pub colors: ThemeColors,
}

/// Parse theme file text.
///
/// # Errors
///
/// - [`ThemeError::InvalidColor`] when a role key holds something other
///   than a 6-digit hex color.
/// - [`ThemeError::MissingName`] when no `name=` line is present.
/// - [`ThemeError::MissingRole`] for the first role never assigned.
pub fn parse_theme(text: &str) -> Result<ThemeFile> {
    let mut name = None;
    let mut colors: [Option<Rgb>; ROLE_COUNT] = [None; ROLE_COUNT];
    let mut attributes: Vec<AttributeOverride> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim_end();
        let value = value.trim();

        if key == "name" {
            name = Some(value.to_owned());
        } else if let Some(slot) = role_index(key) {
            let color = Rgb::from_hex(value).ok_or_else(|| ThemeError::InvalidColor {
                line: index + 1,
                key: key.to_owned(),
                value: value.to_owned(),
            })?;
            colors[slot] = Some(color);
        } else if key.ends_with("_attr") {
            match attributes.iter_mut().find(|a| a.key == key) {
                Some(existing) => value.clone_into(&mut existing.value),
                None => attributes.push(AttributeOverride::new(key, value)),
            }
        }
    }

    let name = name.ok_or(ThemeError::MissingName)?;
    let mut resolved = [Rgb::default(); ROLE_COUNT];
    for ((slot, color), role) in resolved.iter_mut().zip(colors).zip(ROLES.iter()) {
        *slot = color.ok_or(ThemeError::MissingRole { key: role.key })?;
    }

    Ok(ThemeFile {
        name,
        colors: ThemeColors::new(resolved, attributes),
    })
}

/// Read and parse the theme file at `path`.
///
/// # Errors
///
/// [`ThemeError::Io`] if the file cannot be read, otherwise as
/// [`parse_theme`].
pub fn read_theme(path: &Path) -> Result<ThemeFile> {
    let text = fs::read_to_string(path).map_err(|e| ThemeError::io("read", path, e))?;
    parse_theme(&text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{SaturationRange, ThemeGenerator, Variant};
    use crate::writer::{render_theme, write_theme};
    use pretty_assertions::assert_eq;

    fn christmas_light() -> ThemeColors {
        ThemeGenerator::new(&[0, 120, 45], Variant::Light, SaturationRange::new(60, 85))
            .generate(vec![AttributeOverride::new("syntax_keyword_attr", "bold")])
            .colors
    }

    /// Every role set to `color`, one per line.
    fn all_roles(color: &str) -> String {
        ROLES.iter().map(|r| format!("{}={color}\n", r.key)).collect()
    }

    #[test]
    fn rendered_text_parses_back() {
        let colors = christmas_light();
        let parsed = parse_theme(&render_theme("Christmas Light", &colors)).unwrap();
        assert_eq!(parsed.name, "Christmas Light");
        assert_eq!(parsed.colors, colors);
    }

    #[test]
    fn written_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("christmas-light.ini");
        let colors = christmas_light();
        write_theme(&path, "Christmas Light", &colors).unwrap();
        assert_eq!(read_theme(&path).unwrap().colors, colors);
    }

    #[test]
    fn loader_whitespace_rules() {
        let text = format!(
            "name =  Spaced Out  \n{}background \t= #ABCDEF \r\n",
            all_roles("#000000")
        );
        let parsed = parse_theme(&text).unwrap();
        assert_eq!(parsed.name, "Spaced Out");
        assert_eq!(parsed.colors.get("background"), Some(Rgb::new(0xab, 0xcd, 0xef)));
    }

    #[test]
    fn comments_junk_and_unknown_keys_are_skipped() {
        let text = format!(
            "# header\n\nno equals sign here\nname=X\nlegacy_key=#123456\n  # indented=#zzz\n{}",
            all_roles("#101010")
        );
        // The indented comment is not a comment to the loader, but its key is
        // unknown, so it is ignored rather than rejected.
        let parsed = parse_theme(&text).unwrap();
        assert_eq!(parsed.colors.distinct_count(), 1);
        assert!(parsed.colors.attributes().is_empty());
    }

    #[test]
    fn attributes_keep_order_and_last_value_wins() {
        let text = format!(
            "name=X\n{}syntax_string_attr=italic\nsyntax_keyword_attr=bold\nsyntax_string_attr=bold+italic\n",
            all_roles("#101010")
        );
        let parsed = parse_theme(&text).unwrap();
        assert_eq!(
            parsed.colors.attributes(),
            [
                AttributeOverride::new("syntax_string_attr", "bold+italic"),
                AttributeOverride::new("syntax_keyword_attr", "bold"),
            ]
        );
    }

    #[test]
    fn invalid_color_names_line() {
        let text = format!("name=X\n{}cursor_line=#12345\n", all_roles("#101010"));
        let err = parse_theme(&text).unwrap_err();
        match err {
            ThemeError::InvalidColor { line, key, value } => {
                assert_eq!(line, ROLE_COUNT + 2);
                assert_eq!(key, "cursor_line");
                assert_eq!(value, "#12345");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_name_and_roles() {
        assert!(matches!(
            parse_theme(&all_roles("#101010")),
            Err(ThemeError::MissingName)
        ));

        let partial: String = all_roles("#101010")
            .lines()
            .filter(|l| !l.starts_with("selection="))
            .map(|l| format!("{l}\n"))
            .collect();
        assert!(matches!(
            parse_theme(&format!("name=X\n{partial}")),
            Err(ThemeError::MissingRole { key: "selection" })
        ));
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_theme(&dir.path().join("absent.ini")).unwrap_err();
        assert!(matches!(err, ThemeError::Io { action: "read", .. }));
    }
}
