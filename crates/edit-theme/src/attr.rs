//! Text attribute overrides carried alongside a theme's colors.
//!
//! A theme may set attributes for individual roles, written in the file's
//! trailing `# Text Attributes` section as `<role>_attr=<value>`. Values are
//! `+`-joined attribute names (`bold+italic`), as the editor reads them.

bitflags::bitflags! {
    /// Text attributes understood by the editor's theme loader.
    ///
    /// ```
    /// use edit_theme::attr::TextAttr;
    ///
    /// let attr = TextAttr::parse("bold + italic");
    /// assert_eq!(attr, TextAttr::BOLD | TextAttr::ITALIC);
    /// assert_eq!(attr.to_string(), "bold+italic");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct TextAttr: u8 {
        const BOLD      = 1 << 0;
        const DIM       = 1 << 1;
        const ITALIC    = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE   = 1 << 4;
        const STRIKE    = 1 << 5;
        /// Curly underline.
        const CURLY     = 1 << 6;
        const OVERLINE  = 1 << 7;
    }
}

const NAMES: [(&str, TextAttr); 8] = [
    ("bold", TextAttr::BOLD),
    ("dim", TextAttr::DIM),
    ("italic", TextAttr::ITALIC),
    ("underline", TextAttr::UNDERLINE),
    ("reverse", TextAttr::REVERSE),
    ("strike", TextAttr::STRIKE),
    ("curly", TextAttr::CURLY),
    ("overline", TextAttr::OVERLINE),
];

impl TextAttr {
    /// Parse a `+`-joined attribute list.
    ///
    /// Whitespace around names is ignored, `none` anywhere clears the whole
    /// value, and unknown names are skipped, matching the editor.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut attr = Self::empty();
        for token in value.split('+').map(str::trim) {
            if token == "none" {
                return Self::empty();
            }
            if let Some((_, flag)) = NAMES.iter().find(|(name, _)| *name == token) {
                attr |= *flag;
            }
        }
        attr
    }
}

impl std::fmt::Display for TextAttr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (name, flag) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// One `key=value` line of the Text Attributes section.
///
/// The value is kept verbatim so files round-trip byte for byte; use
/// [`AttributeOverride::attr`] for the parsed flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeOverride {
    pub key: String,
    pub value: String,
}

impl AttributeOverride {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The role key this override applies to (`syntax_keyword_attr` →
    /// `syntax_keyword`), if it follows the `_attr` naming.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.key.strip_suffix("_attr")
    }

    #[must_use]
    pub fn attr(&self) -> TextAttr {
        TextAttr::parse(&self.value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
