//! The role table: every color a theme file defines, in file order.
//!
//! Each [`Role`] names one `key=#rrggbb` line, the banner section it is
//! written under, and the [`Recipe`] that derives its color. The table order
//! is load-bearing twice over: it is the order lines are written, and it is
//! the order colors are derived in. Collision retries depend on which colors
//! are already taken, so reordering the table changes the generated colors.

use crate::generator::Seed;

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// A commented banner group in a theme file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    CoreUi,
    LineNumbers,
    Gutter,
    StatusBar,
    MessageBar,
    Prompt,
    SearchFeedback,
    Whitespace,
    WrapIndicator,
    EmptyLines,
    WelcomeScreen,
    BracketMatching,
    MultiCursor,
    Dialog,
    Syntax,
}

impl Section {
    /// Every section in the order it appears in a theme file.
    pub const ALL: [Self; 15] = [
        Self::CoreUi,
        Self::LineNumbers,
        Self::Gutter,
        Self::StatusBar,
        Self::MessageBar,
        Self::Prompt,
        Self::SearchFeedback,
        Self::Whitespace,
        Self::WrapIndicator,
        Self::EmptyLines,
        Self::WelcomeScreen,
        Self::BracketMatching,
        Self::MultiCursor,
        Self::Dialog,
        Self::Syntax,
    ];

    /// Banner text written as `# <title>`.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CoreUi => "Core UI",
            Self::LineNumbers => "Line Numbers",
            Self::Gutter => "Gutter",
            Self::StatusBar => "Status Bar",
            Self::MessageBar => "Message Bar",
            Self::Prompt => "Prompt",
            Self::SearchFeedback => "Search Feedback",
            Self::Whitespace => "Whitespace",
            Self::WrapIndicator => "Wrap Indicator",
            Self::EmptyLines => "Empty Lines",
            Self::WelcomeScreen => "Welcome Screen",
            Self::BracketMatching => "Bracket Matching",
            Self::MultiCursor => "Multi-cursor",
            Self::Dialog => "Dialog",
            Self::Syntax => "Syntax Highlighting",
        }
    }
}

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

/// How one role's color is derived.
///
/// Theme-hue recipes take a hue [`Seed`] slot and a variation index. Alert
/// recipes (warning, error, success) use fixed hue bands and only take a
/// variation index, so alerts read the same in every theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    Background(Seed, i32),
    Foreground(Seed, i32),
    Accent(Seed, i32),
    SubtleBackground(Seed, i32),
    Warning(i32),
    Error(i32),
    Success(i32),
}

impl Recipe {
    /// Whether this recipe ignores the theme's hue seeds.
    #[must_use]
    pub const fn is_alert(self) -> bool {
        matches!(self, Self::Warning(_) | Self::Error(_) | Self::Success(_))
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// One semantic color slot of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    /// Key written on the left of `=` (e.g. `syntax_keyword_fg`).
    pub key: &'static str,
    pub section: Section,
    pub recipe: Recipe,
}

const fn role(key: &'static str, section: Section, recipe: Recipe) -> Role {
    Role { key, section, recipe }
}

/// Number of roles in every theme.
pub const ROLE_COUNT: usize = 89;

/// The full role table in file (and derivation) order.
#[rustfmt::skip]
pub static ROLES: [Role; ROLE_COUNT] = {
    use Recipe::{Accent, Background, Error, Foreground, Success, SubtleBackground, Warning};
    use Seed::{Primary, Quaternary, Secondary, Tertiary};
    use Section::{
        BracketMatching, CoreUi, Dialog, EmptyLines, Gutter, LineNumbers, MessageBar, MultiCursor,
        Prompt, SearchFeedback, StatusBar, Syntax, WelcomeScreen, Whitespace, WrapIndicator,
    };

    [
        // ── Core UI ──
        role("background", CoreUi, Background(Primary, 0)),
        role("foreground", CoreUi, Foreground(Primary, 0)),
        role("selection", CoreUi, Accent(Secondary, 0)),
        role("search_match", CoreUi, Accent(Tertiary, 1)),
        role("search_current", CoreUi, Accent(Quaternary, 2)),
        role("cursor_line", CoreUi, SubtleBackground(Primary, 1)),
        role("color_column", CoreUi, SubtleBackground(Primary, 2)),
        role("color_column_line", CoreUi, Foreground(Secondary, 1)),
        role("trailing_ws", CoreUi, Error(0)),

        // ── Line Numbers ──
        role("line_number_fg", LineNumbers, Foreground(Primary, 2)),
        role("line_number_bg", LineNumbers, Background(Primary, 1)),
        role("line_number_active_fg", LineNumbers, Accent(Secondary, 3)),
        role("line_number_active_bg", LineNumbers, SubtleBackground(Primary, 3)),

        // ── Gutter ──
        role("gutter_fg", Gutter, Foreground(Primary, 3)),
        role("gutter_bg", Gutter, Background(Primary, 2)),
        role("gutter_active_fg", Gutter, Accent(Secondary, 4)),
        role("gutter_active_bg", Gutter, SubtleBackground(Primary, 4)),

        // ── Status Bar ──
        role("status_fg", StatusBar, Foreground(Secondary, 0)),
        role("status_bg", StatusBar, SubtleBackground(Secondary, 0)),
        role("status_filename_fg", StatusBar, Accent(Secondary, 5)),
        role("status_filename_bg", StatusBar, SubtleBackground(Secondary, 1)),
        role("status_modified_fg", StatusBar, Warning(0)),
        role("status_modified_bg", StatusBar, SubtleBackground(Secondary, 2)),
        role("status_position_fg", StatusBar, Foreground(Secondary, 4)),
        role("status_position_bg", StatusBar, SubtleBackground(Secondary, 3)),

        // ── Message Bar ──
        role("message_fg", MessageBar, Foreground(Primary, 4)),
        role("message_bg", MessageBar, Background(Primary, 3)),

        // ── Prompt ──
        role("prompt_label_fg", Prompt, Accent(Tertiary, 0)),
        role("prompt_label_bg", Prompt, Background(Primary, 4)),
        role("prompt_input_fg", Prompt, Foreground(Primary, 5)),
        role("prompt_input_bg", Prompt, SubtleBackground(Primary, 5)),
        role("prompt_bracket_fg", Prompt, Accent(Quaternary, 0)),
        role("prompt_bracket_bg", Prompt, Background(Primary, 5)),
        role("prompt_warning_fg", Prompt, Warning(1)),
        role("prompt_warning_bg", Prompt, Background(Primary, 6)),

        // ── Search Feedback ──
        role("search_options_fg", SearchFeedback, Success(0)),
        role("search_options_bg", SearchFeedback, Background(Primary, 7)),
        role("search_nomatch_fg", SearchFeedback, Error(1)),
        role("search_nomatch_bg", SearchFeedback, Background(Primary, 8)),
        role("search_error_fg", SearchFeedback, Error(2)),
        role("search_error_bg", SearchFeedback, Background(Primary, 9)),

        // ── Whitespace ──
        role("whitespace_fg", Whitespace, Foreground(Primary, 6)),
        role("whitespace_bg", Whitespace, Background(Primary, 10)),
        role("whitespace_tab_fg", Whitespace, Foreground(Primary, 7)),
        role("whitespace_tab_bg", Whitespace, Background(Primary, 11)),
        role("whitespace_space_fg", Whitespace, Foreground(Primary, 8)),
        role("whitespace_space_bg", Whitespace, Background(Primary, 12)),

        // ── Wrap Indicator ──
        role("wrap_indicator_fg", WrapIndicator, Foreground(Primary, 9)),
        role("wrap_indicator_bg", WrapIndicator, Background(Primary, 13)),

        // ── Empty Lines ──
        role("empty_line_fg", EmptyLines, Foreground(Primary, 10)),
        role("empty_line_bg", EmptyLines, Background(Primary, 14)),

        // ── Welcome Screen ──
        role("welcome_fg", WelcomeScreen, Accent(Secondary, 6)),
        role("welcome_bg", WelcomeScreen, Background(Primary, 15)),

        // ── Bracket Matching ──
        role("bracket_match_fg", BracketMatching, Accent(Quaternary, 1)),
        role("bracket_match_bg", BracketMatching, SubtleBackground(Quaternary, 0)),

        // ── Multi-cursor ──
        role("multicursor_fg", MultiCursor, Foreground(Tertiary, 0)),
        role("multicursor_bg", MultiCursor, Accent(Tertiary, 2)),

        // ── Dialog ──
        role("dialog_fg", Dialog, Foreground(Primary, 11)),
        role("dialog_bg", Dialog, SubtleBackground(Primary, 6)),
        role("dialog_header_fg", Dialog, Accent(Secondary, 7)),
        role("dialog_header_bg", Dialog, SubtleBackground(Secondary, 4)),
        role("dialog_footer_fg", Dialog, Foreground(Primary, 12)),
        role("dialog_footer_bg", Dialog, SubtleBackground(Primary, 7)),
        role("dialog_highlight_fg", Dialog, Foreground(Secondary, 5)),
        role("dialog_highlight_bg", Dialog, Accent(Secondary, 8)),
        role("dialog_directory_fg", Dialog, Accent(Tertiary, 3)),
        role("dialog_directory_bg", Dialog, SubtleBackground(Primary, 8)),

        // ── Syntax Highlighting ──
        role("syntax_normal_fg", Syntax, Foreground(Primary, 13)),
        role("syntax_normal_bg", Syntax, Background(Primary, 16)),
        role("syntax_keyword_fg", Syntax, Accent(Secondary, 9)),
        role("syntax_keyword_bg", Syntax, Background(Secondary, 0)),
        role("syntax_type_fg", Syntax, Accent(Tertiary, 4)),
        role("syntax_type_bg", Syntax, Background(Tertiary, 0)),
        role("syntax_string_fg", Syntax, Success(1)),
        role("syntax_string_bg", Syntax, Background(Primary, 17)),
        role("syntax_number_fg", Syntax, Accent(Quaternary, 2)),
        role("syntax_number_bg", Syntax, Background(Quaternary, 0)),
        role("syntax_comment_fg", Syntax, Foreground(Primary, 14)),
        role("syntax_comment_bg", Syntax, Background(Primary, 18)),
        role("syntax_preprocessor_fg", Syntax, Accent(Tertiary, 5)),
        role("syntax_preprocessor_bg", Syntax, Background(Tertiary, 1)),
        role("syntax_function_fg", Syntax, Accent(Secondary, 10)),
        role("syntax_function_bg", Syntax, Background(Secondary, 1)),
        role("syntax_operator_fg", Syntax, Foreground(Primary, 15)),
        role("syntax_operator_bg", Syntax, Background(Primary, 19)),
        role("syntax_bracket_fg", Syntax, Accent(Quaternary, 3)),
        role("syntax_bracket_bg", Syntax, Background(Quaternary, 1)),
        role("syntax_escape_fg", Syntax, Warning(2)),
        role("syntax_escape_bg", Syntax, Background(Primary, 20)),
    ]
};

/// Position of `key` in [`ROLES`], if it is a role key.
#[must_use]
pub fn role_index(key: &str) -> Option<usize> {
    ROLES.iter().position(|role| role.key == key)
}

/// Roles written under `section`, with their table positions.
pub fn roles_in(section: Section) -> impl Iterator<Item = (usize, &'static Role)> {
    ROLES
        .iter()
        .enumerate()
        .filter(move |(_, role)| role.section == section)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
