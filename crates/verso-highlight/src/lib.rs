//! Terminal output for verso.
//!
//! Match records are rendered with each matched range painted in the match style (see
//! [`render_record`]). The rest of the crate covers the small set of styles the CLI uses
//! for headings and status lines, plus syntax coloring for the TOML and JSON it prints.

#![warn(missing_docs)]

mod matches;

pub use matches::{highlight_spans, render_record, render_text};
use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Colors structured text (config dumps, JSON results) for the terminal.
pub struct Highlighter {
    /// Known syntaxes.
    syntaxes: SyntaxSet,
    /// Lazily loaded themes.
    themes: EmbeddedLazyThemeSet,
    /// Theme applied to every highlight.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntaxes: extra_syntaxes(),
            themes: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Colors TOML.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Colors JSON.
    pub fn highlight_json(&self, content: &str) -> String {
        self.highlight(content, "json")
    }

    /// Colors `content` as `syntax`, which may be a file extension or a syntax name.
    ///
    /// Unknown syntaxes and lines that fail to parse are passed through uncolored.
    pub fn highlight(&self, content: &str, syntax: &str) -> String {
        let mut lines = HighlightLines::new(self.syntax(syntax), self.themes.get(self.theme));

        let mut out = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            let regions = lines
                .highlight_line(line, &self.syntaxes)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            out.push_str(&as_24_bit_terminal_escaped(&regions, false));
        }
        out.push_str(colors::RESET);
        out
    }

    /// Looks up a syntax by extension, then by name, defaulting to plain text.
    fn syntax(&self, syntax: &str) -> &SyntaxReference {
        self.syntaxes
            .find_syntax_by_extension(syntax)
            .or_else(|| self.syntaxes.find_syntax_by_name(syntax))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }
}

/// ANSI escape codes.
pub mod colors {
    /// Bold.
    pub const BOLD: &str = "\x1b[1m";
    /// Yellow background, used for matched text.
    pub const BG_YELLOW: &str = "\x1b[43m";
    /// Cyan foreground.
    pub const CYAN: &str = "\x1b[36m";
    /// Green foreground.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow foreground.
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim.
    pub const DIM: &str = "\x1b[2m";
    /// Clears all styling.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps `text` in the given codes followed by a reset.
fn paint(codes: &[&str], text: &str) -> String {
    let mut out = codes.concat();
    out.push_str(text);
    out.push_str(colors::RESET);
    out
}

/// Bold cyan, for section titles.
pub fn header(text: &str) -> String {
    paint(&[colors::BOLD, colors::CYAN], text)
}

/// Bold, for labels within a section.
pub fn subheader(text: &str) -> String {
    paint(&[colors::BOLD], text)
}

/// Dimmed, for secondary details.
pub fn dim(text: &str) -> String {
    paint(&[colors::DIM], text)
}

/// Green, for completed actions.
pub fn success(text: &str) -> String {
    paint(&[colors::GREEN], text)
}

/// Yellow, for conditions worth noticing.
pub fn warning(text: &str) -> String {
    paint(&[colors::YELLOW], text)
}

/// A dimmed horizontal line `width` characters wide.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}
