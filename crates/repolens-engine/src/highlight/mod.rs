//! Best-effort syntax highlighting for code blocks.
//!
//! Highlighting is an enhancement, never a requirement: any lookup or
//! highlighting failure returns `None` and the caller shows raw text.

use std::sync::LazyLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::{SyntaxReference, SyntaxSet};

// Syntax highlighting resources (loaded once)
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const THEME: &str = "base16-ocean.dark";

/// A run of styled characters within one highlighted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Foreground color from the theme.
    pub color: (u8, u8, u8),
    pub text: String,
}

/// Highlights code lines, returning one styled row per input line.
///
/// The declared language tag is tried first; an unrecognized or empty
/// tag falls back to first-line detection. Returns `None` when no
/// grammar applies or the highlighter errors on the content.
pub fn highlight(lang: &str, lines: &[String]) -> Option<Vec<Vec<HighlightSpan>>> {
    let syntax = find_syntax(lang, lines)?;
    let theme = THEME_SET.themes.get(THEME)?;

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut rows = Vec::with_capacity(lines.len());
    for line in lines {
        // The newline-aware grammars expect terminated lines.
        let terminated = format!("{line}\n");
        match highlighter.highlight_line(&terminated, &SYNTAX_SET) {
            Ok(ranges) => rows.push(
                ranges
                    .into_iter()
                    .map(|(style, text)| HighlightSpan {
                        color: (
                            style.foreground.r,
                            style.foreground.g,
                            style.foreground.b,
                        ),
                        text: text.trim_end_matches('\n').to_string(),
                    })
                    .filter(|span| !span.text.is_empty())
                    .collect(),
            ),
            Err(e) => {
                log::warn!("syntax highlighting failed: {e}");
                return None;
            }
        }
    }
    Some(rows)
}

fn find_syntax(lang: &str, lines: &[String]) -> Option<&'static SyntaxReference> {
    let tag = lang.trim();
    if !tag.is_empty()
        && let Some(syntax) = SYNTAX_SET.find_syntax_by_token(tag)
    {
        return Some(syntax);
    }
    SYNTAX_SET.find_syntax_by_first_line(lines.first()?)
}
