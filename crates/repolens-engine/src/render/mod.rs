//! # Block Rendering
//!
//! Converts the tokenized block sequence into UI-ready rendered blocks,
//! one per input block, in order, with no cross-block state.
//!
//! ## Phases
//!
//! 1. **Line classification** (`classify`): each prose line is mapped to
//!    a heading, list item, blank spacer, or paragraph; first match wins.
//!
//! 2. **Inline substitution** (`inline`): paragraph and list-item lines
//!    are split into spans by an ordered rule list (bold, inline code,
//!    link). Later rules only run over remaining plain-text segments, so
//!    produced spans are never re-matched.
//!
//! 3. **Highlighting** (`crate::highlight`): code blocks are highlighted
//!    best-effort; any failure degrades to raw, unstyled lines.
//!
//! Rendering is a pure function of the input string. Callers that
//! re-render the same content repeatedly should memoize on the exact
//! input string.

pub mod classify;
pub mod inline;

pub use inline::InlineSpan;

use crate::highlight::{self, HighlightSpan};
use crate::parsing::{Block, tokenize};
use classify::LineKind;

/// One rendered unit per tokenized block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    Text {
        lines: Vec<RenderLine>,
    },
    Code {
        /// Language label, present only when the fence declared a
        /// non-empty tag.
        tag: Option<String>,
        lines: Vec<String>,
        /// One styled row per source line, or `None` when highlighting
        /// was unavailable and the raw lines should be shown instead.
        highlighted: Option<Vec<Vec<HighlightSpan>>>,
    },
}

/// A classified prose line, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderLine {
    /// Heading text receives no inline substitution.
    Heading { level: u8, text: String },
    ListItem { spans: Vec<InlineSpan> },
    Blank,
    Paragraph { spans: Vec<InlineSpan> },
}

/// Renders a raw report string into an ordered sequence of UI-ready
/// blocks. Total over arbitrary input; never fails.
pub fn render(input: &str) -> Vec<RenderedBlock> {
    tokenize(input).into_iter().map(render_block).collect()
}

fn render_block(block: Block) -> RenderedBlock {
    match block {
        Block::Text { lines } => RenderedBlock::Text {
            lines: lines.iter().map(|line| render_line(line)).collect(),
        },
        Block::Code { lines, lang } => {
            let highlighted = highlight::highlight(&lang, &lines);
            let tag = (!lang.is_empty()).then_some(lang);
            RenderedBlock::Code {
                tag,
                lines,
                highlighted,
            }
        }
    }
}

fn render_line(line: &str) -> RenderLine {
    match classify::classify(line) {
        LineKind::Heading { level, text } => RenderLine::Heading {
            level,
            text: text.to_string(),
        },
        LineKind::ListItem { rest } => RenderLine::ListItem {
            spans: inline::parse_inline(rest),
        },
        LineKind::Blank => RenderLine::Blank,
        LineKind::Paragraph { text } => RenderLine::Paragraph {
            spans: inline::parse_inline(text),
        },
    }
}
