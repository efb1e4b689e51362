use regex::{Captures, Regex};
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// One inline-markup span of a prose line.
///
/// Spans hold raw text. Renderers that target a structured medium must
/// insert the text as plain content (text nodes, terminal spans), never
/// as markup, so untrusted model output cannot inject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Text(String),
    Strong(String),
    Code(String),
    Link { text: String, href: String },
}

/// Splits a line into inline spans using the ordered rule list: bold,
/// then inline code, then link.
///
/// Each rule scans left-to-right and non-overlapping, and later rules
/// only visit segments still classified as plain text, so spans produced
/// by an earlier rule are never re-matched.
pub fn parse_inline(line: &str) -> Vec<InlineSpan> {
    let mut spans = vec![InlineSpan::Text(line.to_string())];
    spans = apply_rule(spans, &BOLD, |caps| InlineSpan::Strong(caps[1].to_string()));
    spans = apply_rule(spans, &CODE, |caps| InlineSpan::Code(caps[1].to_string()));
    spans = apply_rule(spans, &LINK, |caps| InlineSpan::Link {
        text: caps[1].to_string(),
        href: caps[2].to_string(),
    });
    spans
}

fn apply_rule<F>(spans: Vec<InlineSpan>, pattern: &Regex, make: F) -> Vec<InlineSpan>
where
    F: Fn(&Captures) -> InlineSpan,
{
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            InlineSpan::Text(text) => split_text(&text, pattern, &make, &mut out),
            other => out.push(other),
        }
    }
    out
}

fn split_text<F>(text: &str, pattern: &Regex, make: &F, out: &mut Vec<InlineSpan>)
where
    F: Fn(&Captures) -> InlineSpan,
{
    let mut last = 0;
    for caps in pattern.captures_iter(text) {
        let matched = caps.get(0).expect("capture group 0 always present");
        if matched.start() > last {
            out.push(InlineSpan::Text(text[last..matched.start()].to_string()));
        }
        out.push(make(&caps));
        last = matched.end();
    }
    if last < text.len() {
        out.push(InlineSpan::Text(text[last..].to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineSpan {
        InlineSpan::Text(s.to_string())
    }

    #[test]
    fn plain_line_is_one_text_span() {
        assert_eq!(parse_inline("no markup here"), vec![text("no markup here")]);
    }

    #[test]
    fn bold_code_and_link_all_substitute() {
        let spans = parse_inline("use **async** with `await` per [docs](https://example.com)");
        assert_eq!(
            spans,
            vec![
                text("use "),
                InlineSpan::Strong("async".to_string()),
                text(" with "),
                InlineSpan::Code("await".to_string()),
                text(" per "),
                InlineSpan::Link {
                    text: "docs".to_string(),
                    href: "https://example.com".to_string(),
                },
            ]
        );
    }

    #[test]
    fn bold_wins_over_inner_backticks() {
        // Bold runs first; the backticks inside the produced span are
        // never revisited by the code rule.
        let spans = parse_inline("**a `b` c**");
        assert_eq!(spans, vec![InlineSpan::Strong("a `b` c".to_string())]);
    }

    #[test]
    fn produced_spans_are_not_rematched() {
        // Adjacent literal bold, backtick, and link syntax: each rule
        // consumes its own markup exactly once.
        let spans = parse_inline("**x**`y`[z](u)");
        assert_eq!(
            spans,
            vec![
                InlineSpan::Strong("x".to_string()),
                InlineSpan::Code("y".to_string()),
                InlineSpan::Link {
                    text: "z".to_string(),
                    href: "u".to_string(),
                },
            ]
        );
    }

    #[test]
    fn substitution_is_non_overlapping_left_to_right() {
        let spans = parse_inline("**a** mid **b**");
        assert_eq!(
            spans,
            vec![
                InlineSpan::Strong("a".to_string()),
                text(" mid "),
                InlineSpan::Strong("b".to_string()),
            ]
        );
    }

    #[test]
    fn unterminated_markup_stays_literal() {
        assert_eq!(parse_inline("**open"), vec![text("**open")]);
        assert_eq!(parse_inline("`open"), vec![text("`open")]);
        assert_eq!(parse_inline("[text](open"), vec![text("[text](open")]);
    }

    #[test]
    fn stripping_markup_round_trips_plain_text() {
        // A line with no special syntax survives substitution untouched.
        let line = "perfectly ordinary sentence.";
        let spans = parse_inline(line);
        let rebuilt: String = spans
            .iter()
            .map(|s| match s {
                InlineSpan::Text(t) => t.as_str(),
                _ => panic!("unexpected span"),
            })
            .collect();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn empty_line_yields_no_spans() {
        assert_eq!(parse_inline(""), vec![]);
    }
}
