/// Classification of a single prose line. First match wins and only one
/// form applies per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: u8, text: &'a str },
    ListItem { rest: &'a str },
    Blank,
    Paragraph { text: &'a str },
}

/// Classifies one line of a text block.
///
/// Markers are detected on the trimmed line; paragraph text keeps the
/// raw line so surrounding whitespace survives into the rendered span.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if let Some(text) = trimmed.strip_prefix("## ") {
        LineKind::Heading { level: 2, text }
    } else if let Some(text) = trimmed.strip_prefix("### ") {
        LineKind::Heading { level: 3, text }
    } else if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        LineKind::ListItem { rest }
    } else if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Paragraph { text: line }
    }
}
