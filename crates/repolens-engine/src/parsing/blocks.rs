use super::fence::Fence;

/// A contiguous run of input lines classified as either prose or a
/// fenced code excerpt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Text { lines: Vec<String> },
    Code { lines: Vec<String>, lang: String },
}

impl Block {
    pub fn lines(&self) -> &[String] {
        match self {
            Block::Text { lines } | Block::Code { lines, .. } => lines,
        }
    }
}

/// Tokenizes a raw report string into an ordered block sequence.
///
/// An explicit fold over the input lines: the accumulator alternates
/// between prose and code mode at every fence marker, and fence lines
/// themselves are consumed. Total over arbitrary input.
pub fn tokenize(input: &str) -> Vec<Block> {
    input
        .lines()
        .fold(Tokenizer::new(), Tokenizer::push)
        .finish()
}

/// Current-block accumulator threaded through the fold.
#[derive(Debug)]
enum Accumulator {
    Text { lines: Vec<String> },
    Code { lines: Vec<String>, lang: String },
}

impl Accumulator {
    fn text() -> Self {
        Accumulator::Text { lines: Vec::new() }
    }

    fn code(lang: &str) -> Self {
        Accumulator::Code {
            lines: Vec::new(),
            lang: lang.to_string(),
        }
    }

    fn in_code(&self) -> bool {
        matches!(self, Accumulator::Code { .. })
    }

    fn push(&mut self, line: &str) {
        match self {
            Accumulator::Text { lines } | Accumulator::Code { lines, .. } => {
                lines.push(line.to_string())
            }
        }
    }

    /// Emits the accumulated block, unless it holds no lines.
    fn flush_into(self, out: &mut Vec<Block>) {
        match self {
            Accumulator::Text { lines } if !lines.is_empty() => out.push(Block::Text { lines }),
            Accumulator::Code { lines, lang } if !lines.is_empty() => {
                out.push(Block::Code { lines, lang })
            }
            _ => {}
        }
    }
}

#[derive(Debug)]
struct Tokenizer {
    out: Vec<Block>,
    acc: Accumulator,
}

impl Tokenizer {
    fn new() -> Self {
        Self {
            out: Vec::new(),
            acc: Accumulator::text(),
        }
    }

    fn push(mut self, line: &str) -> Self {
        match Fence::tag(line) {
            Some(tag) => {
                // The first fence seen in code mode always closes the
                // block, whatever its tag text.
                let next = if self.acc.in_code() {
                    Accumulator::text()
                } else {
                    Accumulator::code(tag)
                };
                let prev = std::mem::replace(&mut self.acc, next);
                prev.flush_into(&mut self.out);
            }
            None => self.acc.push(line),
        }
        self
    }

    fn finish(mut self) -> Vec<Block> {
        // EOF flush, including an unterminated fence
        self.acc.flush_into(&mut self.out);
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(lines: &[&str]) -> Block {
        Block::Text {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn code(lang: &str, lines: &[&str]) -> Block {
        Block::Code {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            lang: lang.to_string(),
        }
    }

    #[test]
    fn fence_free_input_is_one_text_block() {
        let input = "## Title\nSome **bold** and `code`.";
        assert_eq!(
            tokenize(input),
            vec![text(&["## Title", "Some **bold** and `code`."])]
        );
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn tagged_fence_becomes_code_block() {
        assert_eq!(tokenize("```py\nprint(1)\n```"), vec![code("py", &["print(1)"])]);
    }

    #[test]
    fn unterminated_fence_flushes_at_eof() {
        assert_eq!(tokenize("```\nunterminated\n"), vec![code("", &["unterminated"])]);
    }

    #[test]
    fn text_and_code_alternate_in_order() {
        let input = "intro\n```rust\nfn main() {}\n```\noutro";
        assert_eq!(
            tokenize(input),
            vec![
                text(&["intro"]),
                code("rust", &["fn main() {}"]),
                text(&["outro"]),
            ]
        );
    }

    #[test]
    fn consecutive_fences_emit_no_empty_block() {
        let input = "```py\n```\nafter";
        assert_eq!(tokenize(input), vec![text(&["after"])]);
    }

    #[test]
    fn closing_fence_tag_text_is_irrelevant() {
        // A fence line inside code mode closes the block even when it
        // carries its own tag; the tag is discarded.
        let input = "```py\nx = 1\n```js\ny";
        assert_eq!(tokenize(input), vec![code("py", &["x = 1"]), text(&["y"])]);
    }

    #[test]
    fn code_lines_keep_raw_whitespace() {
        let input = "```py\n    indented\n```";
        assert_eq!(tokenize(input), vec![code("py", &["    indented"])]);
    }

    #[test]
    fn indented_fence_marker_is_recognized() {
        let input = "  ```sh\nls\n  ```";
        assert_eq!(tokenize(input), vec![code("sh", &["ls"])]);
    }

    #[test]
    fn reconstruction_preserves_non_blank_content() {
        // Concatenating block lines with fence markers reinserted at
        // transitions reproduces the input, modulo blanks dropped at
        // empty-block boundaries.
        let input = "alpha\n```py\nprint(1)\n```\nomega";
        let blocks = tokenize(input);

        let mut rebuilt: Vec<String> = Vec::new();
        for block in &blocks {
            if let Block::Code { lang, .. } = block {
                rebuilt.push(format!("```{lang}"));
            }
            rebuilt.extend(block.lines().iter().cloned());
            if matches!(block, Block::Code { .. }) {
                rebuilt.push("```".to_string());
            }
        }
        assert_eq!(rebuilt.join("\n"), input);
    }

    #[test]
    fn zero_line_gap_between_fences_is_dropped() {
        // Documented quirk: the prose accumulator between a closing and
        // an opening fence holds zero lines and never surfaces, so the
        // two code blocks become adjacent.
        let input = "```py\nx\n```\n```js\ny\n```";
        assert_eq!(
            tokenize(input),
            vec![code("py", &["x"]), code("js", &["y"])]
        );
    }

    #[test]
    fn blank_line_is_still_block_content() {
        // A blank line is a line: it accumulates like any other and the
        // surrounding block is emitted with it.
        let input = "\nalpha";
        assert_eq!(tokenize(input), vec![text(&["", "alpha"])]);
    }
}
