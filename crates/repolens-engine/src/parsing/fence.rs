pub struct Fence;

impl Fence {
    pub const MARKER: &'static str = "```";

    /// Returns the language tag when the line's trimmed form is a fence
    /// marker, `None` otherwise. A bare fence yields the empty string.
    pub fn tag(line: &str) -> Option<&str> {
        line.trim().strip_prefix(Self::MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_tagged_fence() {
        assert_eq!(Fence::tag("```py"), Some("py"));
    }

    #[test]
    fn detects_bare_fence() {
        assert_eq!(Fence::tag("```"), Some(""));
    }

    #[test]
    fn detects_indented_fence() {
        assert_eq!(Fence::tag("   ```rust"), Some("rust"));
    }

    #[test]
    fn ignores_prose() {
        assert_eq!(Fence::tag("hello"), None);
    }

    #[test]
    fn ignores_inline_backticks() {
        assert_eq!(Fence::tag("some `code` here"), None);
    }
}
