//! Whitespace normalization for candidate text.

/// Collapse every run of whitespace (spaces, tabs, newlines, any Unicode
/// whitespace) into a single space and trim both ends.
///
/// Case is left untouched; case folding belongs to the dedup step.
///
/// ```rust
/// use headline_scraper::normalize;
///
/// assert_eq!(normalize("  Big \n\t Story  "), "Big Story");
/// assert_eq!(normalize(" \n "), "");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_internal_runs() {
        assert_eq!(normalize("Breaking:\n\n  markets   fall"), "Breaking: markets fall");
    }

    #[test]
    fn trims_ends() {
        assert_eq!(normalize("\t Hello world \r\n"), "Hello world");
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn handles_unicode_whitespace() {
        assert_eq!(
            normalize("one\u{3000}two\u{2003}three\u{a0}four"),
            "one two three four"
        );
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "",
            "   ",
            "plain",
            "  a  b\tc\n",
            "Ünïcödé   tëxt \u{2003} here",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn preserves_case() {
        assert_eq!(normalize(" BBC  News "), "BBC News");
    }
}
