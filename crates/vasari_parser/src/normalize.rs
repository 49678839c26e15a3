//! Text canonicalization ahead of equality and substring checks.

/// Characters removed outright before comparisons. These are the wrappers
/// responders habitually add around names: list brackets, quotes, and
/// sentence-final periods.
const STRIPPED_CHARS: [char; 5] = ['[', ']', '\'', '"', '.'];

/// Canonicalize a piece of extracted text.
///
/// Removes every occurrence of the stripped characters (literal character
/// removal, not a pattern language), collapses any whitespace run — spaces,
/// tabs, newlines — into a single space, and trims the ends. Pure and
/// idempotent, so it is safe to apply at every comparison site.
///
/// # Examples
///
/// ```
/// use vasari_parser::normalize;
///
/// assert_eq!(normalize("  [Alice]. "), "Alice");
/// assert_eq!(normalize("Bob\n\tthe   Builder"), "Bob the Builder");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_wrapper_punctuation() {
        assert_eq!(normalize(r#"["Alice"]"#), "Alice");
        assert_eq!(normalize("Dr. Bob."), "Dr Bob");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("a \t b\n\nc"), "a b c");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize("  padded  "), "padded");
    }

    #[test]
    fn test_idempotent() {
        for input in ["", "  [Alice]. ", "a \t b\n\nc", "already clean"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_other_punctuation_survives() {
        assert_eq!(normalize("Anne-Marie (the elder)"), "Anne-Marie (the elder)");
    }
}
