//! Removal of reasoning preambles ahead of answer extraction.

use crate::ParserOptions;

/// Discard any reasoning preamble, keeping only the final answer text.
///
/// Two markers are checked in sequence, each against the result of the
/// previous step: first the reasoning terminator (conventionally
/// `</think>`), then the final-answer marker (conventionally
/// `assistantfinal`). When a marker occurs, everything up to and including
/// its **last** occurrence is dropped and the remainder trimmed; when it
/// does not, the text passes through that step unchanged.
///
/// # Examples
///
/// ```
/// use vasari_parser::{ParserOptions, strip_preamble};
///
/// let options = ParserOptions::default();
/// assert_eq!(
///     strip_preamble("let me think</think>A: Alice", &options),
///     "A: Alice"
/// );
/// assert_eq!(strip_preamble("no markers here", &options), "no markers here");
/// ```
pub fn strip_preamble<'a>(text: &'a str, options: &ParserOptions) -> &'a str {
    let after_reasoning = strip_after_last(text, &options.reasoning_terminator);
    strip_after_last(after_reasoning, &options.final_answer_marker)
}

fn strip_after_last<'a>(text: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return text;
    }
    match text.rfind(marker) {
        Some(idx) => text[idx + marker.len()..].trim(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ParserOptions {
        ParserOptions::default()
    }

    #[test]
    fn test_discards_reasoning_block() {
        let text = "<think>maybe A, maybe B</think>\nA: Alice\nB: Bob";
        assert_eq!(strip_preamble(text, &options()), "A: Alice\nB: Bob");
    }

    #[test]
    fn test_discards_final_answer_marker() {
        let text = "analysis goes here assistantfinal A: Alice";
        assert_eq!(strip_preamble(text, &options()), "A: Alice");
    }

    #[test]
    fn test_both_markers_apply_in_sequence() {
        let text = "draft</think>more thought assistantfinal the answer";
        assert_eq!(strip_preamble(text, &options()), "the answer");
    }

    #[test]
    fn test_last_occurrence_wins() {
        let text = "a</think>b</think>c";
        assert_eq!(strip_preamble(text, &options()), "c");
    }

    #[test]
    fn test_absent_markers_leave_text_unchanged() {
        assert_eq!(strip_preamble("plain answer", &options()), "plain answer");
    }

    #[test]
    fn test_marker_at_end_leaves_nothing() {
        assert_eq!(strip_preamble("only thoughts</think>", &options()), "");
    }
}
