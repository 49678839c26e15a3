//! Numbered plot choice extraction.

use crate::{ParserOptions, strip_preamble};
use regex::Regex;
use tracing::debug;
use vasari_core::{AnswerMap, Diagnostics, Label, ParseOutcome, TaskMetadata};

/// Strategy for plot tasks: recover the selected option number and map it
/// to its semantic label through the task's answer map.
///
/// # Examples
///
/// ```
/// use vasari_core::{AnswerMap, TaskMetadata};
/// use vasari_parser::{ParserOptions, PlotTaskParser};
///
/// let parser = PlotTaskParser::new();
/// let metadata = TaskMetadata::for_plot(AnswerMap::Encoded(
///     "{'1': 'Biased', '2': 'Counter', '3': 'Neutral'}".to_string(),
/// ));
/// let outcome = parser.parse(
///     "<output>The answer is 2</output>",
///     &metadata,
///     &ParserOptions::default(),
/// );
/// assert_eq!(outcome.label().as_ref().unwrap().to_string(), "Counter");
/// ```
pub struct PlotTaskParser {
    output_block: Regex,
    option_token: Regex,
}

impl PlotTaskParser {
    /// Create the strategy, compiling its patterns.
    pub fn new() -> Self {
        // First tagged region wins; the interior may span lines.
        let output_block =
            Regex::new(r"(?s)<output>(.*?)</output>").expect("Valid output block regex");
        // A standalone option digit, never part of a longer digit run.
        let option_token = Regex::new(r"\b([123])\b").expect("Valid option token regex");
        Self {
            output_block,
            option_token,
        }
    }

    /// Extract the selected option from raw responder output and resolve
    /// it against the answer map in `metadata`.
    ///
    /// An option digit absent from the map resolves to the literal
    /// `OutOfRange` label; a missing digit or unusable map yields
    /// `ParsingError` with a preview of the cleaned text.
    pub fn parse(
        &self,
        raw: &str,
        metadata: &TaskMetadata,
        options: &ParserOptions,
    ) -> ParseOutcome {
        if raw.is_empty() || raw == options.failure_sentinel {
            return ParseOutcome::noted(Label::Error, Diagnostics::EmptyOrErrorInput);
        }

        let mut cleaned = strip_preamble(raw, options);
        if let Some(interior) = self
            .output_block
            .captures(cleaned)
            .and_then(|caps| caps.get(1))
        {
            cleaned = interior.as_str().trim();
        }

        let selected = self
            .option_token
            .captures(cleaned)
            .map(|caps| caps[1].to_string());
        let answer_map = metadata
            .answer_map()
            .as_ref()
            .and_then(AnswerMap::resolve);

        match (selected, answer_map) {
            (Some(selected_num), Some(map)) => {
                let label = map
                    .get(&selected_num)
                    .cloned()
                    .map_or(Label::OutOfRange, Label::Value);
                debug!(selected = %selected_num, label = %label, "Resolved plot option");
                ParseOutcome::noted(label, Diagnostics::SelectedOption { selected_num })
            }
            _ => {
                let preview: String = cleaned.chars().take(options.preview_limit).collect();
                ParseOutcome::noted(
                    Label::ParsingError,
                    Diagnostics::Unparseable {
                        cleaned_response: preview,
                    },
                )
            }
        }
    }
}

impl Default for PlotTaskParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn metadata() -> TaskMetadata {
        TaskMetadata::for_plot(AnswerMap::Map(HashMap::from([
            ("1".to_string(), "Biased".to_string()),
            ("2".to_string(), "Counter".to_string()),
            ("3".to_string(), "Neutral".to_string()),
        ])))
    }

    fn parse(raw: &str, metadata: &TaskMetadata) -> ParseOutcome {
        PlotTaskParser::new().parse(raw, metadata, &ParserOptions::default())
    }

    fn label_of(outcome: &ParseOutcome) -> String {
        outcome.label().as_ref().map(Label::to_string).unwrap_or_default()
    }

    #[test]
    fn test_output_region_narrows_the_scan() {
        let outcome = parse("<output>The answer is 2</output>", &metadata());
        assert_eq!(label_of(&outcome), "Counter");
        assert_eq!(
            outcome.diagnostics(),
            &Some(Diagnostics::SelectedOption {
                selected_num: "2".to_string()
            })
        );
    }

    #[test]
    fn test_digit_outside_output_region_is_ignored() {
        let outcome = parse("step 1 first\n<output>choice: 3</output>", &metadata());
        assert_eq!(label_of(&outcome), "Neutral");
    }

    #[test]
    fn test_no_output_region_scans_whole_text() {
        let outcome = parse("I pick option 1 here", &metadata());
        assert_eq!(label_of(&outcome), "Biased");
    }

    #[test]
    fn test_first_standalone_digit_wins() {
        let outcome = parse("3 looks right, though 1 was tempting", &metadata());
        assert_eq!(label_of(&outcome), "Neutral");
    }

    #[test]
    fn test_longer_digit_runs_do_not_match() {
        let outcome = parse("there are 12 reasons", &metadata());
        assert_eq!(label_of(&outcome), "ParsingError");
    }

    #[test]
    fn test_punctuation_adjacency_is_a_boundary() {
        let outcome = parse("(2)", &metadata());
        assert_eq!(label_of(&outcome), "Counter");
    }

    #[test]
    fn test_empty_and_sentinel_inputs_rejected() {
        for raw in ["", "Error"] {
            let outcome = parse(raw, &metadata());
            assert_eq!(label_of(&outcome), "Error");
            assert_eq!(
                outcome.diagnostics().as_ref().unwrap().reason(),
                Some("empty_or_error_input")
            );
        }
    }

    #[test]
    fn test_no_digit_is_a_parsing_error() {
        let outcome = parse("none of the options convince me", &metadata());
        assert_eq!(label_of(&outcome), "ParsingError");
        let diagnostics = outcome.diagnostics().as_ref().unwrap();
        assert!(diagnostics.parsing_failed());
        assert!(matches!(
            diagnostics,
            Diagnostics::Unparseable { cleaned_response } if cleaned_response.contains("convince")
        ));
    }

    #[test]
    fn test_unusable_answer_map_is_a_parsing_error() {
        let broken = TaskMetadata::for_plot(AnswerMap::Encoded("nonsense".to_string()));
        let outcome = parse("the answer is 2", &broken);
        assert_eq!(label_of(&outcome), "ParsingError");

        let absent = TaskMetadata::new(None, None, None);
        let outcome = parse("the answer is 2", &absent);
        assert_eq!(label_of(&outcome), "ParsingError");
    }

    #[test]
    fn test_digit_missing_from_map_is_out_of_range() {
        let partial = TaskMetadata::for_plot(AnswerMap::Map(HashMap::from([(
            "1".to_string(),
            "Biased".to_string(),
        )])));
        let outcome = parse("going with 3", &partial);
        assert_eq!(label_of(&outcome), "OutOfRange");
        assert_eq!(
            outcome.diagnostics(),
            &Some(Diagnostics::SelectedOption {
                selected_num: "3".to_string()
            })
        );
    }

    #[test]
    fn test_preview_is_truncated() {
        let long_tail = "x".repeat(400);
        let outcome = parse(&long_tail, &metadata());
        let Some(Diagnostics::Unparseable { cleaned_response }) = outcome.diagnostics() else {
            panic!("expected an unparseable record");
        };
        assert_eq!(cleaned_response.chars().count(), 200);
    }

    #[test]
    fn test_reasoning_preamble_discarded_before_scan() {
        let raw = "options 1 and 3 both read well</think>final: 2";
        let outcome = parse(raw, &metadata());
        assert_eq!(label_of(&outcome), "Counter");
    }
}
