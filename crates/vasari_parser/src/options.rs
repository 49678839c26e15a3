//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Tunable knobs for the parsing strategies.
///
/// Defaults match the responder conventions the parser was built against;
/// override them only when scoring output from a differently-templated
/// responder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Marker closing a private reasoning block; everything up to and
    /// including its last occurrence is discarded
    #[serde(default = "default_reasoning_terminator")]
    pub reasoning_terminator: String,

    /// Token announcing the final answer; everything up to and including
    /// its last occurrence is discarded
    #[serde(default = "default_final_answer_marker")]
    pub final_answer_marker: String,

    /// Literal sentinel an upstream failure substitutes for real output
    #[serde(default = "default_failure_sentinel")]
    pub failure_sentinel: String,

    /// Maximum number of extra characters tolerated around a matched
    /// candidate entity
    #[serde(default = "default_noise_tolerance")]
    pub noise_tolerance: usize,

    /// Maximum length, in characters, of the cleaned-response preview
    /// carried in diagnostics
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

fn default_reasoning_terminator() -> String {
    "</think>".to_string()
}

fn default_final_answer_marker() -> String {
    "assistantfinal".to_string()
}

fn default_failure_sentinel() -> String {
    "Error".to_string()
}

fn default_noise_tolerance() -> usize {
    5
}

fn default_preview_limit() -> usize {
    200
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            reasoning_terminator: default_reasoning_terminator(),
            final_answer_marker: default_final_answer_marker(),
            failure_sentinel: default_failure_sentinel(),
            noise_tolerance: default_noise_tolerance(),
            preview_limit: default_preview_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.reasoning_terminator, "</think>");
        assert_eq!(options.final_answer_marker, "assistantfinal");
        assert_eq!(options.failure_sentinel, "Error");
        assert_eq!(options.noise_tolerance, 5);
        assert_eq!(options.preview_limit, 200);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let options: ParserOptions = serde_json::from_str(r#"{"noise_tolerance": 10}"#).unwrap();
        assert_eq!(options.noise_tolerance, 10);
        assert_eq!(options.preview_limit, 200);
    }
}
