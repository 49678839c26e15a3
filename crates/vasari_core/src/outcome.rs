//! The label/diagnostics pair returned by every parse.

use crate::{Diagnostics, Label};

/// Result of parsing one responder output.
///
/// `label` is `None` only when the string-tagged entry point was handed an
/// unrecognized task type; every recognized task produces a label. The
/// diagnostics record is present whenever the label signals failure, and
/// additionally carries the selected option number on plot successes.
///
/// # Examples
///
/// ```
/// use vasari_core::{Label, ParseOutcome};
///
/// let outcome = ParseOutcome::resolved(Label::Value("Alice/Bob".to_string()));
/// assert_eq!(outcome.label().as_ref().unwrap().to_string(), "Alice/Bob");
/// assert!(outcome.diagnostics().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters, derive_new::new)]
pub struct ParseOutcome {
    /// The extracted label, if the task type was recognized
    label: Option<Label>,
    /// Structured failure record or success side-channel
    diagnostics: Option<Diagnostics>,
}

impl ParseOutcome {
    /// A clean success: a label with no diagnostics.
    pub fn resolved(label: Label) -> Self {
        Self::new(Some(label), None)
    }

    /// A label accompanied by a diagnostics record.
    pub fn noted(label: Label, diagnostics: Diagnostics) -> Self {
        Self::new(Some(label), Some(diagnostics))
    }

    /// The outcome for an unrecognized task type: no label, no diagnostics.
    pub fn unrecognized() -> Self {
        Self::new(None, None)
    }

    /// Whether the label signals a parsing or validation failure.
    pub fn is_failure(&self) -> bool {
        self.label.as_ref().is_some_and(Label::is_failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_has_no_diagnostics() {
        let outcome = ParseOutcome::resolved(Label::Value("Neutral".to_string()));
        assert!(outcome.diagnostics().is_none());
        assert!(!outcome.is_failure());
    }

    #[test]
    fn test_failure_labels_flag_as_failures() {
        let outcome = ParseOutcome::noted(Label::Error, Diagnostics::EmptyOrErrorInput);
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_unrecognized_is_empty() {
        let outcome = ParseOutcome::unrecognized();
        assert!(outcome.label().is_none());
        assert!(outcome.diagnostics().is_none());
        assert!(!outcome.is_failure());
    }
}
