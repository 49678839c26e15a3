//! Structured diagnostics accompanying failure labels.
//!
//! Diagnostics exist for logging and debugging; callers branch on the
//! returned [`Label`](crate::Label), never on these records. Each failure
//! path produces its own variant, so the record shape documents which
//! fields can accompany which reason.

use serde_json::{Value, json};

/// Why a single extracted choice failed metadata validation.
///
/// The `Display` form is the machine-readable reason code carried in
/// [`Diagnostics::ValidationMismatch`].
///
/// # Examples
///
/// ```
/// use vasari_core::ValidationFailure;
///
/// let failure = ValidationFailure::ExcessiveNoise(12);
/// assert_eq!(format!("{}", failure), "excessive_noise(len_diff=12)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationFailure {
    /// More than one candidate entity is a substring of the extracted value
    #[display("ambiguous_multiple_matches")]
    AmbiguousMultipleMatches,
    /// No candidate entity occurs in the extracted value
    #[display("no_match_found")]
    NoMatchFound,
    /// Exactly one candidate matched, but the extracted value carries more
    /// surrounding characters than tolerated (the count is the character
    /// length difference)
    #[display("excessive_noise(len_diff={_0})")]
    ExcessiveNoise(usize),
}

/// Structured record attached to a parse outcome.
///
/// All variants but [`SelectedOption`](Self::SelectedOption) describe a
/// failure. The flat record form produced by [`to_record`](Self::to_record)
/// is the shape downstream log pipelines consume.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostics {
    /// The raw response was empty or the upstream failure sentinel
    EmptyOrErrorInput,
    /// The response never produced both an `A:` and a `B:` line
    MissingChoicePair {
        /// The response text after preamble stripping
        raw: String,
    },
    /// One of the extracted choices failed validation against the
    /// candidate entities
    ValidationMismatch {
        /// The first failure encountered (side A takes priority)
        detail: ValidationFailure,
        /// The candidate entities the choices were checked against
        expected: Vec<String>,
        /// Both extracted values, as `"<A> / <B>"`
        got_raw: String,
    },
    /// No selectable option token or usable answer map was available
    Unparseable {
        /// The cleaned response, truncated to the configured preview limit
        cleaned_response: String,
    },
    /// Success side-channel: which option number was selected
    SelectedOption {
        /// The selected option digit, as a string
        selected_num: String,
    },
}

impl Diagnostics {
    /// Whether this record describes a parsing or validation failure.
    pub fn parsing_failed(&self) -> bool {
        !matches!(self, Self::SelectedOption { .. })
    }

    /// The coarse reason code for this record, if the failure path has one.
    ///
    /// Plot-task failures carry no finer-grained reason than the
    /// `ParsingError` label itself, so [`Unparseable`](Self::Unparseable)
    /// returns `None` here.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Self::EmptyOrErrorInput => Some("empty_or_error_input"),
            Self::MissingChoicePair { .. } => Some("format_mismatch_missing_AB"),
            Self::ValidationMismatch { .. } => Some("validation_mismatch"),
            Self::Unparseable { .. } | Self::SelectedOption { .. } => None,
        }
    }

    /// Render the flat key/value record for log pipelines.
    ///
    /// # Examples
    ///
    /// ```
    /// use vasari_core::Diagnostics;
    ///
    /// let record = Diagnostics::EmptyOrErrorInput.to_record();
    /// assert_eq!(record["parsing_failed"], true);
    /// assert_eq!(record["reason"], "empty_or_error_input");
    /// ```
    pub fn to_record(&self) -> Value {
        match self {
            Self::EmptyOrErrorInput => json!({
                "parsing_failed": true,
                "reason": "empty_or_error_input",
            }),
            Self::MissingChoicePair { raw } => json!({
                "parsing_failed": true,
                "reason": "format_mismatch_missing_AB",
                "raw": raw,
            }),
            Self::ValidationMismatch {
                detail,
                expected,
                got_raw,
            } => json!({
                "parsing_failed": true,
                "reason": "validation_mismatch",
                "detail": detail.to_string(),
                "expected": expected,
                "got_raw": got_raw,
            }),
            Self::Unparseable { cleaned_response } => json!({
                "parsing_failed": true,
                "cleaned_response": cleaned_response,
            }),
            Self::SelectedOption { selected_num } => json!({
                "selected_num": selected_num,
            }),
        }
    }
}
