//! Answer labels produced by the parsing strategies.

/// The normalized label extracted from a responder's output.
///
/// The `Display` form is what downstream scoring consumes: the resolved
/// value for successes, or one of the literal markers `"Error"`,
/// `"ParsingError"`, and `"OutOfRange"`.
///
/// # Examples
///
/// ```
/// use vasari_core::Label;
///
/// let label = Label::Value("Alice/Bob".to_string());
/// assert_eq!(format!("{}", label), "Alice/Bob");
/// assert!(!label.is_failure());
/// assert!(Label::ParsingError.is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Label {
    /// Resolved answer value, e.g. `"Alice/Bob"` or `"Counter"`
    #[display("{_0}")]
    Value(String),
    /// A selectable option was found but is absent from the answer map
    #[display("OutOfRange")]
    OutOfRange,
    /// Input was rejected or failed metadata validation
    #[display("Error")]
    Error,
    /// No selectable option could be recovered from the response
    #[display("ParsingError")]
    ParsingError,
}

impl Label {
    /// Whether this label signals a parsing or validation failure.
    ///
    /// `OutOfRange` is not a failure: the response parsed cleanly, the
    /// selected option simply has no mapped outcome.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Error | Self::ParsingError)
    }
}
