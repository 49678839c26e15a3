//! Task metadata error types.

/// Specific error conditions for task metadata handling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MetadataErrorKind {
    /// Metadata was not supplied for a task shape that requires it
    #[display("Task metadata is required for {} tasks", _0)]
    Missing(String),
}

/// Error type for task metadata handling.
///
/// # Examples
///
/// ```
/// use vasari_error::{MetadataError, MetadataErrorKind};
///
/// let err = MetadataError::new(MetadataErrorKind::Missing("plot".to_string()));
/// assert!(format!("{}", err).contains("plot"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Metadata Error: {} at line {} in {}", kind, line, file)]
pub struct MetadataError {
    /// The specific error condition
    pub kind: MetadataErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl MetadataError {
    /// Create a new MetadataError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MetadataErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
