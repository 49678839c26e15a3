//! Top-level error wrapper types.

use crate::MetadataError;

/// This is the foundation error enum. Additional variants will be added
/// as the workspace grows new failure surfaces.
///
/// # Examples
///
/// ```
/// use vasari_error::{MetadataError, MetadataErrorKind, VasariError};
///
/// let meta_err = MetadataError::new(MetadataErrorKind::Missing("plot".to_string()));
/// let err: VasariError = meta_err.into();
/// assert!(format!("{}", err).contains("Metadata Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VasariErrorKind {
    /// Task metadata error
    #[from(MetadataError)]
    Metadata(MetadataError),
}

/// Vasari error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vasari_error::{MetadataError, MetadataErrorKind, VasariResult};
///
/// fn might_fail() -> VasariResult<()> {
///     Err(MetadataError::new(MetadataErrorKind::Missing("plot".to_string())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vasari Error: {}", _0)]
pub struct VasariError(Box<VasariErrorKind>);

impl VasariError {
    /// Create a new error from a kind.
    pub fn new(kind: VasariErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VasariErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VasariErrorKind
impl<T> From<T> for VasariError
where
    T: Into<VasariErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vasari operations.
///
/// # Examples
///
/// ```
/// use vasari_error::{MetadataError, MetadataErrorKind, VasariResult};
///
/// fn fetch_labels() -> VasariResult<String> {
///     Err(MetadataError::new(MetadataErrorKind::Missing("plot".to_string())))?
/// }
/// ```
pub type VasariResult<T> = std::result::Result<T, VasariError>;
