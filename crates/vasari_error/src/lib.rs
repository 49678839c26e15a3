//! Error types for the Vasari library.
//!
//! This crate provides the foundation error types used throughout the Vasari
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Note that the parsers themselves almost never error: malformed responder
//! output is reported as data (a failure label plus diagnostics), not as an
//! `Err`. The error types here cover the one hard failure the library
//! recognizes — task metadata that is missing outright when a task shape
//! requires it.
//!
//! # Examples
//!
//! ```
//! use vasari_error::{MetadataError, MetadataErrorKind, VasariResult};
//!
//! fn require_metadata() -> VasariResult<()> {
//!     Err(MetadataError::new(MetadataErrorKind::Missing("plot".to_string())))?
//! }
//!
//! match require_metadata() {
//!     Ok(()) => println!("ok"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod metadata;

pub use error::{VasariError, VasariErrorKind, VasariResult};
pub use metadata::{MetadataError, MetadataErrorKind};
