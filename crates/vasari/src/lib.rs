//! Vasari - Answer Extraction for Narrative Comprehension Tasks
//!
//! Vasari extracts a normalized answer label from the free-form text an
//! automated responder produced, and validates the extraction against task
//! metadata before accepting it. It recognizes two task shapes:
//!
//! - **Character tasks**: a two-sided `A:`/`B:` choice, each side checked
//!   against the expected entity names
//! - **Plot tasks**: a single selected option number (1, 2, or 3), mapped
//!   to a semantic label through a caller-supplied answer map
//!
//! Malformed or ambiguous responses are rejected as data — a failure label
//! plus a structured diagnostics record — never guessed at.
//!
//! # Quick Start
//!
//! ```
//! use vasari::{ResponseParser, TaskMetadata};
//!
//! # fn main() -> vasari::VasariResult<()> {
//! let parser = ResponseParser::new();
//! let metadata = TaskMetadata::for_character("Alice", "Bob");
//!
//! let outcome = parser.parse_tagged("character", "A: Alice\nB: Bob", Some(&metadata))?;
//! assert_eq!(outcome.label().as_ref().unwrap().to_string(), "Alice/Bob");
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Vasari is organized as a workspace with focused crates:
//!
//! - `vasari_core` - Core data types (labels, diagnostics, metadata)
//! - `vasari_error` - Error types
//! - `vasari_parser` - Parsing strategies and text utilities
//!
//! This crate (`vasari`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use vasari_core::{
    AnswerMap, Diagnostics, Label, ParseOutcome, TaskKind, TaskMetadata, ValidationFailure,
};
pub use vasari_error::{
    MetadataError, MetadataErrorKind, VasariError, VasariErrorKind, VasariResult,
};
pub use vasari_parser::{
    CharacterTaskParser, ParserOptions, PlotTaskParser, ResponseParser, normalize, strip_preamble,
};
