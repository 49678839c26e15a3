//! Answer extraction from free-form responder output.
//!
//! This crate turns the raw text an automated responder produced into a
//! normalized answer label, validated against task metadata before it is
//! accepted. Two strategies share a set of text-cleanup utilities:
//!
//! - **Character tasks**: extract a two-sided `A:`/`B:` choice and check
//!   each side against the expected entity names.
//! - **Plot tasks**: extract a single selected option number and map it to
//!   a semantic label through a caller-supplied answer map.
//!
//! Ambiguous or malformed input is rejected as data — a failure label plus
//! a structured diagnostics record — rather than guessed at or thrown.
//!
//! # Example
//!
//! ```
//! use vasari_core::{TaskKind, TaskMetadata};
//! use vasari_parser::ResponseParser;
//!
//! # fn example() -> vasari_error::VasariResult<()> {
//! let parser = ResponseParser::new();
//! let metadata = TaskMetadata::for_character("Alice", "Bob");
//!
//! let outcome = parser.parse(
//!     TaskKind::Character,
//!     "A: Alice\nB: Bob",
//!     Some(&metadata),
//! )?;
//! assert_eq!(outcome.label().as_ref().unwrap().to_string(), "Alice/Bob");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod character;
mod normalize;
mod options;
mod plot;
mod preamble;
mod response;

pub use character::CharacterTaskParser;
pub use normalize::normalize;
pub use options::ParserOptions;
pub use plot::PlotTaskParser;
pub use preamble::strip_preamble;
pub use response::ResponseParser;
