//! Core data types for Vasari.
//!
//! This crate defines the vocabulary shared across the Vasari workspace:
//! the task discriminator, answer labels, structured diagnostics, and the
//! task metadata consumed during validation. The types are deliberately
//! inert — all parsing behavior lives in `vasari_parser`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod answer_map;
mod diagnostics;
mod label;
mod metadata;
mod outcome;
mod task;

pub use answer_map::AnswerMap;
pub use diagnostics::{Diagnostics, ValidationFailure};
pub use label::Label;
pub use metadata::TaskMetadata;
pub use outcome::ParseOutcome;
pub use task::TaskKind;
