//! The public parsing entry point.

use crate::{CharacterTaskParser, ParserOptions, PlotTaskParser};
use std::str::FromStr;
use tracing::debug;
use vasari_core::{ParseOutcome, TaskKind, TaskMetadata};
use vasari_error::{MetadataError, MetadataErrorKind, VasariResult};

/// Parser for responder output, dispatching on task shape.
///
/// Construction compiles every pattern once; the parser itself is
/// immutable and `Send + Sync`, so a single instance can score responses
/// from any number of threads without coordination.
///
/// # Examples
///
/// ```
/// use vasari_core::TaskKind;
/// use vasari_parser::ResponseParser;
///
/// # fn example() -> vasari_error::VasariResult<()> {
/// let parser = ResponseParser::new();
/// let outcome = parser.parse(TaskKind::Character, "A: Alice\nB: Bob", None)?;
/// assert_eq!(outcome.label().as_ref().unwrap().to_string(), "Alice/Bob");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct ResponseParser {
    options: ParserOptions,
    character: CharacterTaskParser,
    plot: PlotTaskParser,
}

impl ResponseParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    /// Create a parser with explicit options.
    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            options,
            character: CharacterTaskParser::new(),
            plot: PlotTaskParser::new(),
        }
    }

    /// The options this parser was built with.
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse one responder output for the given task shape.
    ///
    /// # Errors
    ///
    /// Returns an error only when `metadata` is absent for a plot task,
    /// which cannot be scored without its answer map. Every other failure
    /// mode is reported in the returned outcome.
    #[tracing::instrument(
        skip(self, raw, metadata),
        fields(task = %task, response_len = raw.len())
    )]
    pub fn parse(
        &self,
        task: TaskKind,
        raw: &str,
        metadata: Option<&TaskMetadata>,
    ) -> VasariResult<ParseOutcome> {
        match task {
            TaskKind::Character => Ok(self.character.parse(raw, metadata, &self.options)),
            TaskKind::Plot => {
                let metadata = metadata.ok_or_else(|| {
                    MetadataError::new(MetadataErrorKind::Missing(task.to_string()))
                })?;
                Ok(self.plot.parse(raw, metadata, &self.options))
            }
        }
    }

    /// Parse with a string task tag, as carried in harness records.
    ///
    /// An unrecognized tag yields the empty outcome — no label, no
    /// diagnostics — without inspecting the response or metadata.
    ///
    /// # Errors
    ///
    /// Same contract as [`parse`](Self::parse).
    pub fn parse_tagged(
        &self,
        task_type: &str,
        raw: &str,
        metadata: Option<&TaskMetadata>,
    ) -> VasariResult<ParseOutcome> {
        match TaskKind::from_str(task_type) {
            Ok(task) => self.parse(task, raw, metadata),
            Err(_) => {
                debug!(task_type, "Unrecognized task type");
                Ok(ParseOutcome::unrecognized())
            }
        }
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}
