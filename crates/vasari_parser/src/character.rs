//! Two-sided character choice extraction and validation.

use crate::{ParserOptions, normalize, strip_preamble};
use regex::Regex;
use tracing::warn;
use vasari_core::{Diagnostics, Label, ParseOutcome, TaskMetadata, ValidationFailure};

/// Strategy for character tasks: recover the `A:`/`B:` pair and validate
/// each side against the expected entity names.
///
/// # Examples
///
/// ```
/// use vasari_core::TaskMetadata;
/// use vasari_parser::{CharacterTaskParser, ParserOptions};
///
/// let parser = CharacterTaskParser::new();
/// let metadata = TaskMetadata::for_character("Alice", "Bob");
/// let outcome = parser.parse(
///     "A: Alice\nB: Bob",
///     Some(&metadata),
///     &ParserOptions::default(),
/// );
/// assert_eq!(outcome.label().as_ref().unwrap().to_string(), "Alice/Bob");
/// ```
pub struct CharacterTaskParser {
    side_a: Regex,
    side_b: Regex,
}

impl CharacterTaskParser {
    /// Create the strategy, compiling its line patterns.
    pub fn new() -> Self {
        // A line answers a side when it opens with the side letter followed
        // by a colon or period, any case, optional interior whitespace.
        let side_a = Regex::new(r"(?i)^A\s*[:.](.*)").expect("Valid side A regex");
        let side_b = Regex::new(r"(?i)^B\s*[:.](.*)").expect("Valid side B regex");
        Self { side_a, side_b }
    }

    /// Extract and validate a two-sided choice from raw responder output.
    ///
    /// Never errors: every malformed input maps to an `Error` label with a
    /// diagnostics record. Without metadata the extracted pair is returned
    /// as-is after normalization; with metadata both sides must resolve to
    /// a candidate entity.
    pub fn parse(
        &self,
        raw: &str,
        metadata: Option<&TaskMetadata>,
        options: &ParserOptions,
    ) -> ParseOutcome {
        if raw.is_empty() || raw == options.failure_sentinel {
            return ParseOutcome::noted(Label::Error, Diagnostics::EmptyOrErrorInput);
        }

        let stripped = strip_preamble(raw, options);

        let mut side_a = String::new();
        let mut side_b = String::new();
        for line in stripped.lines() {
            let line = line.trim();
            // Later lines overwrite earlier ones: last occurrence wins.
            if let Some(caps) = self.side_a.captures(line) {
                side_a = normalize(&caps[1]);
            } else if let Some(caps) = self.side_b.captures(line) {
                side_b = normalize(&caps[1]);
            }
        }

        if side_a.is_empty() || side_b.is_empty() {
            warn!(
                side_a = %side_a,
                side_b = %side_b,
                "Response is missing one or both choice lines"
            );
            return ParseOutcome::noted(
                Label::Error,
                Diagnostics::MissingChoicePair {
                    raw: stripped.to_string(),
                },
            );
        }

        if let Some(metadata) = metadata {
            let candidates = candidate_set(metadata);
            let checked_a = validate_choice(&side_a, &candidates, options.noise_tolerance);
            let checked_b = validate_choice(&side_b, &candidates, options.noise_tolerance);

            match (checked_a, checked_b) {
                (Ok(final_a), Ok(final_b)) => {
                    side_a = final_a;
                    side_b = final_b;
                }
                // Side A's failure takes priority when both sides fail.
                (Err(detail), _) | (_, Err(detail)) => {
                    warn!(
                        reason = %detail,
                        side_a = %side_a,
                        side_b = %side_b,
                        "Choice validation failed"
                    );
                    return ParseOutcome::noted(
                        Label::Error,
                        Diagnostics::ValidationMismatch {
                            detail,
                            expected: candidates,
                            got_raw: format!("{side_a} / {side_b}"),
                        },
                    );
                }
            }
        }

        ParseOutcome::resolved(Label::Value(format!("{side_a}/{side_b}")))
    }
}

impl Default for CharacterTaskParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the candidate entity set from metadata: normalized, empties
/// discarded, duplicates collapsed. Yields zero to two candidates.
fn candidate_set(metadata: &TaskMetadata) -> Vec<String> {
    let mut candidates = Vec::new();
    for entity in [metadata.n1_entity(), metadata.n2_entity()] {
        let Some(entity) = entity else { continue };
        let cleaned = normalize(entity);
        if !cleaned.is_empty() && !candidates.contains(&cleaned) {
            candidates.push(cleaned);
        }
    }
    candidates
}

/// Check one extracted value against the candidate set.
///
/// Exactly one candidate must occur as a substring, and the extracted
/// value may exceed it by at most `noise_tolerance` characters. On success
/// the candidate itself is returned, replacing the noisier extraction.
fn validate_choice(
    extracted: &str,
    candidates: &[String],
    noise_tolerance: usize,
) -> Result<String, ValidationFailure> {
    let matched: Vec<&String> = candidates
        .iter()
        .filter(|candidate| extracted.contains(candidate.as_str()))
        .collect();

    if matched.len() > 1 {
        return Err(ValidationFailure::AmbiguousMultipleMatches);
    }
    let Some(candidate) = matched.first() else {
        return Err(ValidationFailure::NoMatchFound);
    };

    let len_diff = extracted
        .chars()
        .count()
        .saturating_sub(candidate.chars().count());
    if len_diff > noise_tolerance {
        return Err(ValidationFailure::ExcessiveNoise(len_diff));
    }

    Ok((*candidate).clone())
}
