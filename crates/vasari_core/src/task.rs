//! Task discrimination for answer extraction.

use serde::{Deserialize, Serialize};

/// The task shapes the parser knows how to score.
///
/// Dispatch is by explicit tag rather than content inspection, so adding a
/// new task shape forces every match site to handle it.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use vasari_core::TaskKind;
///
/// assert_eq!(TaskKind::from_str("character").unwrap(), TaskKind::Character);
/// assert_eq!(format!("{}", TaskKind::Plot), "plot");
/// assert!(TaskKind::from_str("dialogue").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Two-sided A/B character choice task
    Character,
    /// Numbered multiple-choice plot task
    Plot,
}
