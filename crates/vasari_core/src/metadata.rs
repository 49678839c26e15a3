//! Task metadata consumed during extraction and validation.

use crate::AnswerMap;
use serde::{Deserialize, Serialize};

/// Per-task metadata supplied by the evaluation harness.
///
/// Character tasks carry the two candidate entity names; plot tasks carry
/// the answer map. The serde field names match the upstream record keys,
/// so harness rows deserialize directly.
///
/// # Examples
///
/// ```
/// use vasari_core::TaskMetadata;
///
/// let metadata: TaskMetadata =
///     serde_json::from_str(r#"{"N1_entity": "Alice", "N2_entity": "Bob"}"#).unwrap();
/// assert_eq!(metadata.n1_entity().as_deref(), Some("Alice"));
/// assert!(metadata.answer_map().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct TaskMetadata {
    /// First candidate entity name for character tasks
    #[serde(rename = "N1_entity", default, skip_serializing_if = "Option::is_none")]
    n1_entity: Option<String>,
    /// Second candidate entity name for character tasks
    #[serde(rename = "N2_entity", default, skip_serializing_if = "Option::is_none")]
    n2_entity: Option<String>,
    /// Answer map for plot tasks
    #[serde(
        rename = "answer_map_obj",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    answer_map: Option<AnswerMap>,
}

impl TaskMetadata {
    /// Metadata for a character task with both candidate entities.
    pub fn for_character(n1_entity: impl Into<String>, n2_entity: impl Into<String>) -> Self {
        Self::new(Some(n1_entity.into()), Some(n2_entity.into()), None)
    }

    /// Metadata for a plot task with an answer map.
    pub fn for_plot(answer_map: AnswerMap) -> Self {
        Self::new(None, None, Some(answer_map))
    }
}
