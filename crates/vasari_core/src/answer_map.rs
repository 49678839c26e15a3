//! Answer maps for plot tasks.
//!
//! Upstream metadata stores the option-number → outcome-label mapping
//! either as a native mapping or as a textual rendering of one. The
//! textual form is decoded by a literal-structure parser restricted to
//! quoted strings inside braces — never an expression evaluator — so
//! untrusted metadata cannot smuggle anything executable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from a selectable option number to its semantic outcome label.
///
/// # Examples
///
/// ```
/// use vasari_core::AnswerMap;
///
/// let encoded = AnswerMap::Encoded("{'1': 'Biased', '2': 'Counter'}".to_string());
/// let map = encoded.resolve().unwrap();
/// assert_eq!(map["2"], "Counter");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerMap {
    /// Native mapping from option digits to outcome labels
    Map(HashMap<String, String>),
    /// Textual rendering of the mapping, decoded on demand
    Encoded(String),
}

impl AnswerMap {
    /// Decode this answer map into a usable mapping.
    ///
    /// Returns `None` when the textual form is malformed or when the
    /// mapping is empty — an empty map can never resolve an option, so it
    /// behaves exactly like an absent one. Malformed encodings are logged
    /// and degrade to `None` rather than failing the caller.
    pub fn resolve(&self) -> Option<HashMap<String, String>> {
        let map = match self {
            Self::Map(map) => map.clone(),
            Self::Encoded(text) => match parse_literal_map(text) {
                Some(map) => map,
                None => {
                    tracing::warn!(
                        encoded_len = text.len(),
                        "Discarding malformed answer map encoding"
                    );
                    return None;
                }
            },
        };

        if map.is_empty() { None } else { Some(map) }
    }
}

/// Parse a textual mapping of quoted strings to quoted strings.
///
/// Tries JSON first, then a scanner for single-quoted literals of the form
/// `{'1': 'Biased', '2': 'Counter'}`. Anything beyond quoted scalar keys
/// and values is rejected.
fn parse_literal_map(text: &str) -> Option<HashMap<String, String>> {
    let text = text.trim();
    if let Ok(map) = serde_json::from_str::<HashMap<String, String>>(text) {
        return Some(map);
    }
    scan_quoted_map(text)
}

fn scan_quoted_map(text: &str) -> Option<HashMap<String, String>> {
    let body = text.strip_prefix('{')?.strip_suffix('}')?;
    let mut map = HashMap::new();
    let mut rest = body.trim();

    while !rest.is_empty() {
        let (key, after_key) = scan_quoted(rest)?;
        let after_colon = after_key.trim_start().strip_prefix(':')?;
        let (value, after_value) = scan_quoted(after_colon.trim_start())?;
        map.insert(key, value);

        rest = after_value.trim_start();
        match rest.strip_prefix(',') {
            Some(tail) => rest = tail.trim_start(),
            None => break,
        }
    }

    // Leftover text means the input was not a pure literal mapping.
    if rest.is_empty() { Some(map) } else { None }
}

/// Scan one quoted string, returning it and the unconsumed remainder.
fn scan_quoted(text: &str) -> Option<(String, &str)> {
    let mut chars = text.char_indices();
    let (_, quote) = chars.next()?;
    if quote != '\'' && quote != '"' {
        return None;
    }

    let mut value = String::new();
    let mut escaped = false;
    for (i, ch) in chars {
        if escaped {
            value.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            c if c == quote => return Some((value, &text[i + c.len_utf8()..])),
            c => value.push(c),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_map_resolves() {
        let map = AnswerMap::Map(HashMap::from([("1".to_string(), "Biased".to_string())]));
        assert_eq!(map.resolve().unwrap()["1"], "Biased");
    }

    #[test]
    fn test_json_encoding_resolves() {
        let map = AnswerMap::Encoded(r#"{"1": "Biased", "2": "Counter"}"#.to_string());
        assert_eq!(map.resolve().unwrap()["2"], "Counter");
    }

    #[test]
    fn test_single_quoted_encoding_resolves() {
        let map =
            AnswerMap::Encoded("{'1': 'Biased', '2': 'Counter', '3': 'Neutral'}".to_string());
        let resolved = map.resolve().unwrap();
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved["3"], "Neutral");
    }

    #[test]
    fn test_trailing_comma_is_tolerated() {
        let map = AnswerMap::Encoded("{'1': 'Biased',}".to_string());
        assert_eq!(map.resolve().unwrap()["1"], "Biased");
    }

    #[test]
    fn test_escaped_quote_in_value() {
        let map = AnswerMap::Encoded(r"{'1': 'it\'s fine'}".to_string());
        assert_eq!(map.resolve().unwrap()["1"], "it's fine");
    }

    #[test]
    fn test_malformed_encoding_degrades_to_none() {
        assert!(AnswerMap::Encoded("not a map".to_string()).resolve().is_none());
        assert!(AnswerMap::Encoded("{'1': }".to_string()).resolve().is_none());
        assert!(
            AnswerMap::Encoded("{'1': 'x'} extra".to_string())
                .resolve()
                .is_none()
        );
    }

    #[test]
    fn test_function_call_syntax_is_rejected() {
        // A literal parser must not accept anything callable.
        assert!(
            AnswerMap::Encoded("{'1': exec('rm -rf')}".to_string())
                .resolve()
                .is_none()
        );
    }

    #[test]
    fn test_empty_map_behaves_as_absent() {
        assert!(AnswerMap::Encoded("{}".to_string()).resolve().is_none());
        assert!(AnswerMap::Map(HashMap::new()).resolve().is_none());
    }

    #[test]
    fn test_untagged_deserialization() {
        let native: AnswerMap = serde_json::from_str(r#"{"1": "Biased"}"#).unwrap();
        assert!(matches!(native, AnswerMap::Map(_)));

        let encoded: AnswerMap = serde_json::from_str(r#""{'1': 'Biased'}""#).unwrap();
        assert!(matches!(encoded, AnswerMap::Encoded(_)));
    }
}
