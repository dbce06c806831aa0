//! Extraction of the answer text from a `generateContent` response.

use std::borrow::Cow;

use serde_json::Value;
use tracing::trace;

use super::NO_PRICE_FOUND;
use crate::error::Result;

/// Parse a raw response body and extract the price text.
///
/// Only malformed JSON is an error; any well-formed document without usable
/// text yields [`NO_PRICE_FOUND`].
pub fn parse_price_response(raw: &str) -> Result<String> {
    let root: Value = serde_json::from_str(raw)?;
    Ok(extract_price_text(&root))
}

/// Return the first non-blank `candidates[].content.parts[].text`, trimmed.
///
/// Candidates and parts are visited in document order and the first match
/// anywhere in the nested structure wins. Candidates without a `content.parts`
/// array are skipped.
pub fn extract_price_text(root: &Value) -> String {
    let Some(candidates) = root.get("candidates").and_then(Value::as_array) else {
        trace!("response has no candidates array");
        return NO_PRICE_FOUND.to_string();
    };

    candidates
        .iter()
        .filter_map(|candidate| {
            candidate
                .get("content")
                .and_then(|content| content.get("parts"))
                .and_then(Value::as_array)
        })
        .flatten()
        .filter_map(|part| part.get("text").and_then(text_value))
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| NO_PRICE_FOUND.to_string())
}

/// Textual form of a `text` node. Strings are taken as-is; numbers,
/// booleans and `null` by their JSON spelling. Objects and arrays have no
/// textual form and count as absent.
fn text_value(node: &Value) -> Option<Cow<'_, str>> {
    match node {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null => Some(Cow::Borrowed("null")),
        Value::Object(_) | Value::Array(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_missing_or_invalid_candidates() {
        assert_eq!(extract_price_text(&json!({})), NO_PRICE_FOUND);
        assert_eq!(extract_price_text(&json!({ "candidates": "nope" })), NO_PRICE_FOUND);
        assert_eq!(extract_price_text(&json!({ "candidates": {} })), NO_PRICE_FOUND);
        assert_eq!(extract_price_text(&json!({ "candidates": [] })), NO_PRICE_FOUND);
        assert_eq!(extract_price_text(&json!([1, 2, 3])), NO_PRICE_FOUND);
        assert_eq!(extract_price_text(&json!(null)), NO_PRICE_FOUND);
    }

    #[test]
    fn test_whitespace_only_text_falls_back() {
        let response = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "   " }, { "text": "\n\t" } ] } },
                { "content": { "parts": [ { "text": "" } ] } }
            ]
        });
        assert_eq!(extract_price_text(&response), NO_PRICE_FOUND);
    }

    #[test]
    fn test_second_candidate_is_trimmed() {
        let response = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "  " } ] } },
                { "content": { "parts": [ { "text": "  $42.00  " } ] } }
            ]
        });
        assert_eq!(extract_price_text(&response), "$42.00");
    }

    #[test]
    fn test_non_blank_text_returned_verbatim() {
        let response = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "Total: $10" } ] } }
            ]
        });
        assert_eq!(extract_price_text(&response), "Total: $10");
    }

    #[test]
    fn test_first_match_wins_across_candidates() {
        let response = json!({
            "candidates": [
                { "content": { "parts": [ { "inlineData": {} }, { "text": "€5" }, { "text": "€6" } ] } },
                { "content": { "parts": [ { "text": "€7" } ] } }
            ]
        });
        assert_eq!(extract_price_text(&response), "€5");
    }

    #[test]
    fn test_malformed_candidates_are_skipped() {
        let response = json!({
            "candidates": [
                "not an object",
                { "finishReason": "SAFETY" },
                { "content": { "parts": "oops" } },
                { "content": { "parts": [ { "text": { "nested": 1 } }, { "text": ["$1"] } ] } },
                { "content": { "parts": [ { "text": "£3.50" } ] } }
            ]
        });
        assert_eq!(extract_price_text(&response), "£3.50");
    }

    #[test]
    fn test_null_text_node_reads_as_null() {
        let response = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "  " } ] } },
                { "content": { "parts": [ { "text": null }, { "text": "$9" } ] } }
            ]
        });
        assert_eq!(extract_price_text(&response), "null");
    }

    #[test]
    fn test_numeric_text_node() {
        let response = json!({
            "candidates": [ { "content": { "parts": [ { "text": 42 } ] } } ]
        });
        assert_eq!(extract_price_text(&response), "42");
    }

    #[test]
    fn test_parse_price_response() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"PLN 99,90\n"}],"role":"model"}}]}"#;
        assert_eq!(parse_price_response(raw).unwrap(), "PLN 99,90");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_price_response("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, crate::error::InvpriceError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse Gemini response"));
    }
}
