//! Request body for `generateContent`.

use serde::{Deserialize, Serialize};

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

/// A text part of a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// A request with a single user turn holding `prompt`.
    pub fn user_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_user_prompt_shape() {
        let request = GenerateContentRequest::user_prompt("find the total");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [
                    { "role": "user", "parts": [ { "text": "find the total" } ] }
                ]
            })
        );
    }
}
