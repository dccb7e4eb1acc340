//! Wire types for the OpenAI-compatible chat completions endpoint.

use serde::{Deserialize, Serialize};

/// A chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,

    /// Conversation messages, oldest first.
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature.
    pub temperature: f32,

    /// Output format constraint.
    pub response_format: ResponseFormat,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Message role (`system` or `user`).
    pub role: String,

    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// Response format constraint for the completion.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    /// Format type (`json_object` constrains output to a single JSON object).
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    /// Constrain the response to a single JSON object.
    #[must_use]
    pub fn json_object() -> Self {
        Self { format_type: "json_object".to_string() }
    }
}

/// A chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Generated choices.
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One generated choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The generated message.
    pub message: ChoiceMessage,
}

/// The message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text, absent for refusals and tool calls.
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_json_object_constraint() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::system("instructions"), ChatMessage::user("query")],
            temperature: 0.0,
            response_format: ResponseFormat::json_object(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["temperature"], json!(0.0));
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "query");
    }

    #[test]
    fn test_response_deserializes_content() {
        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "{}"}}]
        }))
        .unwrap();

        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content.as_deref(), Some("{}"));
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let response: ChatResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.choices.is_empty());

        let response: ChatResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant"}}]
        }))
        .unwrap();
        assert!(response.choices[0].message.content.is_none());
    }
}
