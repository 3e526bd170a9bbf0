use serde::{Deserialize, Serialize};

/// Ollama chat request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaChatRequest {
    /// Model name
    pub model: String,
    /// Chat history
    pub messages: Vec<OllamaMessage>,
    /// Model options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OllamaOptions>,
    /// Stream responses (default true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// Ollama model options
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl OllamaOptions {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
    }
}

/// Ollama chat response.
///
/// Every field is defaulted: a reply that lacks `message` or
/// `message.content` still decodes, with empty content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OllamaChatResponse {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub message: OllamaMessage,
    #[serde(default)]
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_eval_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_eval_duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_duration: Option<u64>,
}

/// Chat message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OllamaMessage {
    #[serde(default)]
    pub role: OllamaRole,
    #[serde(default)]
    pub content: String,
}

impl OllamaMessage {
    pub fn new(role: OllamaRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OllamaRole {
    System,
    User,
    #[default]
    Assistant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_unset_fields() {
        let request = OllamaChatRequest {
            model: "llama3.2".to_string(),
            messages: vec![
                OllamaMessage::new(OllamaRole::System, "rate"),
                OllamaMessage::new(OllamaRole::User, "fine"),
            ],
            options: None,
            stream: Some(false),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "llama3.2",
                "messages": [
                    {"role": "system", "content": "rate"},
                    {"role": "user", "content": "fine"}
                ],
                "stream": false
            })
        );
    }

    #[test]
    fn test_request_carries_temperature_option() {
        let request = OllamaChatRequest {
            model: "llama3.2".to_string(),
            messages: vec![OllamaMessage::new(OllamaRole::User, "fine")],
            options: Some(OllamaOptions {
                temperature: Some(0.0),
            }),
            stream: Some(false),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["options"], serde_json::json!({"temperature": 0.0}));
        assert!(OllamaOptions::default().is_empty());
    }

    #[test]
    fn test_response_without_message_decodes_empty() {
        let response: OllamaChatResponse =
            serde_json::from_str(r#"{"model":"llama3.2","done":true}"#).unwrap();
        assert_eq!(response.message.content, "");
        assert_eq!(response.message.role, OllamaRole::Assistant);
    }

    #[test]
    fn test_response_without_content_decodes_empty() {
        let response: OllamaChatResponse =
            serde_json::from_str(r#"{"message":{"role":"assistant"},"done":true}"#).unwrap();
        assert_eq!(response.message.content, "");
    }
}
