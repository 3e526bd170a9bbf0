use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;

use crate::{
    error::LlmError,
    ollama::types::{
        OllamaChatRequest, OllamaChatResponse, OllamaMessage, OllamaOptions, OllamaRole,
    },
    types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage},
};

/// Default Ollama daemon address
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Environment variable that turns on request/response payload logging
const LOG_PAYLOADS_ENV: &str = "MINDSCALE_LLM_LOG_PAYLOADS";

/// Ollama local LLM client
pub struct OllamaClient {
    base_url: String,
    model: String,
    http_client: reqwest::Client,
}

impl OllamaClient {
    /// Create a client for the default base URL with no request timeout
    pub fn new() -> Result<Self, LlmError> {
        Self::with_timeout(None)
    }

    /// Create a client whose requests give up after `timeout`, or never if `None`
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, LlmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: crate::ollama::LLAMA_3_2.to_string(),
            http_client,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model used when a request does not name one
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a chat message using the Ollama /api/chat endpoint
    pub async fn create_chat(
        &self,
        request: OllamaChatRequest,
    ) -> Result<OllamaChatResponse, LlmError> {
        let url = format!("{}/api/chat", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let log_payloads = std::env::var(LOG_PAYLOADS_ENV).is_ok();
        if log_payloads {
            if let Ok(json_str) = serde_json::to_string_pretty(&request) {
                tracing::debug!(payload = %json_str, "Ollama request");
            }
        }

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let status = response.status();

        if status.is_success() {
            let ollama_response: OllamaChatResponse = response
                .json()
                .await
                .map_err(|e| LlmError::internal(format!("Failed to parse response: {}", e)))?;

            if log_payloads {
                if let Ok(json_str) = serde_json::to_string_pretty(&ollama_response) {
                    tracing::debug!(payload = %json_str, "Ollama response");
                }
            }

            Ok(ollama_response)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            Err(LlmError::from_status(status, error_text))
        }
    }
}

#[async_trait]
impl crate::client::LlmClient for OllamaClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let mut messages = Vec::new();

        // System message goes first
        if let Some(system_prompt) = request.system {
            messages.push(OllamaMessage::new(OllamaRole::System, system_prompt));
        }

        messages.extend(request.messages.into_iter().map(|msg| {
            let role = match msg.role {
                Role::User => OllamaRole::User,
                Role::Assistant => OllamaRole::Assistant,
                Role::System => OllamaRole::System,
            };

            let content = msg
                .content
                .into_iter()
                .map(|block| match block {
                    ContentBlock::Text { text } => text,
                })
                .collect::<Vec<String>>()
                .join("");

            OllamaMessage::new(role, content)
        }));

        let options = OllamaOptions {
            temperature: request.temperature,
        };

        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model
        };

        let ollama_request = OllamaChatRequest {
            model,
            messages,
            options: if options.is_empty() {
                None
            } else {
                Some(options)
            },
            // A single JSON reply, never a stream
            stream: Some(false),
        };

        let ollama_response = self.create_chat(ollama_request).await?;

        let content = if ollama_response.message.content.is_empty() {
            Vec::new()
        } else {
            vec![ContentBlock::Text {
                text: ollama_response.message.content,
            }]
        };

        Ok(CompletionResponse {
            content,
            role: Role::Assistant,
            usage: Usage {
                input_tokens: ollama_response.prompt_eval_count.unwrap_or(0),
                output_tokens: ollama_response.eval_count.unwrap_or(0),
            },
            stop_reason: ollama_response.done_reason,
        })
    }

    fn provider_name(&self) -> &str {
        crate::providers::OLLAMA
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
