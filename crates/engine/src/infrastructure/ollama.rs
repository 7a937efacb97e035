//! Ollama LLM client (OpenAI-compatible API)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::ports::{
    FinishReason, LlmError, LlmPort, LlmRequest, LlmResponse, MessageRole, TokenUsage,
};

/// Client for Ollama's OpenAI-compatible API
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

/// Default Ollama base URL.
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Default model for Ollama.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

impl OllamaClient {
    pub fn new(base_url: &str, model: &str) -> Self {
        // Suggestions are short; 60 seconds covers a cold model load.
        Self::with_timeout(base_url, model, 60)
    }

    /// Create client with custom timeout (for testing).
    pub fn with_timeout(base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl LlmPort for OllamaClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_request = OpenAIChatRequest {
            model: self.model.clone(),
            messages: build_messages(&request),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&api_request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| LlmError::RequestFailed(e.to_string()))?;
            return Err(LlmError::RequestFailed(format!("{status}: {error_text}")));
        }

        let api_response: OpenAIChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        convert_response(api_response)
    }
}

fn build_messages(request: &LlmRequest) -> Vec<OpenAIMessage> {
    let mut messages = Vec::with_capacity(request.messages.len() + 1);

    if let Some(system) = &request.system_prompt {
        messages.push(OpenAIMessage {
            role: "system".to_string(),
            content: Some(system.clone()),
        });
    }

    for msg in &request.messages {
        messages.push(OpenAIMessage {
            role: match msg.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
                MessageRole::System => "system",
            }
            .to_string(),
            content: Some(msg.content.clone()),
        });
    }

    messages
}

fn convert_response(response: OpenAIChatResponse) -> Result<LlmResponse, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No choices in LLM response".to_string()))?;

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("stop") | None => FinishReason::Stop,
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        Some(_) => FinishReason::Unknown,
    };

    Ok(LlmResponse {
        content: choice.message.content.unwrap_or_default(),
        finish_reason,
        usage: response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }),
    })
}

// =============================================================================
// OpenAI API types
// =============================================================================

#[derive(Debug, Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize, Default)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::ChatMessage;

    #[test]
    fn system_prompt_goes_first() {
        let request = LlmRequest::new(vec![ChatMessage::user("Who is Indra?")])
            .with_system_prompt("You are a mythology scholar.");
        let messages = build_messages(&request);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content.as_deref(), Some("Who is Indra?"));
    }

    #[test]
    fn converts_first_choice() {
        let raw = r#"{
            "choices": [{"message": {"role": "assistant", "content": "[\"Agni\"]"}, "finish_reason": "length"}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14}
        }"#;
        let response = convert_response(serde_json::from_str(raw).unwrap()).unwrap();
        assert_eq!(response.content, "[\"Agni\"]");
        assert_eq!(response.finish_reason, FinishReason::Length);
        assert_eq!(response.usage.map(|u| u.total_tokens), Some(14));
    }

    #[test]
    fn empty_choices_is_invalid() {
        let raw = r#"{"choices": [], "usage": null}"#;
        let result = convert_response(serde_json::from_str(raw).unwrap());
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = OllamaClient::new("http://ollama:11434/", "mistral");
        assert_eq!(client.base_url, "http://ollama:11434");
        assert_eq!(client.model, "mistral");
    }
}
