use async_trait::async_trait;
use crate::config::LLMConfig;
use crate::types::{AppResult, LLMMessage, LLMRequest, LLMResponse, ResponseFormat};
use tracing::{debug, warn};

/// System instruction sent ahead of every prompt.
pub const JSON_SYSTEM_INSTRUCTION: &str = "Respond strictly with a JSON object.";

/// Returned when the service answers without any message content.
pub const EMPTY_COMPLETION: &str = "{}";

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

/// Process-wide completion client. Built once at startup and shared via `AppState`.
pub struct LLM {
    adapter: Box<dyn LLMAdapter>,
    model: String,
}

impl LLM {
    pub fn new(config: &LLMConfig) -> Self {
        let adapter = crate::llm::groq::GroqAdapter::with_api_base(&config.api_key, &config.api_base);
        Self::with_adapter(Box::new(adapter), config.model.clone())
    }

    pub fn with_adapter(adapter: Box<dyn LLMAdapter>, model: impl Into<String>) -> Self {
        Self {
            adapter,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.adapter.create_chat_completion(request).await
    }

    /// Run `prompt` in JSON mode and return the raw completion text.
    ///
    /// An answer with no content becomes `"{}"`; any failure of the call
    /// itself is returned as an error.
    pub async fn query_json(&self, prompt: &str) -> AppResult<String> {
        let request = LLMRequest {
            model: self.model.clone(),
            messages: vec![
                LLMMessage::system(JSON_SYSTEM_INSTRUCTION),
                LLMMessage::user(prompt),
            ],
            max_tokens: None,
            temperature: None,
            response_format: Some(ResponseFormat::JsonObject),
        };

        let response = self.create_chat_completion(&request).await?;
        debug!(
            finish_reason = %response.finish_reason,
            total_tokens = response.usage.total_tokens,
            "Completion received"
        );

        match response.content {
            Some(content) if !content.is_empty() => Ok(content),
            _ => {
                warn!("Completion had no content, substituting empty object");
                Ok(EMPTY_COMPLETION.to_string())
            }
        }
    }
}
