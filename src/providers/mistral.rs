//! Mistral chat-completion synthesizer

use super::endpoint;
use super::prompt::build_prompt;
use super::traits::AnswerSynthesizer;
use crate::config::{timeout_secs, LlmSettings};
use crate::error::{ConfigError, ProviderError};
use crate::network::{HttpClient, ProviderRequest, ProviderResponse};
use crate::pipeline::{Query, SearchResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Answer synthesizer backed by the Mistral chat completions API
pub struct MistralSynthesizer {
    client: HttpClient,
    api_key: String,
    url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl MistralSynthesizer {
    pub fn new(
        client: HttpClient,
        api_key: impl Into<String>,
        settings: &LlmSettings,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            client,
            api_key: api_key.into(),
            url: endpoint(&settings.base_url, "v1/chat/completions")?,
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            timeout: timeout_secs("llm.timeout", settings.timeout)?,
        })
    }

    /// Build a single-message, non-streaming completion request
    pub fn request(&self, prompt: String) -> Result<ProviderRequest, ProviderError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(prompt),
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        Ok(ProviderRequest::post(&self.url)
            .bearer(&self.api_key)
            .json(serde_json::to_value(body)?))
    }

    /// Extract the generated text from the first choice
    pub fn response(&self, response: ProviderResponse) -> Result<String, ProviderError> {
        let parsed: ChatResponse = response.ensure_success()?.json()?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ProviderError::Empty)
    }
}

#[async_trait]
impl AnswerSynthesizer for MistralSynthesizer {
    fn name(&self) -> &str {
        "mistral"
    }

    async fn synthesize(
        &self,
        results: &[SearchResult],
        query: &Query,
    ) -> Result<String, ProviderError> {
        if results.is_empty() {
            return Err(ProviderError::InvalidInput(
                "no search results to synthesize".to_string(),
            ));
        }

        let prompt = build_prompt(results, query);
        debug!(
            "sending {} sources ({} chars) to {}",
            results.len(),
            prompt.len(),
            self.model
        );

        let request = self.request(prompt)?;
        let response = self
            .client
            .execute_with_timeout(request, self.timeout)
            .await?;
        self.response(response)
    }
}
