//! HTTP client for the configured text-generation provider.
//!
//! OpenAI and Ollama speak the chat-completions protocol; Anthropic uses its
//! messages API. Either way the result is a single text completion, and every
//! failure maps onto `CollabError` so the engine can degrade.

use std::time::Duration;

use async_trait::async_trait;
use barkeep_core::config::{LlmConfig, LlmProvider};
use barkeep_core::{
    parse_structured_pairings, Beverage, CollabError, Occasion, Pairing, RecommendationRequest,
    TextGenerator,
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::prompts;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_COMPLETION_TOKENS: u32 = 400;

pub struct LlmTextGenerator {
    http: reqwest::Client,
    provider: LlmProvider,
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
    max_retries: u32,
}

impl LlmTextGenerator {
    pub fn from_config(config: &LlmConfig) -> Result<Self, CollabError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|error| CollabError::Failed(error.to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| default_base_url(config.provider).to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            provider: config.provider,
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_retries: config.max_retries,
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String, CollabError> {
        let mut last_error = CollabError::Failed("no completion attempts made".to_string());

        for attempt in 0..=self.max_retries {
            match self.complete_once(prompt).await {
                Ok(text) => return Ok(text),
                Err(error) if attempt < self.max_retries && is_retryable(&error) => {
                    tracing::debug!(attempt, error = %error, "completion attempt failed, retrying");
                    last_error = error;
                }
                Err(error) => return Err(error),
            }
        }

        Err(last_error)
    }

    async fn complete_once(&self, prompt: &str) -> Result<String, CollabError> {
        match self.provider {
            LlmProvider::OpenAi | LlmProvider::Ollama => self.chat_completion(prompt).await,
            LlmProvider::Anthropic => self.anthropic_message(prompt).await,
        }
    }

    async fn chat_completion(&self, prompt: &str) -> Result<String, CollabError> {
        let mut request = self.http.post(format!("{}/chat/completions", self.base_url)).json(
            &json!({
                "model": self.model,
                "messages": [{"role": "user", "content": prompt}],
                "temperature": 0.7,
                "max_tokens": MAX_COMPLETION_TOKENS,
            }),
        );
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key.expose_secret());
        }

        let response = request.send().await.map_err(transport_error)?;
        let response = check_status(response)?;
        let body: ChatCompletionResponse =
            response.json().await.map_err(|error| CollabError::Malformed(error.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| CollabError::Malformed("completion had no choices".to_string()))
    }

    async fn anthropic_message(&self, prompt: &str) -> Result<String, CollabError> {
        let mut request = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&json!({
                "model": self.model,
                "max_tokens": MAX_COMPLETION_TOKENS,
                "messages": [{"role": "user", "content": prompt}],
            }));
        if let Some(api_key) = &self.api_key {
            request = request.header("x-api-key", api_key.expose_secret());
        }

        let response = request.send().await.map_err(transport_error)?;
        let response = check_status(response)?;
        let body: AnthropicMessageResponse =
            response.json().await.map_err(|error| CollabError::Malformed(error.to_string()))?;

        body.content
            .into_iter()
            .find_map(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| CollabError::Malformed("message had no text content".to_string()))
    }
}

#[async_trait]
impl TextGenerator for LlmTextGenerator {
    async fn explain(
        &self,
        beverage: &Beverage,
        request: &RecommendationRequest,
    ) -> Result<String, CollabError> {
        let prompt = prompts::explanation_prompt(beverage, request);
        let text = self.complete(&prompt).await?;
        Ok(text.trim().to_string())
    }

    async fn suggest_pairings(
        &self,
        beverage: &Beverage,
        occasion: Occasion,
    ) -> Result<Vec<Pairing>, CollabError> {
        let prompt = prompts::pairings_prompt(beverage, occasion);
        let raw = self.complete(&prompt).await?;
        parse_structured_pairings(extract_json(&raw))
    }
}

fn default_base_url(provider: LlmProvider) -> &'static str {
    match provider {
        LlmProvider::OpenAi => DEFAULT_OPENAI_BASE_URL,
        LlmProvider::Anthropic => DEFAULT_ANTHROPIC_BASE_URL,
        LlmProvider::Ollama => DEFAULT_OLLAMA_BASE_URL,
    }
}

fn transport_error(error: reqwest::Error) -> CollabError {
    if error.is_timeout() {
        CollabError::Timeout
    } else {
        CollabError::Failed(error.to_string())
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CollabError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(CollabError::Failed(format!("provider returned status {status}")))
    }
}

fn is_retryable(error: &CollabError) -> bool {
    match error {
        CollabError::Timeout => true,
        CollabError::Failed(message) => {
            message.contains("429") || message.contains("500") || message.contains("503")
        }
        CollabError::Malformed(_) => false,
    }
}

/// Models often wrap JSON in markdown fences; strip them before parsing.
fn extract_json(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open.strip_suffix("```").unwrap_or(without_open).trim()
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Deserialize)]
struct AnthropicMessageResponse {
    content: Vec<AnthropicContentBlock>,
}

#[derive(Deserialize)]
struct AnthropicContentBlock {
    #[serde(default)]
    text: Option<String>,
}
