use crate::{
    errors::GenerateError,
    providers::ai::AiProvider,
    types::{Completion, TokenUsage},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::debug;

/// The default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// The default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Sampling temperature used for both pipeline stages.
pub const TEMPERATURE: f32 = 0.5;

/// USD price per 1000 prompt tokens for the default model.
pub const PROMPT_PRICE_PER_1K: f64 = 0.0015;

/// USD price per 1000 completion tokens for the default model.
pub const COMPLETION_PRICE_PER_1K: f64 = 0.002;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: TokenUsage,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

// --- OpenAI Provider implementation ---

/// A provider for interacting with an OpenAI-compatible chat endpoint.
#[derive(Clone, Debug)]
pub struct OpenAiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    /// Creates a new `OpenAiProvider`.
    ///
    /// Fails with [`GenerateError::MissingApiKey`] when the key is empty.
    pub fn new(api_url: String, api_key: String, model: String) -> Result<Self, GenerateError> {
        if api_key.is_empty() {
            return Err(GenerateError::MissingApiKey);
        }
        let client = ReqwestClient::builder()
            .build()
            .map_err(GenerateError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    /// Sends one chat completion request with a fixed temperature.
    async fn complete(&self, prompt: &str) -> Result<Completion, GenerateError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(GenerateError::AiRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerateError::AiApi(error_text));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(GenerateError::AiDeserialization)?;

        debug!(usage = ?chat_response.usage, "<-- Completion received");

        let text = chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or(GenerateError::EmptyCompletion)?;

        Ok(Completion {
            text,
            usage: chat_response.usage,
        })
    }
}

/// Estimates the USD cost of a call from its token counters.
pub fn estimate_cost(usage: &TokenUsage) -> f64 {
    f64::from(usage.prompt_tokens) / 1000.0 * PROMPT_PRICE_PER_1K
        + f64::from(usage.completion_tokens) / 1000.0 * COMPLETION_PRICE_PER_1K
}
