use super::client::OpenAiHttpClient;
use super::types::{ChatCompletionRequest, ChatMessage};
use crate::ai::CompletionService;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

const TEMPERATURE: f32 = 0.8;
const MAX_TOKENS: u32 = 900;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub struct OpenAiChatClient {
    http: OpenAiHttpClient,
    model: String,
}

impl OpenAiChatClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: OpenAiHttpClient::new(api_key, REQUEST_TIMEOUT),
            model,
        }
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: OpenAiHttpClient::new_with_client(api_key, REQUEST_TIMEOUT, client),
            model,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl CompletionService for OpenAiChatClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompts::SYSTEM.trim()),
                ChatMessage::user(prompt),
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        tracing::debug!("Sending chat completion request to OpenAI ({})", self.model);
        let response = self.http.chat_completion(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| Error::Provider("No response from OpenAI chat API".to_string()))
    }
}
