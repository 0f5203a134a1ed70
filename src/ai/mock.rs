use super::CompletionService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    ProviderError(String),
}

/// Scripted completion provider. Replies are returned in order and cycle once
/// exhausted; with no scripted replies a valid article about the prompt is
/// returned.
#[derive(Clone)]
pub struct MockCompletionClient {
    replies: Arc<Mutex<Vec<MockReply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.replies.lock().unwrap().push(MockReply::Text(response));
        self
    }

    pub fn with_provider_error(self, message: String) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(MockReply::ProviderError(message));
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Every prompt received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionService for MockCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let count = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };

        let replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Ok(serde_json::json!({
                "title": "A Mock Article",
                "meta": "Generated by the mock completion client",
                "image_keyword": "mock",
                "body": "<p>Mock body.</p>"
            })
            .to_string());
        }

        match &replies[(count - 1) % replies.len()] {
            MockReply::Text(text) => Ok(text.trim().to_string()),
            MockReply::ProviderError(message) => Err(Error::Provider(message.clone())),
        }
    }
}
