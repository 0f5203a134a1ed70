//! Language-model integration for article generation
//!
//! `CompletionService` is the seam between the run orchestrator and the
//! completion provider: one prompt in, the raw completion text out.

pub mod mock;
pub mod openai;

pub use mock::MockCompletionClient;
pub use openai::OpenAiChatClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send `prompt` as the user turn and return the trimmed completion text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
