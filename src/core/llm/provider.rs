//! The provider trait every adapter implements.

use async_trait::async_trait;

use super::error::{LlmError, Result};
use super::types::{CompletionRequest, CompletionResponse, ConnectionStatus};

/// A chat-completion provider. Implementations are stateless beyond their
/// credentials and HTTP client, so one instance is shared across tasks.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Stable provider id ("openai", "gemini")
    fn id(&self) -> &str;

    /// Human-readable provider name
    fn name(&self) -> &str;

    /// Model this instance targets
    fn model(&self) -> &str;

    /// Run a single-turn completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Cheap credential probe, reported with a user-facing message.
    async fn test_connection(&self) -> ConnectionStatus;

    /// Generate an image and return its URL. Most providers do not support
    /// this.
    async fn generate_image(&self, _prompt: &str) -> Result<String> {
        Err(LlmError::ImageNotSupported(self.id().to_string()))
    }

    fn supports_images(&self) -> bool {
        false
    }
}
