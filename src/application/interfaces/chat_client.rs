use async_trait::async_trait;

use crate::domain::{CompletionRequest, DomainError};

/// An interface for sending chat-style prompts to an LLM and receiving text responses.
///
/// Implementors encapsulate transport, credentials, serialization, and
/// vendor-specific API details. Each call is a single-shot request with no
/// retries.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send the ordered messages of `request` and return the text of the first
    /// completion.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;

    /// Model identifier used for requests (for logging).
    fn model_name(&self) -> &str;
}
