use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ChatClient;
use crate::domain::{ChatRole, CompletionRequest, DomainError};

#[derive(Debug, Clone)]
enum MockReply {
    /// Answer with the user message, prefixed so it is recognisable.
    Echo,
    Text(String),
    Fail(String),
}

/// Offline [`ChatClient`] that records every request it receives.
pub struct MockChatClient {
    reply: Mutex<MockReply>,
    requests: Mutex<Vec<CompletionRequest>>,
    delay: Option<Duration>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_reply(MockReply::Echo)
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Text(text.into()))
    }

    pub fn failing(msg: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Fail(msg.into()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply: Mutex::new(reply),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Sleep this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn reply_with(&self, text: impl Into<String>) {
        *self.reply.lock().await = MockReply::Text(text.into());
    }

    pub async fn fail_with(&self, msg: impl Into<String>) {
        *self.reply.lock().await = MockReply::Fail(msg.into());
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().await.last().cloned()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        self.requests.lock().await.push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.reply.lock().await.clone() {
            MockReply::Echo => Ok(format!(
                "[mock] {}",
                request.content_of(ChatRole::User).unwrap_or_default()
            )),
            MockReply::Text(text) => Ok(text),
            MockReply::Fail(msg) => Err(DomainError::remote(msg)),
        }
    }

    fn model_name(&self) -> &str {
        "mock-llm"
    }
}
