use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::ChatClient;
use crate::domain::{user_message, ChatMessage, CompletionRequest, DomainError, RequestState};

/// Turns the form state into a chat completion request and sends it.
pub struct EnhancePromptUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl EnhancePromptUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    /// Validate `state` and build the two-message request for it.
    ///
    /// Fails with `InvalidInput("empty prompt")` when the trimmed prompt is
    /// empty; nothing is sent in that case.
    pub fn prepare(state: &RequestState) -> Result<CompletionRequest, DomainError> {
        if !state.has_prompt() {
            return Err(DomainError::invalid_input("empty prompt"));
        }

        let messages = vec![
            ChatMessage::system(state.instruction_template()),
            ChatMessage::user(user_message(state.mode(), state.raw_prompt())),
        ];

        Ok(CompletionRequest::new(messages, state.output_length_bound()))
    }

    pub async fn execute(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        info!(
            "Requesting enhancement from {} (max_tokens={})",
            self.chat_client.model_name(),
            request.max_tokens()
        );

        let start_time = Instant::now();
        let text = self.chat_client.complete(request).await?;

        debug!(
            "Received {} characters in {:.2}s",
            text.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatRole, MediaMode};

    #[test]
    fn prepare_rejects_blank_prompt() {
        let state = RequestState::default().with_prompt("   ");
        let err = EnhancePromptUseCase::prepare(&state).unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(err.to_string(), "Invalid input: empty prompt");
    }

    #[test]
    fn prepare_orders_system_before_user() {
        let state = RequestState::new(MediaMode::Image)
            .with_prompt("a lighthouse")
            .with_output_length_bound(800);
        let request = EnhancePromptUseCase::prepare(&state).unwrap();

        let roles: Vec<ChatRole> = request.messages().iter().map(|m| m.role()).collect();
        assert_eq!(roles, vec![ChatRole::System, ChatRole::User]);
        assert_eq!(request.messages()[0].content(), state.instruction_template());
        assert_eq!(request.max_tokens(), 800);
        assert_eq!(request.temperature(), 0.7);
        assert_eq!(request.top_p(), 0.9);
    }

    #[test]
    fn prepare_uses_the_edited_template() {
        let state = RequestState::default()
            .with_prompt("x")
            .with_instruction_template("Be brief.");
        let request = EnhancePromptUseCase::prepare(&state).unwrap();
        assert_eq!(request.content_of(ChatRole::System), Some("Be brief."));
    }
}
