use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{CompletionRequest, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";

/// Chat Completions request payload.
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the Chat Completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the OpenAI Chat Completions API (and compatible servers).
///
/// The API key is injected at construction. A missing key is not an error
/// until a request is attempted, where it fails without touching the network.
/// No timeout is configured here; reqwest's defaults apply.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiChatClient {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.into(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_body<'a>(&'a self, request: &'a CompletionRequest) -> ApiRequest<'a> {
        ApiRequest {
            model: &self.model,
            messages: request
                .messages()
                .iter()
                .map(|m| ApiMessage {
                    role: m.role().as_str(),
                    content: m.content(),
                })
                .collect(),
            temperature: request.temperature(),
            top_p: request.top_p(),
            max_tokens: request.max_tokens(),
        }
    }

    /// Read the first choice's message content out of a response body.
    fn parse_completion(body: &str) -> Result<String, DomainError> {
        let response: ApiResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::remote(format!("OpenAiChatClient: failed to parse response: {e}"))
        })?;

        response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::remote("OpenAiChatClient: response has no choices"))?
            .message
            .content
            .ok_or_else(|| DomainError::remote("OpenAiChatClient: first choice has no content"))
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DomainError::missing_credential(format!("{API_KEY_VAR} is not set"))
        })?;

        let body = self.build_body(request);
        debug!("POST {} ({} messages)", self.url, body.messages.len());

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::remote(format!("OpenAiChatClient: request failed: {e}")))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            DomainError::remote(format!("OpenAiChatClient: failed to read response: {e}"))
        })?;

        if !status.is_success() {
            warn!("OpenAiChatClient: API returned {status}: {text}");
            return Err(DomainError::remote(format!(
                "OpenAiChatClient: API returned {status}"
            )));
        }

        Self::parse_completion(&text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
