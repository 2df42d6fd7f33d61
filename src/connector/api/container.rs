use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{ChatClient, ClipboardService, Notifier, PromptFormController};
use crate::connector::adapter::{
    InMemoryClipboard, MockChatClient, OpenAiChatClient, SystemClipboard, TerminalNotifier,
    API_KEY_VAR, BASE_URL_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL, MODEL_VAR,
};
use crate::domain::RequestState;

pub struct ContainerConfig {
    /// Credential for the chat endpoint. Read once at startup and passed in
    /// explicitly; `None` makes every submission fail with a credential hint.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Answer locally instead of calling the chat endpoint.
    pub mock_llm: bool,
    /// Keep copies in process memory instead of the system clipboard.
    pub no_clipboard: bool,
    /// Keep copied text on the system clipboard after the process exits.
    /// Meant for one-shot commands; each copy blocks until it is replaced.
    pub hold_clipboard: bool,
}

impl ContainerConfig {
    /// Environment defaults, before any CLI overrides.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_VAR).ok(),
            model: std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var(BASE_URL_VAR)
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            mock_llm: false,
            no_clipboard: false,
            hold_clipboard: false,
        }
    }
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    clipboard: Arc<dyn ClipboardService>,
    notifier: Arc<dyn Notifier>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let chat_client: Arc<dyn ChatClient> = if config.mock_llm {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            let client = OpenAiChatClient::new(
                config.api_key.clone(),
                config.model.clone(),
                config.base_url.clone(),
            );
            if !client.has_api_key() {
                warn!("{API_KEY_VAR} is not set; submissions will fail until it is configured");
            }
            debug!("Using chat endpoint {} with model {}", client.url(), config.model);
            Arc::new(client)
        };

        let clipboard: Arc<dyn ClipboardService> = if config.no_clipboard {
            debug!("Using in-memory clipboard");
            Arc::new(InMemoryClipboard::new())
        } else if config.hold_clipboard {
            debug!("Using system clipboard, held until replaced");
            Arc::new(SystemClipboard::holding_until_replaced())
        } else {
            Arc::new(SystemClipboard::new())
        };

        Self {
            chat_client,
            clipboard,
            notifier: Arc::new(TerminalNotifier::new()),
        }
    }

    /// Build a container around already-constructed services.
    pub fn with_services(
        chat_client: Arc<dyn ChatClient>,
        clipboard: Arc<dyn ClipboardService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            chat_client,
            clipboard,
            notifier,
        }
    }

    /// A fresh form instance. Form instances share no state with each other.
    pub fn form_controller(&self, state: RequestState) -> PromptFormController {
        PromptFormController::with_state(
            self.chat_client.clone(),
            self.clipboard.clone(),
            self.notifier.clone(),
            state,
        )
    }
}
