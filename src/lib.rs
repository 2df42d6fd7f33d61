pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, ClipboardService, CopyResultUseCase, EnhancePromptUseCase, Notifier,
    PromptFormController,
};

pub use cli::Commands;

pub use connector::api::controller::SessionCommand;
pub use connector::{
    Container, ContainerConfig, InMemoryClipboard, MockChatClient, OpenAiChatClient,
    RecordingNotifier, Router, SystemClipboard, TerminalNotifier,
};

pub use domain::{
    instruction_template, user_message, ChatMessage, ChatRole, CompletionRequest, DomainError,
    MediaMode, Notification, NotificationVariant, RequestState, SubmissionStatus,
};
