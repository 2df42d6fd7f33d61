mod in_memory_clipboard;
mod mock_chat_client;
mod openai_chat_client;
mod recording_notifier;
mod system_clipboard;
mod terminal_notifier;

pub use in_memory_clipboard::*;
pub use mock_chat_client::*;
pub use openai_chat_client::*;
pub use recording_notifier::*;
pub use system_clipboard::*;
pub use terminal_notifier::*;
