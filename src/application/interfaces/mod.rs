mod chat_client;
mod clipboard_service;
mod notifier;

pub use chat_client::*;
pub use clipboard_service::*;
pub use notifier::*;
