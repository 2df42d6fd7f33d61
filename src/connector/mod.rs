//! # Connector Layer
//!
//! External integrations implementing the application ports:
//! - Chat completion (OpenAI over HTTP, or a local mock)
//! - Clipboard (system clipboard, or in-memory)
//! - Notifications (terminal, or recorded)
//!
//! plus the container and router wiring them to the command line.

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
