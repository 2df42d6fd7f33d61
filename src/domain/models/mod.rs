mod chat;
mod media_mode;
mod notification;
mod request_state;
mod submission;

pub use chat::*;
pub use media_mode::*;
pub use notification::*;
pub use request_state::*;
pub use submission::*;
