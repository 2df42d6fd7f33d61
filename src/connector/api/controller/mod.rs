pub mod enhance_controller;
pub mod session_controller;
pub mod template_controller;

pub use enhance_controller::EnhanceController;
pub use session_controller::{SessionCommand, SessionController};
pub use template_controller::TemplateController;
