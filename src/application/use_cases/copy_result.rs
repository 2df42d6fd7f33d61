use std::sync::Arc;

use tracing::debug;

use crate::application::ClipboardService;
use crate::domain::DomainError;

pub struct CopyResultUseCase {
    clipboard: Arc<dyn ClipboardService>,
}

impl CopyResultUseCase {
    pub fn new(clipboard: Arc<dyn ClipboardService>) -> Self {
        Self { clipboard }
    }

    pub fn execute(&self, text: &str) -> Result<(), DomainError> {
        debug!("Copying {} characters to the clipboard", text.len());
        self.clipboard.write_text(text)
    }
}
