use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::application::ClipboardService;
use crate::domain::DomainError;

/// The operating system clipboard, via `arboard`.
///
/// One handle is opened on the first write and kept for the life of the
/// adapter. On Linux the copied text is served by the process that owns the
/// handle, so dropping it after each write would lose the contents.
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
    hold_until_replaced: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
            hold_until_replaced: false,
        }
    }

    /// For one-shot commands that exit right after copying. On Linux each
    /// write blocks until another program takes over the clipboard.
    pub fn holding_until_replaced() -> Self {
        Self {
            hold_until_replaced: true,
            ..Self::new()
        }
    }

    pub fn holds_until_replaced(&self) -> bool {
        self.hold_until_replaced
    }

    pub fn is_open(&self) -> bool {
        self.handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "linux")]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    hold_until_replaced: bool,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if hold_until_replaced {
        tracing::info!("Keeping the copied text available until another program replaces it");
        clipboard.set().wait().text(text)
    } else {
        clipboard.set_text(text)
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _hold_until_replaced: bool,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

impl ClipboardService for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), DomainError> {
        let mut handle = self.handle.lock().unwrap_or_else(PoisonError::into_inner);

        let clipboard = match handle.take() {
            Some(clipboard) => clipboard,
            None => {
                let opened = arboard::Clipboard::new()
                    .map_err(|e| DomainError::clipboard(format!("clipboard unavailable: {e}")))?;
                debug!("Opened system clipboard");
                opened
            }
        };
        let clipboard = handle.insert(clipboard);

        set_text(clipboard, text, self.hold_until_replaced)
            .map_err(|e| DomainError::clipboard(format!("write failed: {e}")))?;
        debug!("Wrote {} characters to the system clipboard", text.len());
        Ok(())
    }
}
