use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::application::ClipboardService;
use crate::domain::DomainError;

/// Clipboard kept in process memory. Records every write.
pub struct InMemoryClipboard {
    writes: Mutex<Vec<String>>,
    fail: bool,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A clipboard that rejects every write.
    pub fn failing() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn contents(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardService for InMemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::clipboard("clipboard access denied"));
        }
        self.lock().push(text.to_string());
        Ok(())
    }
}
