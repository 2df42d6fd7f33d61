use crate::domain::DomainError;

/// Writes text to a clipboard.
pub trait ClipboardService: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), DomainError>;
}
