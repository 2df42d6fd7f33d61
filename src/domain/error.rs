use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Remote call error: {0}")]
    RemoteCall(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        Self::RemoteCall(msg.into())
    }

    pub fn missing_credential(msg: impl Into<String>) -> Self {
        Self::MissingCredential(msg.into())
    }

    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Errors raised while talking to the text-generation endpoint, including
    /// a missing API key.
    pub fn is_remote_error(&self) -> bool {
        matches!(self, Self::RemoteCall(_) | Self::MissingCredential(_))
    }

    pub fn is_clipboard_error(&self) -> bool {
        matches!(self, Self::Clipboard(_))
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::SubmissionInFlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_counts_as_remote_error() {
        let err = DomainError::missing_credential("OPENAI_API_KEY is not set");
        assert!(err.is_remote_error());
        assert!(!err.is_validation_error());
    }

    #[test]
    fn display_keeps_the_detail() {
        let err = DomainError::invalid_input("empty prompt");
        assert_eq!(err.to_string(), "Invalid input: empty prompt");
    }
}
