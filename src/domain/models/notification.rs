use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A transient, user-facing message (a toast in a graphical front-end).
///
/// Notifications never carry error details; those only go to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    title: String,
    description: String,
    variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn empty_prompt() -> Self {
        Self::destructive("Please enter a prompt", "The prompt field cannot be empty")
    }

    pub fn prompt_improved() -> Self {
        Self::info(
            "Prompt improved!",
            "Your prompt has been enhanced with more specific details and clarity.",
        )
    }

    pub fn improve_failed() -> Self {
        Self::destructive(
            "Error improving prompt",
            "Please make sure you have set up your OpenAI API key correctly",
        )
    }

    pub fn copied() -> Self {
        Self::info(
            "Copied to clipboard!",
            "You can now paste the improved prompt anywhere",
        )
    }

    pub fn copy_failed() -> Self {
        Self::destructive("Failed to copy", "Please try again")
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn variant(&self) -> NotificationVariant {
        self.variant
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}
