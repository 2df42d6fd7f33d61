use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Target media type the enhanced prompt is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaMode {
    Image,
    #[default]
    Video,
}

impl MediaMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaMode::Image => "image",
            MediaMode::Video => "video",
        }
    }

    /// The mode name with its indefinite article ("an image", "a video").
    pub fn with_article(&self) -> &'static str {
        match self {
            MediaMode::Image => "an image",
            MediaMode::Video => "a video",
        }
    }
}

impl std::fmt::Display for MediaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "image" => Ok(MediaMode::Image),
            "video" => Ok(MediaMode::Video),
            other => Err(DomainError::invalid_input(format!(
                "unknown mode '{other}' (expected 'image' or 'video')"
            ))),
        }
    }
}
