use anyhow::Result;

use crate::domain::{instruction_template, MediaMode};

pub struct TemplateController;

impl TemplateController {
    pub fn new() -> Self {
        Self
    }

    pub fn template(&self, mode: MediaMode) -> Result<String> {
        Ok(instruction_template(mode).trim_end().to_string())
    }
}

impl Default for TemplateController {
    fn default() -> Self {
        Self::new()
    }
}
