use serde::{Deserialize, Serialize};
use tracing::warn;

use super::MediaMode;
use crate::domain::services::instruction_template;

pub const MIN_OUTPUT_LENGTH_BOUND: u32 = 1;
pub const MAX_OUTPUT_LENGTH_BOUND: u32 = 2000;
pub const DEFAULT_OUTPUT_LENGTH_BOUND: u32 = 250;

/// Clamp an arbitrary integer into `[MIN_OUTPUT_LENGTH_BOUND, MAX_OUTPUT_LENGTH_BOUND]`.
pub fn clamp_output_length_bound(n: i64) -> u32 {
    let clamped = n.clamp(
        MIN_OUTPUT_LENGTH_BOUND as i64,
        MAX_OUTPUT_LENGTH_BOUND as i64,
    );
    if clamped != n {
        warn!("Output length bound {n} is out of range, using {clamped}");
    }
    clamped as u32
}

/// User-editable state of the prompt form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestState {
    raw_prompt: String,
    mode: MediaMode,
    instruction_template: String,
    output_length_bound: u32,
}

impl RequestState {
    pub fn new(mode: MediaMode) -> Self {
        Self {
            raw_prompt: String::new(),
            mode,
            instruction_template: instruction_template(mode),
            output_length_bound: DEFAULT_OUTPUT_LENGTH_BOUND,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.set_prompt(prompt);
        self
    }

    pub fn with_output_length_bound(mut self, n: i64) -> Self {
        self.set_output_length_bound(n);
        self
    }

    pub fn with_instruction_template(mut self, template: impl Into<String>) -> Self {
        self.set_instruction_template(template);
        self
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.raw_prompt = prompt.into();
    }

    /// Switch mode and regenerate the instruction template for it. Manual
    /// template edits are discarded.
    pub fn set_mode(&mut self, mode: MediaMode) {
        self.mode = mode;
        self.instruction_template = instruction_template(mode);
    }

    pub fn set_instruction_template(&mut self, template: impl Into<String>) {
        self.instruction_template = template.into();
    }

    pub fn set_output_length_bound(&mut self, n: i64) {
        self.output_length_bound = clamp_output_length_bound(n);
    }

    pub fn raw_prompt(&self) -> &str {
        &self.raw_prompt
    }

    pub fn trimmed_prompt(&self) -> &str {
        self.raw_prompt.trim()
    }

    pub fn has_prompt(&self) -> bool {
        !self.trimmed_prompt().is_empty()
    }

    pub fn mode(&self) -> MediaMode {
        self.mode
    }

    pub fn instruction_template(&self) -> &str {
        &self.instruction_template
    }

    pub fn output_length_bound(&self) -> u32 {
        self.output_length_bound
    }
}

impl Default for RequestState {
    fn default() -> Self {
        Self::new(MediaMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_form() {
        let state = RequestState::default();
        assert_eq!(state.mode(), MediaMode::Video);
        assert_eq!(state.output_length_bound(), 250);
        assert_eq!(state.raw_prompt(), "");
        assert_eq!(state.instruction_template(), instruction_template(MediaMode::Video));
    }

    #[test]
    fn output_length_bound_is_clamped() {
        let mut state = RequestState::default();
        state.set_output_length_bound(0);
        assert_eq!(state.output_length_bound(), 1);
        state.set_output_length_bound(-40);
        assert_eq!(state.output_length_bound(), 1);
        state.set_output_length_bound(5000);
        assert_eq!(state.output_length_bound(), 2000);
        state.set_output_length_bound(2000);
        assert_eq!(state.output_length_bound(), 2000);
        state.set_output_length_bound(512);
        assert_eq!(state.output_length_bound(), 512);
    }

    #[test]
    fn mode_change_overwrites_manual_template() {
        let mut state = RequestState::new(MediaMode::Image).with_instruction_template("my rules");
        assert_eq!(state.instruction_template(), "my rules");

        state.set_mode(MediaMode::Video);
        assert_eq!(state.instruction_template(), instruction_template(MediaMode::Video));
    }

    #[test]
    fn whitespace_only_prompt_is_not_a_prompt() {
        let state = RequestState::default().with_prompt(" \t\n ");
        assert!(!state.has_prompt());
        assert_eq!(state.raw_prompt(), " \t\n ");
    }
}
