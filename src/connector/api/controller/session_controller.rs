use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::application::PromptFormController;
use crate::domain::{DomainError, MediaMode, RequestState};

use super::super::Container;

const HELP: &str = "\
Type a prompt and press enter to enhance it. Start a prompt that begins
with ':' with '::' instead. Commands:
  :mode <image|video>   switch mode (resets the instruction template)
  :tokens <n>           set the output length bound (1-2000)
  :system <text>        replace the instruction template
  :show                 print the current form
  :submit               submit the current prompt again
  :copy                 copy the last result to the clipboard
  :help                 show this help
  :quit                 leave the session";

/// One line of input in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Noop,
    Prompt(String),
    Mode(MediaMode),
    Tokens(i64),
    System(String),
    Show,
    Submit,
    Copy,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Self::Noop);
        }

        if trimmed.starts_with("::") {
            return Ok(Self::Prompt(line.replacen("::", ":", 1)));
        }

        let Some(command) = trimmed.strip_prefix(':') else {
            return Ok(Self::Prompt(line.to_string()));
        };

        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map(|(n, a)| (n, a.trim()))
            .unwrap_or((command, ""));

        match name {
            "mode" => Ok(Self::Mode(arg.parse()?)),
            "tokens" => arg.parse::<i64>().map(Self::Tokens).map_err(|_| {
                DomainError::invalid_input(format!("':tokens' expects an integer, got '{arg}'"))
            }),
            "system" => Ok(Self::System(arg.to_string())),
            "show" => Ok(Self::Show),
            "submit" => Ok(Self::Submit),
            "copy" => Ok(Self::Copy),
            "help" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(DomainError::invalid_input(format!(
                "unknown command ':{other}' (try :help)"
            ))),
        }
    }
}

pub struct SessionController<'a> {
    container: &'a Container,
}

impl<'a> SessionController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Drive one form instance from `input` until `:quit` or end of input.
    pub async fn run<R, W>(
        &self,
        mode: MediaMode,
        max_tokens: u32,
        input: R,
        output: &mut W,
    ) -> Result<String>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let form = self.container.form_controller(
            RequestState::new(mode).with_output_length_bound(i64::from(max_tokens)),
        );

        output
            .write_all(format!("{HELP}\n\n").as_bytes())
            .await?;
        output.flush().await?;

        let mut submissions = 0usize;
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            let command = match SessionCommand::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    output.write_all(format!("{e}\n").as_bytes()).await?;
                    output.flush().await?;
                    continue;
                }
            };
            debug!("Session command: {command:?}");

            match command {
                SessionCommand::Noop => {}
                SessionCommand::Prompt(text) => {
                    form.update_prompt(text).await;
                    if Self::submit(&form, &mut *output).await? {
                        submissions += 1;
                    }
                }
                SessionCommand::Submit => {
                    if Self::submit(&form, &mut *output).await? {
                        submissions += 1;
                    }
                }
                SessionCommand::Mode(mode) => form.update_mode(mode).await,
                SessionCommand::Tokens(n) => form.update_output_length_bound(n).await,
                SessionCommand::System(text) => form.update_instruction_template(text).await,
                SessionCommand::Show => {
                    let shown = Self::format_form(&form).await;
                    output.write_all(shown.as_bytes()).await?;
                }
                SessionCommand::Copy => {
                    // Outcome is reported through the notifier.
                    let _ = form.copy_result().await;
                }
                SessionCommand::Help => {
                    output.write_all(format!("{HELP}\n").as_bytes()).await?;
                }
                SessionCommand::Quit => break,
            }
            output.flush().await?;
        }

        Ok(format!("Session closed after {submissions} submission(s)."))
    }

    /// Returns whether the submission reached the chat endpoint.
    async fn submit<W: AsyncWrite + Unpin>(
        form: &PromptFormController,
        output: &mut W,
    ) -> Result<bool> {
        // Failures are reported through the notifier.
        match form.submit().await {
            Ok(text) => {
                output.write_all(format!("\n{text}\n\n").as_bytes()).await?;
                Ok(true)
            }
            Err(e) => Ok(!(e.is_validation_error() || e.is_in_flight())),
        }
    }

    async fn format_form(form: &PromptFormController) -> String {
        let state = form.request_state().await;
        format!(
            "Mode:       {}\nMax tokens: {}\nStatus:     {}\nPrompt:     {}\nTemplate:\n{}\n",
            state.mode(),
            state.output_length_bound(),
            form.status().await,
            state.raw_prompt(),
            state.instruction_template().trim_end()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_prompt() {
        assert_eq!(
            SessionCommand::parse("  a cat  ").unwrap(),
            SessionCommand::Prompt("  a cat  ".to_string())
        );
    }

    #[test]
    fn double_colon_escapes_a_leading_colon() {
        assert_eq!(
            SessionCommand::parse("::) a smiling cat").unwrap(),
            SessionCommand::Prompt(":) a smiling cat".to_string())
        );
        assert_eq!(
            SessionCommand::parse("  ::mode is not a command").unwrap(),
            SessionCommand::Prompt("  :mode is not a command".to_string())
        );
    }

    #[test]
    fn blank_line_is_ignored() {
        assert_eq!(SessionCommand::parse("   ").unwrap(), SessionCommand::Noop);
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            SessionCommand::parse(":mode image").unwrap(),
            SessionCommand::Mode(MediaMode::Image)
        );
        assert_eq!(
            SessionCommand::parse(":tokens -5").unwrap(),
            SessionCommand::Tokens(-5)
        );
        assert_eq!(
            SessionCommand::parse(":system Keep it short.").unwrap(),
            SessionCommand::System("Keep it short.".to_string())
        );
        assert_eq!(SessionCommand::parse(":q").unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(SessionCommand::parse(":tokens many").is_err());
        assert!(SessionCommand::parse(":mode audio").is_err());
        assert!(SessionCommand::parse(":frobnicate").is_err());
    }
}
