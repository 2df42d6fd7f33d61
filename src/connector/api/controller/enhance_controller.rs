use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::domain::{MediaMode, RequestState};

use super::super::Container;

pub struct EnhanceController<'a> {
    container: &'a Container,
}

impl<'a> EnhanceController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Submit one prompt and write the result to `output` before copying it,
    /// since copying may block until the clipboard is taken over.
    pub async fn enhance<W: AsyncWrite + Unpin>(
        &self,
        prompt: String,
        mode: MediaMode,
        max_tokens: u32,
        system_file: Option<PathBuf>,
        copy: bool,
        output: &mut W,
    ) -> Result<String> {
        let mut state = RequestState::new(mode)
            .with_prompt(prompt)
            .with_output_length_bound(i64::from(max_tokens));

        if let Some(path) = system_file {
            let template = tokio::fs::read_to_string(&path).await.with_context(|| {
                format!("Failed to read instruction template from {}", path.display())
            })?;
            state.set_instruction_template(template);
        }

        let form = self.container.form_controller(state);

        // The notifier has already told the user what went wrong; details are in the log.
        let text = form
            .submit()
            .await
            .map_err(|_| anyhow!("Prompt enhancement failed"))?;

        output.write_all(format!("{text}\n").as_bytes()).await?;
        output.flush().await?;

        if copy {
            // A failed copy is reported by its own notification and does not fail the command.
            let _ = form.copy_result().await;
        }

        Ok(String::new())
    }
}
