use anyhow::Result;
use tokio::io::BufReader;

use crate::Commands;

use super::container::Container;
use super::controller::{EnhanceController, SessionController, TemplateController};

pub struct Router<'a> {
    enhance_controller: EnhanceController<'a>,
    template_controller: TemplateController,
    session_controller: SessionController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            enhance_controller: EnhanceController::new(container),
            template_controller: TemplateController::new(),
            session_controller: SessionController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Enhance {
                prompt,
                mode,
                max_tokens,
                system_file,
                copy,
            } => {
                let mut output = tokio::io::stdout();
                self.enhance_controller
                    .enhance(prompt, mode, max_tokens, system_file, copy, &mut output)
                    .await
            }
            Commands::Template { mode } => self.template_controller.template(mode),
            Commands::Interactive { mode, max_tokens } => {
                let input = BufReader::new(tokio::io::stdin());
                let mut output = tokio::io::stdout();
                self.session_controller
                    .run(mode, max_tokens, input, &mut output)
                    .await
            }
        }
    }
}
