use std::path::PathBuf;

use clap::Subcommand;

use crate::domain::{MediaMode, DEFAULT_OUTPUT_LENGTH_BOUND};

#[derive(Subcommand)]
pub enum Commands {
    /// Enhance a single prompt and print the result
    Enhance {
        prompt: String,

        /// Target media type: image or video
        #[arg(short, long, default_value = "video")]
        mode: MediaMode,

        /// Maximum number of tokens in the enhanced prompt
        #[arg(long, default_value_t = DEFAULT_OUTPUT_LENGTH_BOUND, value_parser = clap::value_parser!(u32).range(1..=2000))]
        max_tokens: u32,

        /// Read the instruction template from a file instead of generating it
        #[arg(short, long)]
        system_file: Option<PathBuf>,

        /// Copy the enhanced prompt to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Print the instruction template generated for a mode
    Template {
        #[arg(short, long, default_value = "video")]
        mode: MediaMode,
    },

    /// Keep a form open and edit it line by line (`:help` lists commands)
    Interactive {
        #[arg(short, long, default_value = "video")]
        mode: MediaMode,

        #[arg(long, default_value_t = DEFAULT_OUTPUT_LENGTH_BOUND, value_parser = clap::value_parser!(u32).range(1..=2000))]
        max_tokens: u32,
    },
}
