use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use prompt_enhancer::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "prompt-enhancer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer locally instead of calling the chat endpoint
    #[arg(long, global = true)]
    mock_llm: bool,

    /// Keep copies in memory instead of using the system clipboard
    #[arg(long, global = true)]
    no_clipboard: bool,

    /// Model identifier (overrides OPENAI_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Endpoint base URL (overrides OPENAI_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// One-shot commands that copy must keep the clipboard alive past exit.
fn copies_then_exits(command: &Commands) -> bool {
    matches!(command, Commands::Enhance { copy: true, .. })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ContainerConfig::from_env();
    config.mock_llm = cli.mock_llm;
    config.no_clipboard = cli.no_clipboard;
    config.hold_clipboard = copies_then_exits(&cli.command);
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let container = Container::new(config);
    let router = Router::new(&container);

    let output = router.route(cli.command).await?;
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
