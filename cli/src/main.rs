mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_generate, Cli, Commands};
use lpgen_config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Generate {
            prompt,
            user,
            mermaid,
            json,
            save,
            raw,
        } => {
            handle_generate(&config, &prompt, user.as_deref(), mermaid, json, save, raw).await?;
        }
        Commands::Tui => {
            tui::run_tui(config).await?;
        }
    }

    Ok(())
}
