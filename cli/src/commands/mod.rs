pub mod generate;

pub use generate::handle_generate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lpgen")]
#[command(about = "Generate and explore structured learning paths", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a learning path for a free-text goal
    Generate {
        /// What you want to learn
        prompt: String,

        /// User identifier sent with the request
        #[arg(long)]
        user: Option<String>,

        /// Print the roadmap flowchart (mermaid)
        #[arg(long)]
        mermaid: bool,

        /// Print the raw learning path JSON instead of the summary
        #[arg(long)]
        json: bool,

        /// Persist the generated path
        #[arg(long)]
        save: bool,

        /// On format errors, dump the retained raw response
        #[arg(long)]
        raw: bool,
    },
    /// Launch the interactive roadmap TUI
    Tui,
}
