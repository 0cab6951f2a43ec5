//! SkillEval CLI, the main entry point.
//!
//! Commands:
//! - `onboard`   Write the default config
//! - `skills`    List the skill roster
//! - `classify`  Run skill discovery on one prompt
//! - `evaluate`  Run every approach over a JSONL dataset

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "skilleval",
    about = "SkillEval - skill discovery and evaluation for LLM classification agents",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default configuration file
    Onboard,

    /// List the skills found in a skills directory
    Skills {
        /// Skills directory (defaults to `evaluation.skills_dir`, then ./skills)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Run selection, discovery and execution on one prompt
    Classify {
        /// The task text
        #[arg(short, long)]
        prompt: String,

        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Label extractor (sentiment, xbrl_tag, yes_no); defaults to `evaluation.task`
        #[arg(short, long)]
        task: Option<String>,
    },

    /// Evaluate every approach over a JSONL dataset
    Evaluate {
        /// One `{"index"?, "prompt", "label"}` object per line
        #[arg(long)]
        dataset: PathBuf,

        #[arg(short, long)]
        dir: Option<PathBuf>,

        #[arg(short, long)]
        task: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output only
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Onboard => commands::onboard::run().await?,
        Commands::Skills { dir } => commands::skills::run(dir).await?,
        Commands::Classify { prompt, dir, task } => {
            commands::classify::run(prompt, dir, task).await?
        }
        Commands::Evaluate { dataset, dir, task } => {
            commands::evaluate::run(dataset, dir, task).await?
        }
    }

    Ok(())
}
