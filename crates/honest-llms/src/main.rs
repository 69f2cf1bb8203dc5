//! honest-llms CLI - builds the llms.txt artifacts for the HonestJS docs.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "honest-llms")]
#[command(about = "Build llms.txt, llms-full.txt and llms-small.txt from the docs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to llms.toml config file
    #[arg(short, long, default_value = "llms.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the index and both bundles (default)
    Build,

    /// List discovered documents without writing anything
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let build_config = config::load_config(&cli.config)?.into_build_config();

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            commands::build::run(build_config).await?;
        }
        Commands::List => {
            commands::list::run(build_config)?;
        }
    }

    Ok(())
}
