use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use confdoc::cli;

#[derive(Parser)]
#[command(name = "confdoc", version)]
#[command(about = "Generate configuration and CLI reference data for the docs site", long_about = None)]
struct Cli {
    /// Path to config file (defaults to ./confdoc.toml or ~/.config/confdoc/config.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Home directory output paths are relative to (defaults to the current directory)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate all property tables and command docs (default)
    Generate,
    /// Check the property and command catalogs for missing or misplaced entries
    Check,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match args.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            cli::generate::run(args.config, args.home)?;
        }
        Commands::Check => {
            cli::check::run(args.config, args.home)?;
        }
    }

    Ok(())
}
