//! CLI argument parsing and command dispatch

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use cascade_fs::defaults::DEFAULT_CONFIG_FILENAME;

/// Cascading filesystem - resolve resources across application, module and system roots
#[derive(Parser, Debug)]
#[command(name = "cascade-fs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Path to the cascade configuration file
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        env = "CASCADE_CONFIG",
        default_value = DEFAULT_CONFIG_FILENAME
    )]
    config: PathBuf,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a resource to its file path(s)
    Find(commands::find::FindArgs),

    /// Resolve a class name to its resource in the classes category
    Class(commands::class::ClassArgs),

    /// Show the active cascade, highest precedence first
    Roots(commands::roots::RootsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level)?;

        match self.command {
            Commands::Find(args) => commands::find::execute(&self.config, args),
            Commands::Class(args) => commands::class::execute(&self.config, args),
            Commands::Roots(args) => commands::roots::execute(&self.config, args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Configure `env_logger` at `level`; `RUST_LOG` still takes precedence.
fn init_logging(level: &str) -> Result<()> {
    let filter: log::LevelFilter = level
        .parse()
        .map_err(|_| anyhow!("Invalid log level: {level} (expected error, warn, info, debug or trace)"))?;

    // Ignore the error if a logger is already installed
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .try_init();
    Ok(())
}
