//! # Cascading Filesystem CLI
//!
//! This is the binary entry point for the `cascade-fs` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging from `--log-level`.
//! - Executing the appropriate command and translating errors into
//!   user-friendly output.
//!
//! The resolver itself lives in the `lib.rs` library crate; the binary is a
//! thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
