//! # Completions Command Implementation
//!
//! Writes a `clap_complete` completion script for the chosen shell to stdout:
//!
//! ```bash
//! cascade-fs completions bash > ~/.local/share/bash-completion/completions/cascade-fs
//! cascade-fs completions zsh > ~/.zfunc/_cascade-fs
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for (bash, zsh, fish, powershell, elvish)
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
