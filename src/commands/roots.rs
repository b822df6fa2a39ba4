//! # Roots Command Implementation
//!
//! Prints the effective cascade, highest precedence first. Each entry is
//! labelled with its role so it is easy to see which modules made it in;
//! modules whose directory is missing are silently absent.

use anyhow::Result;
use clap::Args;
use std::path::Path;

/// Show the active cascade, highest precedence first
#[derive(Args, Debug)]
pub struct RootsArgs {
    /// Activate these modules instead of the configured ones (repeatable)
    #[arg(short, long = "module", value_name = "NAME")]
    pub modules: Vec<String>,
}

/// Execute the `roots` command.
pub fn execute(config_path: &Path, args: RootsArgs) -> Result<()> {
    let cascade = super::open_cascade(config_path, &args.modules)?;
    let fixed = cascade.fixed_roots();

    println!("Cascade (highest precedence first):");
    for (index, root) in cascade.roots().iter().enumerate() {
        println!(
            "  {:>2}. {:<11} {}",
            index + 1,
            fixed.role_of(root).to_string(),
            root.display()
        );
    }
    println!();
    println!("Document root: {}", cascade.doc_root().display());

    Ok(())
}
