//! # Find Command Implementation
//!
//! This module implements the `find` subcommand, which resolves a resource
//! through the cascade and prints the resulting path or paths.
//!
//! Mergeable categories (and lookups with `--list`) print every matching file,
//! lowest precedence first, one per line. Other lookups print the single
//! highest-precedence match. A miss exits with an error that lists the roots
//! searched.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use cascade_fs::cache::ResolutionKey;

/// Resolve a resource to its file path(s)
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Resource category (views, config, classes, i18n, messages, ...)
    pub category: String,

    /// Resource name relative to the category, without extension (e.g. css/style)
    pub name: String,

    /// File extension to search for; defaults to the configured extension
    #[arg(short, long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Return every matching root instead of the highest-precedence one
    #[arg(short, long)]
    pub list: bool,

    /// Activate these modules instead of the configured ones (repeatable)
    #[arg(short, long = "module", value_name = "NAME")]
    pub modules: Vec<String>,

    /// Print the resolution as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the `find` command.
pub fn execute(config_path: &Path, args: FindArgs) -> Result<()> {
    let mut cascade = super::open_cascade(config_path, &args.modules)?;

    let extension = args
        .ext
        .as_deref()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .unwrap_or_else(|| cascade.default_extension().to_string());

    let resolution = cascade.find_resource(&args.category, &args.name, &extension, args.list);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        for path in resolution.paths() {
            println!("{}", path.display());
        }
    }

    if resolution.is_found() {
        return Ok(());
    }

    let key = ResolutionKey::new(&args.category, &args.name, &extension);
    let searched: Vec<&Path> = cascade.roots().iter().map(PathBuf::as_path).collect();
    Err(cascade_fs::suggestions::resource_not_found(
        key.as_str(),
        &searched,
    ))
}
