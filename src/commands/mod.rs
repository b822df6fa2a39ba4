//! # CLI Command Implementations
//!
//! Each subcommand of the `cascade-fs` tool lives in its own file with an
//! `Args` struct derived using `clap` and an `execute` function that calls
//! into the `cascade_fs` library.

pub mod class;
pub mod completions;
pub mod find;
pub mod roots;

use anyhow::Result;
use std::path::Path;

use cascade_fs::cascade::Cascade;
use cascade_fs::config;

/// Load the configuration file and build the cascade it describes.
///
/// A non-empty `modules` list from the command line replaces the configured
/// module selection.
pub(crate) fn open_cascade(config_path: &Path, modules: &[String]) -> Result<Cascade> {
    if !config_path.exists() {
        return Err(cascade_fs::suggestions::config_not_found(config_path));
    }

    let config = config::from_file(config_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load config from {}: {}",
            config_path.display(),
            e
        )
    })?;

    let mut cascade = Cascade::from_config(&config);
    if modules.is_empty() {
        cascade.activate_modules(&config.modules)?;
    } else {
        cascade.activate(modules)?;
    }
    Ok(cascade)
}
