//! # Class Command Implementation
//!
//! Maps a class name onto the `classes` category (`Model_User` becomes
//! `classes/model/user.<ext>`) and prints the resolved file, or its contents
//! with `--show`.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use cascade_fs::cache::ResolutionKey;
use cascade_fs::defaults::CLASSES_CATEGORY;
use cascade_fs::loader::{class_resource_name, ContentLoader};
use cascade_fs::resolver::Resolution;

/// Resolve a class name to its resource in the classes category
#[derive(Args, Debug)]
pub struct ClassArgs {
    /// Class name, e.g. Model_User
    pub identifier: String,

    /// Print the file contents instead of its path
    #[arg(short, long)]
    pub show: bool,

    /// Activate these modules instead of the configured ones (repeatable)
    #[arg(short, long = "module", value_name = "NAME")]
    pub modules: Vec<String>,
}

/// Execute the `class` command.
pub fn execute(config_path: &Path, args: ClassArgs) -> Result<()> {
    let mut cascade = super::open_cascade(config_path, &args.modules)?;

    let found = if args.show {
        match cascade.load_by_name(&args.identifier, &mut ContentLoader)? {
            Some(content) => {
                print!("{content}");
                true
            }
            None => false,
        }
    } else {
        match cascade.find_class(&args.identifier) {
            Resolution::Found(path) => {
                println!("{}", path.display());
                true
            }
            _ => false,
        }
    };

    if found {
        return Ok(());
    }

    let name = class_resource_name(&args.identifier, cascade.class_delimiter());
    let key = ResolutionKey::new(CLASSES_CATEGORY, &name, cascade.default_extension());
    Err(cascade_fs::suggestions::class_not_found(
        &args.identifier,
        key.as_str(),
    ))
}
