//! # Cascade Configuration File
//!
//! This module defines the `.cascade.yaml` file that describes a cascade for
//! the CLI and for hosts that prefer configuration over code:
//!
//! ```yaml
//! application: application
//! modules_root: modules
//! system: system
//! document_root: public
//! modules: [auth, stats]
//! extension: js
//! mergeable: [config, i18n, messages]
//! class_delimiter: "_"
//! ```
//!
//! Only the three search roots are required. `modules` may be a list or, as
//! a tolerated mistake, a single string; the latter parses as
//! [`ModuleSelection::Scalar`] and activating it does nothing. Relative paths
//! in a file loaded with [`from_file`] are resolved against the directory
//! containing the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::defaults::{DEFAULT_CLASS_DELIMITER, DEFAULT_EXTENSION};
use crate::error::{Error, Result};
use crate::modules::ModuleSelection;
use crate::resolver::MergeableCategories;
use crate::roots::FixedRoots;

/// A parsed cascade configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeConfig {
    /// Application, module, system and document roots
    pub roots: FixedRoots,
    /// Modules to activate after initialization
    pub modules: ModuleSelection,
    /// Default resource extension, without the dot
    pub extension: String,
    /// Categories resolved in list mode
    pub mergeable: MergeableCategories,
    /// Class-name delimiter mapped to a path separator
    pub class_delimiter: char,
}

impl CascadeConfig {
    /// Resolve relative roots against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        let rebase = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        rebase(&mut self.roots.app);
        rebase(&mut self.roots.modules);
        rebase(&mut self.roots.system);
        rebase(&mut self.roots.doc);
        self
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    application: PathBuf,
    modules_root: PathBuf,
    system: PathBuf,
    #[serde(default)]
    document_root: Option<PathBuf>,
    #[serde(default)]
    modules: Option<RawModules>,
    #[serde(default)]
    extension: Option<String>,
    #[serde(default)]
    mergeable: Option<Vec<String>>,
    #[serde(default)]
    class_delimiter: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawModules {
    List(Vec<String>),
    Scalar(serde_yaml::Value),
}

impl From<RawModules> for ModuleSelection {
    fn from(raw: RawModules) -> Self {
        match raw {
            RawModules::List(names) => ModuleSelection::List(names),
            RawModules::Scalar(value) => ModuleSelection::Scalar(scalar_to_string(&value)),
        }
    }
}

fn scalar_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

/// Parses a YAML string into a `CascadeConfig`.
///
/// Relative paths are returned as written; see [`CascadeConfig::relative_to`].
pub fn parse(yaml_content: &str) -> Result<CascadeConfig> {
    let raw: RawConfig = serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some("application, modules_root and system are required keys".to_string()),
    })?;

    let extension = match raw.extension {
        Some(ext) => normalize_extension(&ext)?,
        None => DEFAULT_EXTENSION.to_string(),
    };

    let class_delimiter = match raw.class_delimiter {
        Some(delimiter) => single_char(&delimiter)?,
        None => DEFAULT_CLASS_DELIMITER,
    };

    let mergeable = raw
        .mergeable
        .map(MergeableCategories::new)
        .unwrap_or_default();

    let document_root = raw
        .document_root
        .unwrap_or_else(|| raw.application.clone());

    Ok(CascadeConfig {
        roots: FixedRoots::new(raw.application, raw.modules_root, raw.system, document_root),
        modules: raw.modules.map(ModuleSelection::from).unwrap_or_default(),
        extension,
        mergeable,
        class_delimiter,
    })
}

fn normalize_extension(extension: &str) -> Result<String> {
    let trimmed = extension.trim_start_matches('.');
    if trimmed.is_empty() {
        return Err(Error::ConfigParse {
            message: "extension must not be empty".to_string(),
            hint: Some("Use a value such as \"js\"".to_string()),
        });
    }
    Ok(trimmed.to_string())
}

fn single_char(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::ConfigParse {
            message: format!("class_delimiter must be a single character, got {value:?}"),
            hint: Some("Use a value such as \"_\"".to_string()),
        }),
    }
}

/// Parse a `CascadeConfig` from a YAML file path
///
/// Relative roots are resolved against the file's parent directory.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CascadeConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(parse(&content)?.relative_to(base))
}
