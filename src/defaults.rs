//! Default values for cascade-fs configuration.
//!
//! This module provides centralized default values used by the resolver,
//! the configuration parser and the CLI, ensuring consistency and avoiding
//! duplication.

/// Default configuration filename looked up by the CLI.
///
/// This can be overridden by the `--config` CLI flag or the
/// `CASCADE_CONFIG` environment variable.
pub const DEFAULT_CONFIG_FILENAME: &str = ".cascade.yaml";

/// Extension used when a lookup does not name one.
pub const DEFAULT_EXTENSION: &str = "js";

/// Categories whose lookups always return every matching root.
///
/// Configuration, translations and messages, in that order.
pub const DEFAULT_MERGEABLE_CATEGORIES: &[&str] = &["config", "i18n", "messages"];

/// Category searched by class-name lookups.
pub const CLASSES_CATEGORY: &str = "classes";

/// Delimiter in class names that maps to a path separator.
pub const DEFAULT_CLASS_DELIMITER: char = '_';

/// File stem of a module's initialization script (`init.<ext>`).
pub const MODULE_INIT_STEM: &str = "init";
