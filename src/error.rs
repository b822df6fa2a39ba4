//! # Error Handling
//!
//! This module defines the centralized error type for `cascade-fs`. It uses
//! the `thiserror` library to describe the few operations around the resolver
//! that can actually fail.
//!
//! Resolution itself never fails: a missing resource is an ordinary
//! [`Resolution::NotFound`](crate::resolver::Resolution) value and probe
//! errors are folded into "does not exist" at the probe boundary. The
//! variants below cover the ambient surface instead:
//!
//! - Configuration file loading and parsing.
//! - Module initializer collaborators reporting a failure.
//! - Resource loader collaborators reporting a failure.
//! - Lock poisoning in [`SharedCascade`](crate::shared::SharedCascade).
//! - I/O and YAML errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cascade-fs operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing the `.cascade.yaml` configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// A module's init script was found but its initializer failed.
    #[error("Module initialization error: {module} - {message}")]
    ModuleInit { module: String, message: String },

    /// A resolved resource could not be loaded by the loader collaborator.
    #[error("Resource load error: {} - {message}", path.display())]
    Load { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error indicating that a mutex or other lock has been poisoned.
    #[error("Lock poisoned: {context}")]
    LockPoisoned { context: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
