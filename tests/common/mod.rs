//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture that lays out a cascade on disk
//! (`application/`, `modules/`, `system/`, `public/`) plus helpers for
//! building a [`Cascade`] or a CLI command over it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_file("application/views/index.js", "");
//!     let mut cascade = fixture.cascade();
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use cascade_fs::cascade::Cascade;
use cascade_fs::probe::{FileProbe, FsProbe, Probe};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    #[allow(unused_imports)]
    pub use super::CountingProbe;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Relative roots matching the fixture layout.
    pub const STANDARD: &str = r#"
application: application
modules_root: modules
system: system
document_root: public
"#;

    /// Standard layout with the auth and stats modules active.
    pub const WITH_MODULES: &str = r#"
application: application
modules_root: modules
system: system
document_root: public
modules: [auth, stats]
"#;

    /// A bare string where a module list belongs.
    pub const SCALAR_MODULES: &str = r#"
application: application
modules_root: modules
system: system
modules: auth
"#;

    /// Missing the required system root.
    pub const MISSING_SYSTEM: &str = r#"
application: application
modules_root: modules
"#;
}

/// Probe that delegates to the real filesystem and counts every call.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct CountingProbe {
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl CountingProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FileProbe for CountingProbe {
    fn probe_file(&self, path: &Path) -> Probe {
        self.calls.fetch_add(1, Ordering::SeqCst);
        FsProbe.probe_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        FsProbe.is_dir(path)
    }
}

/// A temporary cascade layout on disk.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_config(configs::STANDARD)
///     .with_file("system/views/index.js", "");
///
/// fixture.command().args(["find", "views", "index"]).assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a fixture with empty application, modules, system and public
    /// directories.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        for dir in ["application", "modules", "system", "public"] {
            temp_dir
                .child(dir)
                .create_dir_all()
                .expect("Failed to create root directory");
        }
        Self { temp_dir }
    }

    /// Add a `.cascade.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".cascade.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add an empty module directory.
    pub fn with_module(self, name: &str) -> Self {
        self.temp_dir
            .child("modules")
            .child(name)
            .create_dir_all()
            .expect("Failed to create module directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the fixture.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.temp_dir.path().join(rel)
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.join(".cascade.yaml")
    }

    /// Write a file after the fixture has been built.
    pub fn write(&self, path: &str, content: &str) {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
    }

    /// A cascade over the fixture's roots.
    pub fn cascade(&self) -> Cascade {
        Cascade::initialize(
            self.join("application"),
            self.join("modules"),
            self.join("system"),
            self.join("public"),
        )
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cascade-fs");
        cmd.current_dir(self.path())
            .env_remove("CASCADE_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
