//! # Path Existence Check
//!
//! The leaf utility that answers "is there a regular file here?". Every
//! filesystem question the resolver asks goes through the [`FileProbe`]
//! trait, which keeps the decision to swallow I/O errors in one place and
//! lets tests count or script probes without touching the disk.

use std::fs;
use std::path::Path;

/// Outcome of probing a path.
///
/// There are deliberately only two cases: permission problems, broken links
/// and missing entries are all [`Probe::DoesNotExist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// A non-directory entry exists at the path
    Exists,
    /// Nothing usable exists at the path
    DoesNotExist,
}

impl Probe {
    /// Returns `true` for [`Probe::Exists`].
    pub fn exists(self) -> bool {
        matches!(self, Probe::Exists)
    }
}

impl From<bool> for Probe {
    fn from(exists: bool) -> Self {
        if exists {
            Probe::Exists
        } else {
            Probe::DoesNotExist
        }
    }
}

/// Trait for filesystem probes - allows counting and mocking in tests
pub trait FileProbe: Send {
    /// Probe for a non-directory entry at `path`.
    fn probe_file(&self, path: &Path) -> Probe;

    /// Returns `true` if `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// The default implementation of `FileProbe`, backed by `std::fs::metadata`.
///
/// Symlinks are followed, so a link to a file counts as a file and a dangling
/// link does not exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn probe_file(&self, path: &Path) -> Probe {
        probe(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }
}

/// Probe `path` on the real filesystem.
pub fn probe(path: &Path) -> Probe {
    match fs::metadata(path) {
        Ok(metadata) => Probe::from(!metadata.is_dir()),
        Err(_) => Probe::DoesNotExist,
    }
}

/// Returns `true` iff `path` exists and is not a directory.
pub fn exists(path: &Path) -> bool {
    probe(path).exists()
}
