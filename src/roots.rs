//! Cascade roots: the fixed directories and the ordered search list

use std::fmt;
use std::path::{Path, PathBuf};

/// The four directories a cascade is initialized with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRoots {
    /// Application root, highest precedence
    pub app: PathBuf,
    /// Directory holding one subdirectory per module
    pub modules: PathBuf,
    /// System root, the final fallback
    pub system: PathBuf,
    /// Document root; carried for callers, never searched
    pub doc: PathBuf,
}

impl FixedRoots {
    pub fn new(
        app: impl Into<PathBuf>,
        modules: impl Into<PathBuf>,
        system: impl Into<PathBuf>,
        doc: impl Into<PathBuf>,
    ) -> Self {
        Self {
            app: app.into(),
            modules: modules.into(),
            system: system.into(),
            doc: doc.into(),
        }
    }

    /// Directory of the module called `name`, always inside the module root.
    pub fn module_dir(&self, name: &str) -> PathBuf {
        join_under(&self.modules, name)
    }

    /// Classify a cascade entry against the fixed roots.
    pub fn role_of(&self, root: &Path) -> RootRole {
        if root == self.app {
            RootRole::Application
        } else if root == self.system {
            RootRole::System
        } else {
            RootRole::Module
        }
    }
}

/// Append `relative` to `root` without letting it escape.
///
/// Leading separators are dropped so an absolute-looking `relative` is still
/// taken as a path below `root`.
pub(crate) fn join_under(root: &Path, relative: &str) -> PathBuf {
    root.join(relative.trim_start_matches(['/', '\\']))
}

/// What part a directory plays in the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootRole {
    Application,
    Module,
    System,
}

impl fmt::Display for RootRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RootRole::Application => "application",
            RootRole::Module => "module",
            RootRole::System => "system",
        };
        f.write_str(label)
    }
}

/// Ordered list of directories searched for resources.
///
/// Index 0 has the highest precedence. The list is only ever replaced as a
/// whole; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootList {
    roots: Vec<PathBuf>,
}

impl RootList {
    /// `[app, system]`, the list every cascade starts from.
    pub fn base(fixed: &FixedRoots) -> Self {
        Self {
            roots: vec![fixed.app.clone(), fixed.system.clone()],
        }
    }

    pub fn from_vec(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Roots in precedence order, highest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PathBuf> + ExactSizeIterator {
        self.roots.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl<'a> IntoIterator for &'a RootList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}
