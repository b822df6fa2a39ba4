//! # Resource Resolver
//!
//! The search at the heart of the cascade. Given a [`ResolutionKey`] and the
//! current [`RootList`], a lookup runs in one of two modes:
//!
//! - **Single**: roots are walked in precedence order and the first root that
//!   holds the file wins. Probing stops at the first hit.
//! - **List**: roots are walked in reverse, lowest precedence first, and every
//!   hit is collected. A caller merging the files in list order lets the
//!   higher-precedence roots override the lower ones.
//!
//! List mode is chosen when the caller forces it or when the category is in
//! the [`MergeableCategories`] set. Memoization lives one level up, in
//! [`Cascade::find_resource`](crate::cascade::Cascade::find_resource).

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::cache::ResolutionKey;
use crate::defaults::DEFAULT_MERGEABLE_CATEGORIES;
use crate::probe::FileProbe;
use crate::roots::{join_under, RootList};

/// The answer to a resource lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "paths", rename_all = "snake_case")]
pub enum Resolution {
    /// Single-mode hit: the highest-precedence match
    Found(PathBuf),
    /// List-mode answer, lowest precedence first; empty on a miss
    List(Vec<PathBuf>),
    /// Single-mode miss
    NotFound,
}

impl Resolution {
    /// `true` for a single hit or a non-empty list.
    pub fn is_found(&self) -> bool {
        match self {
            Resolution::Found(_) => true,
            Resolution::List(paths) => !paths.is_empty(),
            Resolution::NotFound => false,
        }
    }

    /// The winning path of a single-mode lookup.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Resolution::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Every path in the answer, in the order the answer holds them.
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            Resolution::Found(path) => vec![path.as_path()],
            Resolution::List(paths) => paths.iter().map(PathBuf::as_path).collect(),
            Resolution::NotFound => Vec::new(),
        }
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            Resolution::Found(path) => vec![path],
            Resolution::List(paths) => paths,
            Resolution::NotFound => Vec::new(),
        }
    }
}

/// How the root list is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Single,
    List,
}

/// Categories whose lookups always return every matching root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeableCategories {
    categories: BTreeSet<String>,
}

impl MergeableCategories {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    pub fn insert(&mut self, category: impl Into<String>) {
        self.categories.insert(category.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Pick the search mode for a lookup in `category`.
    pub fn search_mode(&self, category: &str, force_list: bool) -> SearchMode {
        if force_list || self.contains(category) {
            SearchMode::List
        } else {
            SearchMode::Single
        }
    }
}

impl Default for MergeableCategories {
    fn default() -> Self {
        Self::new(DEFAULT_MERGEABLE_CATEGORIES.iter().copied())
    }
}

/// Search `roots` for `key` without consulting any cache.
pub fn resolve(
    roots: &RootList,
    key: &ResolutionKey,
    mode: SearchMode,
    probe: &dyn FileProbe,
) -> Resolution {
    match mode {
        SearchMode::List => {
            let found = roots
                .iter()
                .rev()
                .map(|root| join_under(root, key.as_str()))
                .filter(|candidate| probe.probe_file(candidate).exists())
                .collect();
            Resolution::List(found)
        }
        SearchMode::Single => roots
            .iter()
            .map(|root| join_under(root, key.as_str()))
            .find(|candidate| probe.probe_file(candidate).exists())
            .map_or(Resolution::NotFound, Resolution::Found),
    }
}
