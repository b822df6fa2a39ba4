//! # The Cascade
//!
//! [`Cascade`] owns everything a lookup depends on: the fixed roots, the
//! current root list, the resolution cache, the mergeable-category set and
//! the two collaborators (the [`FileProbe`] used for every filesystem
//! question and the [`ModuleInitializer`] that runs module init scripts).
//!
//! ## Lifecycle
//!
//! - [`Cascade::initialize`] (or [`Cascade::reinitialize`]) sets the fixed
//!   roots, resets the root list to `[app, system]` and empties the cache.
//! - [`Cascade::activate_modules`] rebuilds the root list but keeps the cache.
//!   Answers cached before activation are still returned afterward; call
//!   [`Cascade::reset_cache`] to drop them.
//! - [`Cascade::find_resource`] memoizes every answer, misses included, for
//!   as long as the cache lives.
//!
//! ```
//! use cascade_fs::cascade::Cascade;
//!
//! let mut cascade = Cascade::initialize("/srv/app", "/srv/modules", "/srv/system", "/srv/public");
//! assert_eq!(cascade.roots().len(), 2);
//! assert!(!cascade.find("views", "template").is_found());
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use crate::cache::{ResolutionCache, ResolutionKey};
use crate::config::CascadeConfig;
use crate::defaults::{CLASSES_CATEGORY, DEFAULT_CLASS_DELIMITER, DEFAULT_EXTENSION};
use crate::error::Result;
use crate::loader::{class_resource_name, ResourceLoader};
use crate::modules::{self, ModuleInitializer, ModuleSelection, NoopInitializer};
use crate::probe::{FileProbe, FsProbe};
use crate::resolver::{self, MergeableCategories, Resolution};
use crate::roots::{FixedRoots, RootList};

/// Resolver state: roots, cache and collaborators.
pub struct Cascade {
    fixed: FixedRoots,
    roots: RootList,
    cache: ResolutionCache,
    mergeable: MergeableCategories,
    extension: String,
    class_delimiter: char,
    probe: Box<dyn FileProbe>,
    initializer: Box<dyn ModuleInitializer>,
}

impl Cascade {
    /// Create a cascade searching `[app_root, system_root]`.
    ///
    /// Uses the real filesystem and a no-op module initializer; swap them
    /// with [`Cascade::with_probe`] and [`Cascade::with_initializer`].
    pub fn initialize(
        app_root: impl Into<PathBuf>,
        module_root: impl Into<PathBuf>,
        system_root: impl Into<PathBuf>,
        doc_root: impl Into<PathBuf>,
    ) -> Self {
        Self::with_fixed_roots(FixedRoots::new(app_root, module_root, system_root, doc_root))
    }

    pub fn with_fixed_roots(fixed: FixedRoots) -> Self {
        let roots = RootList::base(&fixed);
        log::debug!(
            "cascade initialized: app={} modules={} system={}",
            fixed.app.display(),
            fixed.modules.display(),
            fixed.system.display()
        );
        Self {
            fixed,
            roots,
            cache: ResolutionCache::new(),
            mergeable: MergeableCategories::default(),
            extension: DEFAULT_EXTENSION.to_string(),
            class_delimiter: DEFAULT_CLASS_DELIMITER,
            probe: Box::new(FsProbe),
            initializer: Box::new(NoopInitializer),
        }
    }

    /// Build a cascade from a parsed configuration file.
    ///
    /// The configured module selection is not activated here; pass
    /// `&config.modules` to [`Cascade::activate_modules`] once the
    /// initializer is in place.
    pub fn from_config(config: &CascadeConfig) -> Self {
        Self::with_fixed_roots(config.roots.clone())
            .with_mergeable(config.mergeable.clone())
            .with_default_extension(config.extension.clone())
            .with_class_delimiter(config.class_delimiter)
    }

    /// Replace the filesystem probe.
    pub fn with_probe(mut self, probe: impl FileProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Replace the module init-script collaborator.
    pub fn with_initializer(mut self, initializer: impl ModuleInitializer + 'static) -> Self {
        self.initializer = Box::new(initializer);
        self
    }

    pub fn with_mergeable(mut self, mergeable: MergeableCategories) -> Self {
        self.mergeable = mergeable;
        self
    }

    /// Extension used by [`Cascade::find`], class lookups and module init scripts.
    pub fn with_default_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_class_delimiter(mut self, delimiter: char) -> Self {
        self.class_delimiter = delimiter;
        self
    }

    /// Re-establish the starting state with new fixed roots.
    ///
    /// The root list goes back to `[app_root, system_root]` and every cached
    /// answer is discarded. Collaborators and settings are kept.
    pub fn reinitialize(
        &mut self,
        app_root: impl Into<PathBuf>,
        module_root: impl Into<PathBuf>,
        system_root: impl Into<PathBuf>,
        doc_root: impl Into<PathBuf>,
    ) {
        self.fixed = FixedRoots::new(app_root, module_root, system_root, doc_root);
        self.roots = RootList::base(&self.fixed);
        self.cache.clear();
    }

    pub fn roots(&self) -> &RootList {
        &self.roots
    }

    pub fn fixed_roots(&self) -> &FixedRoots {
        &self.fixed
    }

    pub fn doc_root(&self) -> &Path {
        &self.fixed.doc
    }

    pub fn mergeable(&self) -> &MergeableCategories {
        &self.mergeable
    }

    pub fn default_extension(&self) -> &str {
        &self.extension
    }

    pub fn class_delimiter(&self) -> char {
        self.class_delimiter
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// Forget every cached answer without touching the roots.
    pub fn reset_cache(&mut self) {
        log::debug!("dropping {} cached resolutions", self.cache.len());
        self.cache.clear();
    }

    /// Rebuild the root list from a module selection.
    ///
    /// `Absent`, `Scalar` and empty-list selections leave the cascade
    /// untouched. Any other list replaces the roots with
    /// `[app, modules..., system]`. The cache is kept either way.
    pub fn activate_modules(&mut self, selection: &ModuleSelection) -> Result<()> {
        match selection {
            ModuleSelection::Absent => Ok(()),
            ModuleSelection::List(names) if names.is_empty() => Ok(()),
            ModuleSelection::Scalar(value) => {
                log::warn!("ignoring module selection {value:?}: expected a list of module names");
                Ok(())
            }
            ModuleSelection::List(names) => self.activate(names),
        }
    }

    /// Activate `names` in order; see [`Cascade::activate_modules`].
    pub fn activate<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        if names.is_empty() {
            return Ok(());
        }
        let roots = modules::rebuild_roots(
            &self.fixed,
            names,
            &self.extension,
            &*self.probe,
            &mut *self.initializer,
        )?;
        log::debug!("cascade now has {} roots", roots.len());
        self.roots = roots;
        Ok(())
    }

    /// Find `category/name` with the default extension.
    pub fn find(&mut self, category: &str, name: &str) -> Resolution {
        let extension = self.extension.clone();
        self.find_resource(category, name, &extension, false)
    }

    /// Find `category/name.extension` in the cascade.
    ///
    /// Mergeable categories, or any category when `force_list` is set, return
    /// [`Resolution::List`] with every match, lowest precedence first. Other
    /// lookups return the highest-precedence [`Resolution::Found`] or
    /// [`Resolution::NotFound`].
    ///
    /// Results are cached by `category/name.extension` alone, so a repeated
    /// key returns the first answer even if `force_list` differs, the roots
    /// changed, or the file appeared on disk since.
    pub fn find_resource(
        &mut self,
        category: &str,
        name: &str,
        extension: &str,
        force_list: bool,
    ) -> Resolution {
        let key = ResolutionKey::new(category, name, extension);
        let mode = self.mergeable.search_mode(category, force_list);
        let roots = &self.roots;
        let probe = &*self.probe;

        self.cache.get_or_resolve(key, |key| {
            let result = resolver::resolve(roots, key, mode, probe);
            log::debug!("resolved {key} ({mode:?}): {result:?}");
            result
        })
    }

    /// Look up the resource backing a class name.
    pub fn find_class(&mut self, identifier: &str) -> Resolution {
        let name = class_resource_name(identifier, self.class_delimiter);
        self.find(CLASSES_CATEGORY, &name)
    }

    /// Resolve a class name and hand the file to `loader`.
    ///
    /// Returns `Ok(None)` when no root holds the class.
    pub fn load_by_name<L: ResourceLoader>(
        &mut self,
        identifier: &str,
        loader: &mut L,
    ) -> Result<Option<L::Output>> {
        match self.find_class(identifier) {
            Resolution::Found(path) => loader.load(&path).map(Some),
            _ => Ok(None),
        }
    }
}

impl fmt::Debug for Cascade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cascade")
            .field("fixed", &self.fixed)
            .field("roots", &self.roots)
            .field("cached", &self.cache.len())
            .field("mergeable", &self.mergeable)
            .field("extension", &self.extension)
            .field("class_delimiter", &self.class_delimiter)
            .finish_non_exhaustive()
    }
}
