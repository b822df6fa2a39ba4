//! Thread-safe handle to a [`Cascade`]
//!
//! Module activation rebuilds the root list in several steps and lookups
//! write the cache, so every operation runs under a single mutex.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::cascade::Cascade;
use crate::error::{Error, Result};
use crate::loader::ResourceLoader;
use crate::modules::ModuleSelection;
use crate::resolver::Resolution;
use crate::roots::RootList;

/// Cloneable, lock-protected cascade shared between threads
#[derive(Debug, Clone)]
pub struct SharedCascade {
    inner: Arc<Mutex<Cascade>>,
}

impl SharedCascade {
    pub fn new(cascade: Cascade) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cascade)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Cascade>> {
        self.inner.lock().map_err(|_| Error::LockPoisoned {
            context: "cascade lock poisoned".to_string(),
        })
    }

    /// Run `f` with exclusive access to the cascade.
    pub fn with<T>(&self, f: impl FnOnce(&mut Cascade) -> T) -> Result<T> {
        let mut cascade = self.lock()?;
        Ok(f(&mut cascade))
    }

    pub fn find(&self, category: &str, name: &str) -> Result<Resolution> {
        self.with(|cascade| cascade.find(category, name))
    }

    pub fn find_resource(
        &self,
        category: &str,
        name: &str,
        extension: &str,
        force_list: bool,
    ) -> Result<Resolution> {
        self.with(|cascade| cascade.find_resource(category, name, extension, force_list))
    }

    pub fn activate_modules(&self, selection: &ModuleSelection) -> Result<()> {
        self.lock()?.activate_modules(selection)
    }

    pub fn load_by_name<L: ResourceLoader>(
        &self,
        identifier: &str,
        loader: &mut L,
    ) -> Result<Option<L::Output>> {
        self.lock()?.load_by_name(identifier, loader)
    }

    pub fn reset_cache(&self) -> Result<()> {
        self.with(Cascade::reset_cache)
    }

    /// Snapshot of the current root list.
    pub fn roots(&self) -> Result<RootList> {
        self.with(|cascade| cascade.roots().clone())
    }
}

impl From<Cascade> for SharedCascade {
    fn from(cascade: Cascade) -> Self {
        Self::new(cascade)
    }
}
