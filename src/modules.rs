//! # Module Activation
//!
//! Modules are directories under the module root that slot into the cascade
//! between the application root and the system root. Activating a list of
//! modules rebuilds the root list from scratch (an empty list is handled by
//! the caller and changes nothing):
//!
//! 1. Start with `[app]`.
//! 2. For each name, in order, append `module_root/name` if it is a directory.
//!    If that directory also holds `init.<ext>`, hand the script to the
//!    [`ModuleInitializer`] before moving on to the next name.
//! 3. Append `system`.
//!
//! Names whose directory is missing are skipped without error. Activation
//! never touches the resolution cache.

use std::collections::HashSet;
use std::path::Path;

use crate::defaults::MODULE_INIT_STEM;
use crate::error::Result;
use crate::probe::FileProbe;
use crate::roots::{FixedRoots, RootList};

/// The module list handed to activation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModuleSelection {
    /// No module list was given
    #[default]
    Absent,
    /// A single value where a list was expected, such as `modules: auth`
    Scalar(String),
    /// An ordered list of module names, possibly empty
    List(Vec<String>),
}

impl ModuleSelection {
    pub fn list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ModuleSelection::List(names.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for ModuleSelection {
    fn from(names: Vec<String>) -> Self {
        ModuleSelection::List(names)
    }
}

/// Collaborator that runs a module's init script.
///
/// Called synchronously, exactly once per module per activation, with the
/// module name and the absolute path of its `init.<ext>` file.
pub trait ModuleInitializer: Send {
    fn initialize(&mut self, module: &str, script: &Path) -> Result<()>;
}

impl<F> ModuleInitializer for F
where
    F: FnMut(&str, &Path) -> Result<()> + Send,
{
    fn initialize(&mut self, module: &str, script: &Path) -> Result<()> {
        self(module, script)
    }
}

/// Initializer that only records the script in the debug log.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInitializer;

impl ModuleInitializer for NoopInitializer {
    fn initialize(&mut self, module: &str, script: &Path) -> Result<()> {
        log::debug!("module {module} has init script {}", script.display());
        Ok(())
    }
}

/// Build the root list for `names`, running init scripts along the way.
///
/// The returned list is only installed by the caller once every module has
/// been processed, so an initializer error leaves the previous cascade alone.
pub(crate) fn rebuild_roots<S: AsRef<str>>(
    fixed: &FixedRoots,
    names: &[S],
    extension: &str,
    probe: &dyn FileProbe,
    initializer: &mut dyn ModuleInitializer,
) -> Result<RootList> {
    let mut roots = Vec::with_capacity(names.len() + 2);
    roots.push(fixed.app.clone());

    let mut initialized: HashSet<&str> = HashSet::new();
    for name in names {
        let name = name.as_ref();
        let module_dir = fixed.module_dir(name);
        if !probe.is_dir(&module_dir) {
            log::debug!(
                "skipping module {name}: {} is not a directory",
                module_dir.display()
            );
            continue;
        }

        let script = module_dir.join(format!("{MODULE_INIT_STEM}.{extension}"));
        roots.push(module_dir);

        if initialized.contains(name) {
            continue;
        }
        if probe.probe_file(&script).exists() {
            initialized.insert(name);
            initializer.initialize(name, &script)?;
        }
    }

    roots.push(fixed.system.clone());
    Ok(RootList::from_vec(roots))
}
