//! # Cascading Filesystem
//!
//! This library resolves logical resource names such as `views/template` or
//! `config/mimes` to files on disk by searching an ordered list of root
//! directories, the *cascade*. It is used by the `cascade-fs` command-line
//! tool but is meant to be embedded by any host that layers application,
//! module and system files.
//!
//! ## Quick Example
//!
//! ```
//! use cascade_fs::cascade::Cascade;
//! use cascade_fs::resolver::Resolution;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let app = dir.path().join("application");
//! let sys = dir.path().join("system");
//! std::fs::create_dir_all(app.join("config")).unwrap();
//! std::fs::create_dir_all(sys.join("config")).unwrap();
//! std::fs::write(app.join("config/mimes.js"), "").unwrap();
//! std::fs::write(sys.join("config/mimes.js"), "").unwrap();
//!
//! let mut cascade = Cascade::initialize(&app, dir.path().join("modules"), &sys, dir.path());
//!
//! // Configuration is mergeable: every root, lowest precedence first
//! assert_eq!(
//!     cascade.find("config", "mimes"),
//!     Resolution::List(vec![sys.join("config/mimes.js"), app.join("config/mimes.js")])
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **Cascade (`cascade`)**: the state object holding the roots, the cache
//!   and the collaborators. Precedence runs application, modules, system.
//! - **Resolver (`resolver`)**: the single-winner and full-list search modes
//!   and the set of mergeable categories that select list mode.
//! - **Cache (`cache`)**: memoizes every lookup, misses included, until it is
//!   reset.
//! - **Modules (`modules`)**: rebuilds the cascade from a module list and runs
//!   module init scripts through a collaborator.
//! - **Loader (`loader`)**: maps class names onto the `classes` category and
//!   hands found files to a loader collaborator.
//! - **Probe (`probe`)**: the one place filesystem errors are turned into
//!   "does not exist".
//! - **Configuration (`config`)**: the `.cascade.yaml` file read by the CLI.

pub mod cache;
pub mod cascade;
pub mod config;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod modules;
pub mod probe;
pub mod resolver;
pub mod roots;
pub mod shared;
pub mod suggestions;

#[cfg(test)]
mod loader_proptest;
