//! # Error Suggestions
//!
//! Helper functions for CLI error messages that carry hints. Errors should
//! tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cascade_fs::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Configuration file not found: {}", path.display());
//!
//! // Use:
//! return Err(suggestions::config_not_found(path));
//! ```

use std::path::Path;

/// Generate an error for when the configuration file is not found.
///
/// Includes hints about:
/// - Creating a new config file
/// - Using the -c/--config flag
/// - Using the CASCADE_CONFIG environment variable
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Create a .cascade.yaml file naming application, modules_root and system\n\
         hint: Use -c/--config to specify a different path\n\
         hint: Set CASCADE_CONFIG environment variable",
        path = path.display()
    )
}

/// Generate an error for a resource that no root provides.
///
/// Lists the roots that were searched so the user can see where the file
/// was expected.
pub fn resource_not_found(key: &str, searched: &[&Path]) -> anyhow::Error {
    let roots: String = searched
        .iter()
        .map(|root| format!("\n  searched: {}", root.display()))
        .collect();
    anyhow::anyhow!(
        "Resource not found: {key}{roots}\n\n\
         hint: Run 'cascade-fs roots' to inspect the active cascade\n\
         hint: Cached answers persist; a file created after the first lookup needs a fresh run"
    )
}

/// Generate an error for a class name with no backing resource.
pub fn class_not_found(identifier: &str, resource: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Class not found: {identifier} (looked up as {resource})\n\n\
         hint: Only the first delimiter maps to a directory, so My_Class_Name is classes/my/class_name"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found() {
        let err = config_not_found(Path::new("/srv/.cascade.yaml"));
        let msg = err.to_string();
        assert!(msg.contains("Configuration file not found"));
        assert!(msg.contains("/srv/.cascade.yaml"));
        assert!(msg.contains("CASCADE_CONFIG"));
    }

    #[test]
    fn test_resource_not_found_lists_roots() {
        let err = resource_not_found(
            "views/missing.js",
            &[Path::new("/srv/app"), Path::new("/srv/system")],
        );
        let msg = err.to_string();
        assert!(msg.contains("views/missing.js"));
        assert!(msg.contains("searched: /srv/app"));
        assert!(msg.contains("searched: /srv/system"));
    }

    #[test]
    fn test_class_not_found() {
        let msg = class_not_found("Model_User", "classes/model/user.js").to_string();
        assert!(msg.contains("Model_User"));
        assert!(msg.contains("classes/model/user.js"));
    }
}
