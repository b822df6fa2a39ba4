//! Class-name to resource mapping
//!
//! Class names such as `Model_User` map onto files under the `classes`
//! category: the first delimiter becomes a path separator and the whole
//! name is lower-cased, so `Model_User` is looked up as `classes/model/user`.
//! Only the first delimiter is replaced; `My_Class_Name` maps to
//! `my/class_name`.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Collaborator that turns a resolved resource path into a value.
pub trait ResourceLoader {
    type Output;

    fn load(&mut self, path: &Path) -> Result<Self::Output>;
}

/// Loader that reads the resource as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentLoader;

impl ResourceLoader for ContentLoader {
    type Output = String;

    fn load(&mut self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Map a class name to its resource name under the classes category.
pub fn class_resource_name(identifier: &str, delimiter: char) -> String {
    identifier.replacen(delimiter, "/", 1).to_lowercase()
}
