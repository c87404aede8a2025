//! Filesystem infrastructure: implements `PluginCatalog`.

use std::io;
use std::path::{Path, PathBuf};

use crate::application::ports::PluginCatalog;

/// Production filesystem implementation of `PluginCatalog`.
pub struct LocalFs;

impl PluginCatalog for LocalFs {
    fn list_plugins(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        list_plugins(dir)
    }
}

/// List the non-directory entries directly inside `dir`, sorted by name.
///
/// Entry types are not resolved through symlinks, so a link to a directory
/// is reported like any other file.
///
/// # Errors
///
/// Returns the I/O error if `dir` cannot be read.
pub fn list_plugins(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut plugins = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        plugins.push(dir.join(entry.file_name()));
    }
    plugins.sort();
    Ok(plugins)
}
