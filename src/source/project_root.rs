use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, TreeError};
use crate::renderer::ExclusionConfig;

/// Descend into the single top-level directory of `base` when it holds
/// nothing else, as archives and clones often wrap a project in one folder.
pub fn find_project_root(base: &Path) -> Result<PathBuf> {
    let children = fs::read_dir(base)
        .map_err(|e| TreeError::from_io(base, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| TreeError::from_io(base, e))?;

    if let [only] = children.as_slice() {
        let path = only.path();
        if path.is_dir() {
            tracing::debug!(root = %path.display(), "Unwrapped single top-level directory");
            return Ok(path);
        }
    }

    Ok(base.to_path_buf())
}

/// List `root` followed by every directory below it that a render would
/// show, sorted by path.
///
/// Excluded directories are not descended into. Unreadable branches are
/// skipped.
pub fn list_subdirectories(root: &Path, exclusions: &ExclusionConfig) -> Vec<PathBuf> {
    let mut subdirs: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !exclusions.is_excluded(&e.file_name().to_string_lossy())
        })
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(error = %err, "Skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect();

    subdirs.sort();

    let mut all = Vec::with_capacity(subdirs.len() + 1);
    all.push(root.to_path_buf());
    all.extend(subdirs);
    all
}
