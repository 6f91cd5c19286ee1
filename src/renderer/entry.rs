use std::cmp::Ordering;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::exclusion::ExclusionConfig;

/// A filesystem node met during a render. Lives only as long as the
/// directory listing that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Full path to the file or directory
    pub path: PathBuf,

    /// Raw base name, used for ordering
    pub file_name: OsString,

    /// Base name as displayed (lossy UTF-8)
    pub name: String,

    /// True if this entry is rendered as a directory
    pub is_dir: bool,
}

impl DirectoryEntry {
    fn from_dir_entry(entry: fs::DirEntry, follow_symlinks: bool) -> io::Result<Self> {
        let file_type = entry.file_type()?;
        let path = entry.path();

        let is_dir = if file_type.is_symlink() {
            // Broken or unreadable links render as leaves
            follow_symlinks && fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            file_type.is_dir()
        };

        let file_name = entry.file_name();
        Ok(Self {
            name: file_name.to_string_lossy().into_owned(),
            file_name,
            path,
            is_dir,
        })
    }

    /// Directories first, then files; byte-wise name order within each group.
    pub fn render_order(&self, other: &Self) -> Ordering {
        other
            .is_dir
            .cmp(&self.is_dir)
            .then_with(|| self.file_name.cmp(&other.file_name))
    }
}

/// List the immediate children of `dir`, filtered and sorted for rendering.
///
/// The listing is all-or-nothing: if reading any entry fails, the whole
/// listing fails.
pub fn read_children(
    dir: &Path,
    exclusions: &ExclusionConfig,
    follow_symlinks: bool,
) -> io::Result<Vec<DirectoryEntry>> {
    let mut children = fs::read_dir(dir)?
        .map(|entry| entry.and_then(|e| DirectoryEntry::from_dir_entry(e, follow_symlinks)))
        .collect::<io::Result<Vec<_>>>()?;

    children.retain(|child| !exclusions.is_excluded(&child.name));
    children.sort_by(DirectoryEntry::render_order);

    Ok(children)
}
