use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;
use tempfile::TempDir;

use crate::error::{Result, TreeError};

use super::project_root::find_project_root;

const VCS_METADATA_DIR: &str = ".git";
const TEMP_DIR_PREFIX: &str = "gh_";
const ALLOWED_SCHEMES: &[&str] = &["https://", "file://"];

/// Derive a checkout directory name from a repository URL:
/// `https://host/owner/repo.git/` gives `repo`.
pub fn project_name_from_url(url: &str) -> Option<String> {
    let last = url.trim_end_matches('/').rsplit('/').next()?;
    let name = last.strip_suffix(".git").unwrap_or(last);

    if name.is_empty() || name.contains(':') {
        None
    } else {
        Some(name.to_string())
    }
}

/// Check that `url` uses a scheme we fetch from and names a project.
pub fn validate_url(url: &str) -> Result<String> {
    if !ALLOWED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(TreeError::InvalidUrl(url.to_string()));
    }
    project_name_from_url(url).ok_or_else(|| TreeError::InvalidUrl(url.to_string()))
}

/// Clone `url` into `dest`, which must not exist or be empty.
pub fn clone_repository(url: &str, dest: &Path) -> Result<()> {
    tracing::info!(url, dest = %dest.display(), "Cloning repository");
    Repository::clone(url, dest).map_err(|source| TreeError::Clone {
        url: url.to_string(),
        source,
    })?;
    Ok(())
}

/// Remove the version-control metadata directory from a working copy.
///
/// Failure only leaves the directory behind; it is logged, not returned.
pub fn strip_vcs_metadata(dir: &Path) {
    let metadata_dir = dir.join(VCS_METADATA_DIR);
    if !metadata_dir.exists() {
        return;
    }
    if let Err(err) = fs::remove_dir_all(&metadata_dir) {
        tracing::warn!(
            path = %metadata_dir.display(),
            error = %err,
            "Failed to remove VCS metadata"
        );
    }
}

/// A repository fetched into a temporary directory.
///
/// The checkout lives as long as this value; dropping it removes the
/// temporary directory and everything in it.
#[derive(Debug)]
pub struct FetchedProject {
    temp: TempDir,
    root: PathBuf,
}

impl FetchedProject {
    /// Clone `url`, strip its `.git` directory and resolve the project root.
    pub fn fetch(url: &str) -> Result<Self> {
        let name = validate_url(url)?;

        let temp = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir()
            .map_err(|e| TreeError::from_io(std::env::temp_dir(), e))?;
        let checkout = temp.path().join(&name);

        clone_repository(url, &checkout)?;
        strip_vcs_metadata(&checkout);
        let root = find_project_root(&checkout)?;

        Ok(Self { temp, root })
    }

    /// Directory the render should start from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Temporary directory holding the checkout.
    pub fn temp_dir(&self) -> &Path {
        self.temp.path()
    }
}
