//! Subdirs command implementation

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::SubdirsArgs;
use crate::config::Config;
use crate::error::{Result, TreeError};
use crate::source::{find_project_root, list_subdirectories};

/// Run the subdirs command
pub fn run(args: SubdirsArgs, config: &Config) -> Result<()> {
    let root = if args.unwrap {
        find_project_root(&args.path)?
    } else {
        args.path.clone()
    };

    let metadata = fs::metadata(&root).map_err(|e| TreeError::from_io(&root, e))?;
    if !metadata.is_dir() {
        return Err(TreeError::NotADirectory(root));
    }

    let exclusions = super::exclusions(&args.exclusions, config);
    for line in relative_listing(&root, &list_subdirectories(&root, &exclusions)) {
        println!("{}", line);
    }

    Ok(())
}

/// Show each directory relative to `root`, with `.` for the root itself.
fn relative_listing(root: &Path, dirs: &[PathBuf]) -> Vec<String> {
    dirs.iter()
        .map(|dir| {
            let relative = dir.strip_prefix(root).unwrap_or(dir);
            if relative.as_os_str().is_empty() {
                ".".to_string()
            } else {
                relative.display().to_string()
            }
        })
        .collect()
}
