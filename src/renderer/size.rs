use std::fs;
use std::path::Path;

use humansize::{format_size, DECIMAL};
use serde::{Deserialize, Serialize};

/// How a file size annotation is written after the file name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeFormat {
    /// Exact byte count: `(42 bytes)`
    #[default]
    Bytes,
    /// Human-readable decimal units: `(1.20 kB)`
    Human,
}

impl SizeFormat {
    /// Format the parenthesised annotation, including its leading space.
    pub fn annotation(self, bytes: u64) -> String {
        match self {
            SizeFormat::Bytes => format!(" ({} bytes)", bytes),
            SizeFormat::Human => format!(" ({})", format_size(bytes, DECIMAL)),
        }
    }
}

/// Read the byte size of a file, following symlinks only when asked to.
///
/// Returns `None` when the size cannot be read; the caller omits the
/// annotation in that case.
pub fn read_size(path: &Path, follow_symlinks: bool) -> Option<u64> {
    let metadata = if follow_symlinks {
        fs::metadata(path)
    } else {
        fs::symlink_metadata(path)
    };

    match metadata {
        Ok(meta) => Some(meta.len()),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "Cannot read file size");
            None
        }
    }
}
