use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

use super::entry::{read_children, DirectoryEntry};
use super::formatter::{child_prefix, format_header, RenderLine};
use super::options::RenderOptions;
use super::size::read_size;

/// Pending work on the traversal stack, popped in output order.
#[derive(Debug)]
enum Work {
    Dir {
        path: PathBuf,
        name: String,
        prefix: String,
        is_last: bool,
    },
    File {
        path: PathBuf,
        name: String,
        prefix: String,
        is_last: bool,
    },
}

/// Render the tree under `root` as a single text value.
///
/// Lines are joined with `\n`; there is no trailing newline.
pub fn render_tree(root: &Path, options: &RenderOptions) -> Result<String> {
    let mut lines = Vec::new();
    walk(root, options, |line| {
        lines.push(line);
        Ok(())
    })?;
    Ok(lines.join("\n"))
}

/// Write the tree under `root` to `sink`, one `\n`-terminated line at a time.
pub fn write_tree<W: Write>(root: &Path, options: &RenderOptions, sink: &mut W) -> Result<()> {
    walk(root, options, |line| writeln!(sink, "{}", line))?;
    sink.flush().map_err(TreeError::Output)
}

/// Walk `root` depth-first, handing each formatted line to `emit`.
///
/// Only a missing or non-directory root fails the walk. Unreadable
/// directories below it are rendered without children and unreadable file
/// sizes are left out.
fn walk<F>(root: &Path, options: &RenderOptions, emit: F) -> Result<()>
where
    F: FnMut(String) -> io::Result<()>,
{
    walk_with(
        root,
        options,
        |dir| read_children(dir, &options.exclusions, options.follow_symlinks),
        emit,
    )
}

/// `walk` with the directory listing supplied by the caller.
fn walk_with<L, F>(root: &Path, options: &RenderOptions, mut list: L, mut emit: F) -> Result<()>
where
    L: FnMut(&Path) -> io::Result<Vec<DirectoryEntry>>,
    F: FnMut(String) -> io::Result<()>,
{
    let canonical = resolve_root(root)?;
    let name = root_name(root, &canonical);

    tracing::debug!(root = %canonical.display(), "Rendering tree");

    emit(format_header(&options.header_label, &name)).map_err(TreeError::Output)?;

    let mut stack = vec![Work::Dir {
        path: canonical,
        name,
        prefix: String::new(),
        is_last: true,
    }];
    let mut line_count = 0usize;

    while let Some(work) = stack.pop() {
        line_count += 1;
        match work {
            Work::File {
                path,
                name,
                prefix,
                is_last,
            } => {
                let size = if options.show_sizes {
                    read_size(&path, options.follow_symlinks)
                } else {
                    None
                };
                let line = RenderLine {
                    prefix: &prefix,
                    is_last,
                    name: &name,
                    is_dir: false,
                    size,
                };
                emit(line.format(options.size_format)).map_err(TreeError::Output)?;
            }
            Work::Dir {
                path,
                name,
                prefix,
                is_last,
            } => {
                let line = RenderLine {
                    prefix: &prefix,
                    is_last,
                    name: &name,
                    is_dir: true,
                    size: None,
                };
                emit(line.format(options.size_format)).map_err(TreeError::Output)?;

                let children = match list(&path) {
                    Ok(children) => children,
                    Err(err) => {
                        tracing::debug!(
                            path = %path.display(),
                            error = %err,
                            "Cannot list directory"
                        );
                        continue;
                    }
                };

                let nested = child_prefix(&prefix, is_last);
                let count = children.len();

                // Reversed so the first child is popped first
                for (index, child) in children.into_iter().enumerate().rev() {
                    let is_last = index + 1 == count;
                    let work = if child.is_dir {
                        Work::Dir {
                            path: child.path,
                            name: child.name,
                            prefix: nested.clone(),
                            is_last,
                        }
                    } else {
                        Work::File {
                            path: child.path,
                            name: child.name,
                            prefix: nested.clone(),
                            is_last,
                        }
                    };
                    stack.push(work);
                }
            }
        }
    }

    tracing::debug!(entries = line_count, "Tree rendered");
    Ok(())
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    let canonical = root
        .canonicalize()
        .map_err(|e| TreeError::from_io(root, e))?;
    let metadata = fs::metadata(&canonical).map_err(|e| TreeError::from_io(&canonical, e))?;

    if !metadata.is_dir() {
        return Err(TreeError::NotADirectory(root.to_path_buf()));
    }
    Ok(canonical)
}

/// Prefer the name the caller used; fall back to the resolved path for `.`,
/// `..` and the filesystem root.
fn root_name(root: &Path, canonical: &Path) -> String {
    root.file_name()
        .or_else(|| canonical.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| canonical.display().to_string())
}
