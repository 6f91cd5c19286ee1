mod entry;
mod exclusion;
mod formatter;
mod options;
mod size;
mod walker;

pub use entry::{read_children, DirectoryEntry};
pub use exclusion::{parse_list, ExclusionConfig};
pub use formatter::{child_prefix, format_header, RenderLine, BRANCH, LAST_BRANCH};
pub use options::{RenderOptions, DEFAULT_HEADER_LABEL};
pub use size::{read_size, SizeFormat};
pub use walker::{render_tree, write_tree};
