//! Where render roots come from: local directories, unwrapped archive-style
//! folders, and remote repositories fetched into temporary directories.

mod project_root;
mod remote;

pub use project_root::{find_project_root, list_subdirectories};
pub use remote::{
    clone_repository, project_name_from_url, strip_vcs_metadata, validate_url, FetchedProject,
};
