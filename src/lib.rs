//! project-tree - Render a project directory as a box-drawing tree diagram
//!
//! This crate provides functionality for:
//! - Rendering a directory subtree with `├──`/`└──` connectors and optional file sizes
//! - Excluding entries by exact name or name prefix at every depth
//! - Resolving render roots from local folders or fetched git repositories

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod renderer;
pub mod source;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError};
pub use renderer::{render_tree, write_tree, ExclusionConfig, RenderOptions};
