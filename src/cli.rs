use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// project-tree - Render a project directory as a box-drawing tree
#[derive(Parser, Debug)]
#[command(name = "project-tree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the directory structure of a project
    Render(RenderArgs),

    /// List the directories a render can start from
    Subdirs(SubdirsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Project directory to render
    #[arg(default_value = ".", conflicts_with = "git")]
    pub path: PathBuf,

    /// Clone this HTTPS repository into a temporary directory and render it
    #[arg(long, value_name = "URL")]
    pub git: Option<String>,

    /// Start from this subdirectory of the project root
    #[arg(long, value_name = "SUBDIR")]
    pub from: Option<PathBuf>,

    /// Descend into PATH when it only contains a single directory
    #[arg(long)]
    pub unwrap: bool,

    /// Show file sizes
    #[arg(short, long)]
    pub sizes: bool,

    /// Show file sizes in human-readable units (implies --sizes)
    #[arg(long)]
    pub human_sizes: bool,

    #[command(flatten)]
    pub exclusions: ExclusionArgs,

    /// Show symlinks as plain entries instead of following them
    #[arg(long)]
    pub no_follow_symlinks: bool,

    /// Write the tree to a file instead of stdout
    #[arg(short, long, value_name = "FILE", num_args = 0..=1)]
    pub output: Option<Option<PathBuf>>,
}

#[derive(Args, Debug)]
pub struct SubdirsArgs {
    /// Project directory to list
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Descend into PATH when it only contains a single directory
    #[arg(long)]
    pub unwrap: bool,

    #[command(flatten)]
    pub exclusions: ExclusionArgs,
}

/// Exclusion flags shared by `render` and `subdirs`
#[derive(Args, Debug, Default)]
pub struct ExclusionArgs {
    /// Names to exclude (comma-separated, can be repeated)
    #[arg(short, long, value_name = "NAMES")]
    pub exclude: Vec<String>,

    /// Name prefixes to exclude (comma-separated, can be repeated)
    #[arg(short = 'p', long, value_name = "PREFIXES")]
    pub exclude_prefix: Vec<String>,

    /// Ignore all configured exclusions
    #[arg(long, conflicts_with_all = ["exclude", "exclude_prefix"])]
    pub no_excludes: bool,
}
