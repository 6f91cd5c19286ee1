//! Render command implementation

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Component, Path, PathBuf};

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::{Result, TreeError};
use crate::renderer::{render_tree, write_tree, RenderOptions, SizeFormat};
use crate::source::{find_project_root, FetchedProject};

/// Run the render command
pub fn run(args: RenderArgs, config: &Config) -> Result<()> {
    let options = render_options(&args, config);

    // Holds the temporary checkout until rendering is done
    let fetched;
    let base = if let Some(url) = &args.git {
        fetched = FetchedProject::fetch(url)?;
        fetched.root().to_path_buf()
    } else if args.unwrap {
        find_project_root(&args.path)?
    } else {
        args.path.clone()
    };

    let root = match &args.from {
        Some(subdir) => start_directory(&base, subdir)?,
        None => base,
    };

    tracing::info!(root = %root.display(), sizes = options.show_sizes, "Rendering tree");

    match &args.output {
        Some(file) => {
            let file = file
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output.file_name));
            write_to_file(&root, &options, &file)?;
            println!("Tree written to {}", file.display());
        }
        None => {
            println!("{}", render_tree(&root, &options)?);
        }
    }

    Ok(())
}

/// Merge command-line flags over the configured render options.
///
/// An exclusion list given on the command line replaces the configured one.
pub fn render_options(args: &RenderArgs, config: &Config) -> RenderOptions {
    let mut options = config.render_options();
    options.exclusions = super::exclusions(&args.exclusions, config);

    if args.sizes || args.human_sizes {
        options.show_sizes = true;
    }
    if args.human_sizes {
        options.size_format = SizeFormat::Human;
    }
    if args.no_follow_symlinks {
        options.follow_symlinks = false;
    }

    options
}

/// Join a relative `subdir` onto `base`, refusing anything that would leave it.
fn start_directory(base: &Path, subdir: &Path) -> Result<PathBuf> {
    let mut depth = 0usize;
    for component in subdir.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir if depth > 0 => depth -= 1,
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(TreeError::OutsideRoot(subdir.to_path_buf()));
            }
        }
    }
    Ok(base.join(subdir))
}

fn write_to_file(root: &Path, options: &RenderOptions, file: &Path) -> Result<()> {
    let handle = File::create(file).map_err(|e| TreeError::from_io(file, e))?;
    let mut writer = BufWriter::new(handle);

    if let Err(err) = write_tree(root, options, &mut writer) {
        drop(writer);
        if let Err(remove_err) = fs::remove_file(file) {
            tracing::warn!(
                path = %file.display(),
                error = %remove_err,
                "Failed to remove partial output"
            );
        }
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use tempfile::TempDir;

    fn parse_render(args: &[&str]) -> RenderArgs {
        let mut argv = vec!["project-tree", "render"];
        argv.extend_from_slice(args);
        match Cli::parse_from(argv).command {
            Command::Render(args) => args,
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_config_exclusions_by_default() {
        let options = render_options(&parse_render(&[]), &Config::default());

        assert!(options.exclusions.is_excluded("venv"));
        assert!(options.exclusions.is_excluded(".git"));
        assert!(!options.show_sizes);
    }

    #[test]
    fn test_cli_names_replace_config_names() {
        let options = render_options(&parse_render(&["-e", "target, dist"]), &Config::default());

        assert!(options.exclusions.is_excluded("target"));
        assert!(options.exclusions.is_excluded("dist"));
        assert!(!options.exclusions.is_excluded("venv"));
        // Prefixes still come from config
        assert!(options.exclusions.is_excluded(".hidden"));
    }

    #[test]
    fn test_no_excludes() {
        let options = render_options(&parse_render(&["--no-excludes"]), &Config::default());
        assert!(options.exclusions.is_empty());
    }

    #[test]
    fn test_human_sizes_implies_sizes() {
        let options = render_options(&parse_render(&["--human-sizes"]), &Config::default());

        assert!(options.show_sizes);
        assert_eq!(options.size_format, SizeFormat::Human);
    }

    #[test]
    fn test_symlinks_followed_unless_disabled() {
        let options = render_options(&parse_render(&[]), &Config::default());
        assert!(options.follow_symlinks);

        let options =
            render_options(&parse_render(&["--no-follow-symlinks"]), &Config::default());
        assert!(!options.follow_symlinks);
    }

    #[test]
    fn test_start_directory_inside_root() {
        let base = Path::new("/work/proj");

        assert_eq!(
            start_directory(base, Path::new("src/bin")).unwrap(),
            base.join("src/bin")
        );
        assert_eq!(
            start_directory(base, Path::new("src/../docs")).unwrap(),
            base.join("src/../docs")
        );
    }

    #[test]
    fn test_start_directory_outside_root_is_rejected() {
        let base = Path::new("/work/proj");

        for subdir in ["/etc", "..", "src/../..", "./../other"] {
            let result = start_directory(base, Path::new(subdir));
            assert!(
                matches!(result, Err(TreeError::OutsideRoot(_))),
                "{} should be rejected",
                subdir
            );
        }
    }

    #[test]
    fn test_write_to_file() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("proj");
        fs::create_dir_all(root.join("src")).unwrap();
        let out = tmp.path().join("tree.txt");

        write_to_file(&root, &Config::default().render_options(), &out).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("Estructura de: proj\n"));
        assert!(written.ends_with("    └── src/\n"));
    }

    #[test]
    fn test_failed_write_leaves_no_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("tree.txt");

        let result = write_to_file(
            &tmp.path().join("missing"),
            &Config::default().render_options(),
            &out,
        );

        assert!(matches!(result, Err(TreeError::PathNotFound(_))));
        assert!(!out.exists());
    }
}
