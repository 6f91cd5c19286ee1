//! Integration tests for the render command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn project_tree() -> Command {
    let mut cmd = Command::cargo_bin("project-tree").unwrap();
    // Keep a user config from leaking into the tests
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/project-tree-tests");
    cmd
}

fn create_test_project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("proj");

    fs::create_dir_all(root.join("src/utils")).unwrap();
    fs::create_dir_all(root.join(".git/objects")).unwrap();
    fs::create_dir_all(root.join("venv/lib")).unwrap();
    fs::create_dir_all(root.join("__pycache__")).unwrap();

    File::create(root.join("readme.md"))
        .unwrap()
        .write_all(b"# proj")
        .unwrap();
    File::create(root.join("src/main.py"))
        .unwrap()
        .write_all(b"print('hi')")
        .unwrap();
    File::create(root.join("src/utils/helpers.py"))
        .unwrap()
        .write_all(b"")
        .unwrap();
    File::create(root.join("data.bin"))
        .unwrap()
        .write_all(&[0u8; 42])
        .unwrap();
    File::create(root.join("venv/lib/site.py")).unwrap();

    (dir, root)
}

#[test]
fn test_render_basic() {
    let (_dir, root) = create_test_project();

    project_tree()
        .arg("render")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Estructura de: proj\n==============================\n└── proj/\n",
        ))
        .stdout(predicate::str::contains("    ├── src/\n"))
        .stdout(predicate::str::contains("    │   ├── utils/\n"))
        .stdout(predicate::str::contains("    │   │   └── helpers.py\n"))
        .stdout(predicate::str::contains("    │   └── main.py\n"))
        .stdout(predicate::str::contains("    └── readme.md\n"));
}

#[test]
fn test_render_default_exclusions() {
    let (_dir, root) = create_test_project();

    project_tree()
        .arg("render")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains(".git").not())
        .stdout(predicate::str::contains("venv").not())
        .stdout(predicate::str::contains("site.py").not())
        .stdout(predicate::str::contains("__pycache__").not());
}

#[test]
fn test_render_no_excludes() {
    let (_dir, root) = create_test_project();

    project_tree()
        .args(["render", "--no-excludes"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains(".git/"))
        .stdout(predicate::str::contains("site.py"));
}

#[test]
fn test_render_custom_exclude_replaces_defaults() {
    let (_dir, root) = create_test_project();

    project_tree()
        .args(["render", "--exclude", "src, __pycache__"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("main.py").not())
        .stdout(predicate::str::contains("venv/"))
        .stdout(predicate::str::contains(".git").not());
}

#[test]
fn test_render_with_sizes() {
    let (_dir, root) = create_test_project();

    project_tree()
        .args(["render", "--sizes"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("├── data.bin (42 bytes)"))
        .stdout(predicate::str::contains("src/ (").not());
}

#[test]
fn test_render_without_sizes() {
    let (_dir, root) = create_test_project();

    project_tree()
        .arg("render")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("├── data.bin\n"))
        .stdout(predicate::str::contains("bytes").not());
}

#[test]
fn test_render_from_subdirectory() {
    let (_dir, root) = create_test_project();

    project_tree()
        .args(["render", "--from", "src"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Estructura de: src\n"))
        .stdout(predicate::str::contains("readme.md").not());
}

#[test]
fn test_render_from_outside_root_is_rejected() {
    let (_dir, root) = create_test_project();

    project_tree()
        .args(["render", "--from", "../.."])
        .arg(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("leaves the project root"));
}

#[test]
fn test_render_unwrap_single_folder() {
    let (dir, _root) = create_test_project();

    project_tree()
        .args(["render", "--unwrap"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Estructura de: proj\n"));
}

#[test]
fn test_render_to_file() {
    let (dir, root) = create_test_project();
    let out = dir.path().join("tree.txt");

    project_tree()
        .args(["render", "--output"])
        .arg(&out)
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tree written to"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("Estructura de: proj\n"));
    assert!(written.ends_with("    └── readme.md\n"));
}

#[test]
fn test_render_to_default_file_name() {
    let (dir, root) = create_test_project();

    project_tree()
        .current_dir(dir.path())
        .arg("render")
        .arg(&root)
        .arg("-o")
        .assert()
        .success();

    assert!(dir.path().join("project_structure.txt").exists());
}

#[test]
fn test_render_nonexistent_path() {
    project_tree()
        .args(["render", "/nonexistent/path/12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_render_file_path_fails() {
    let (_dir, root) = create_test_project();

    project_tree()
        .arg("render")
        .arg(root.join("readme.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_render_rejects_plain_http_url() {
    project_tree()
        .args(["render", "--git", "http://example.com/owner/repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid repository URL"));
}

#[test]
fn test_subdirs_listing() {
    let (_dir, root) = create_test_project();

    project_tree()
        .arg("subdirs")
        .arg(&root)
        .assert()
        .success()
        .stdout(".\nsrc\nsrc/utils\n");
}

#[test]
fn test_subdirs_listing_with_exclusions() {
    let (_dir, root) = create_test_project();

    project_tree()
        .args(["subdirs", "--exclude", "utils", "--exclude-prefix", "_"])
        .arg(&root)
        .assert()
        .success()
        .stdout(".\n.git\n.git/objects\nsrc\nvenv\nvenv/lib\n");
}

#[cfg(unix)]
#[test]
fn test_render_symlinked_directory() {
    use std::os::unix::fs::symlink;

    let (dir, root) = create_test_project();
    fs::create_dir(dir.path().join("shared")).unwrap();
    fs::write(dir.path().join("shared/common.py"), "").unwrap();
    symlink("../shared", root.join("linked")).unwrap();

    project_tree()
        .arg("render")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("    ├── linked/\n    │   └── common.py\n"));

    project_tree()
        .args(["render", "--no-follow-symlinks"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("├── linked\n"))
        .stdout(predicate::str::contains("common.py").not());
}
