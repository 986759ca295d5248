//! Project tree and git repository setup utilities
//!
//! Provides functions for building temporary project roots whose children are
//! plain directories or git repositories in a known state.

#![allow(dead_code)]

use den::core::error::Result;
use git2::{Repository, Signature};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project root. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRoot {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRoot {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

/// Sets up an empty project root directory
pub fn setup_test_root() -> Result<TestRoot> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("projects");
    fs::create_dir(&path)?;
    Ok(TestRoot { temp_dir, path })
}

/// Creates a child directory that is not a git repository
pub fn create_plain_project(root: &Path, name: &str) -> Result<PathBuf> {
    let path = root.join(name);
    fs::create_dir_all(&path)?;
    fs::write(path.join("notes.txt"), "plain project")?;
    Ok(path)
}

/// Creates a git repository with one committed file and a clean working tree
pub fn create_git_project(root: &Path, name: &str) -> Result<PathBuf> {
    let path = root.join(name);
    fs::create_dir_all(&path)?;

    let repo = Repository::init(&path)?;
    fs::write(path.join("README.md"), format!("# {name}\n"))?;

    let mut index = repo.index()?;
    index.add_path(Path::new("README.md"))?;
    index.write()?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    let signature = Signature::now("Test User", "test@example.com")?;
    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        "Initial commit",
        &tree,
        &[],
    )?;

    Ok(path)
}

/// Leaves an untracked file in the working tree
pub fn make_dirty(project: &Path) -> Result<()> {
    fs::write(project.join("scratch.txt"), "uncommitted")?;
    Ok(())
}

pub fn create_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    fs::write(dir.join(name), content)?;
    Ok(())
}
