//! Predefined project trees and config files
//!
//! Provides ready-made scenarios so integration tests start from the same
//! on-disk state.

#![allow(dead_code)]

use super::repository::*;
use den::core::config::Config;
use den::core::error::Result;
use std::path::{Path, PathBuf};

/// Scenario: a root with a clean repository `x` and a plain directory `y`
pub fn create_mixed_root() -> Result<TestRoot> {
    let root = setup_test_root()?;
    create_git_project(root.path(), "x")?;
    create_plain_project(root.path(), "y")?;
    Ok(root)
}

/// Scenario: clean, dirty and plain projects plus a stray file
pub fn create_full_root() -> Result<TestRoot> {
    let root = setup_test_root()?;
    create_git_project(root.path(), "clean")?;
    let dirty = create_git_project(root.path(), "dirty")?;
    make_dirty(&dirty)?;
    create_plain_project(root.path(), "plain")?;
    create_file(root.path(), "README.md", "not a project")?;
    Ok(root)
}

/// Config watching `roots`, with git status enabled
pub fn config_for(roots: &[&Path]) -> Config {
    Config {
        project_dirs: roots.iter().map(|r| r.to_path_buf()).collect(),
        ..Config::default()
    }
}

/// Config and cache file locations under `base`, laid out like the real ones
pub fn state_paths(base: &Path) -> (PathBuf, PathBuf) {
    (
        base.join("config").join("den").join("config.json"),
        base.join("cache").join("den").join("projects.json"),
    )
}
