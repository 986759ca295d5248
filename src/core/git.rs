//! Git working-tree probing.
//!
//! This module wraps the `git2` library behind the [`GitProbe`] trait so the
//! scanner can ask "is this repository dirty?" without knowing how the answer
//! is produced. The answer matches `git status --porcelain`: untracked files
//! count, ignored files do not.
//!
//! # Public API
//! - [`GitRepo`]: Thin wrapper over a `git2::Repository`
//! - [`GitProbe`]: Status probe used by the scanner
//! - [`Git2Probe`]: Default probe backed by [`GitRepo`]

use crate::core::error::Result;
use git2::{Repository, StatusOptions};
use std::path::Path;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository rooted exactly at `path`; parents are not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path)?;
        Ok(GitRepo { repo })
    }

    /// Number of entries `git status --porcelain` would print
    pub fn change_count(&self) -> Result<usize> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.include_ignored(false);
        opts.recurse_untracked_dirs(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        Ok(statuses.len())
    }

    pub fn is_dirty(&self) -> Result<bool> {
        Ok(self.change_count()? > 0)
    }
}

/// Answers whether the repository at a directory has uncommitted changes.
pub trait GitProbe {
    fn is_dirty(&self, dir: &Path) -> Result<bool>;
}

/// [`GitProbe`] backed by libgit2; never spawns a process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Git2Probe;

impl GitProbe for Git2Probe {
    fn is_dirty(&self, dir: &Path) -> Result<bool> {
        let dirty = GitRepo::open(dir)?.is_dirty()?;
        log::debug!("git probe {}: dirty={dirty}", dir.display());
        Ok(dirty)
    }
}
