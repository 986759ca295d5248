//! Type-safe working-tree state of a project directory.
//!
//! # Public API
//! - [`GitState`]: `NoGit`, `Clean` or `Modified`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Working-tree state derived from the presence of a `.git` entry and its status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GitState {
    /// No `.git` entry, probing disabled, or the probe failed
    #[default]
    NoGit,
    /// Repository with an empty status listing
    Clean,
    /// Repository with at least one changed or untracked file
    Modified,
}

impl GitState {
    /// Map the outcome of a status probe. Probe failures degrade to `NoGit`.
    pub fn from_probe<E>(dirty: std::result::Result<bool, E>) -> Self {
        match dirty {
            Ok(false) => GitState::Clean,
            Ok(true) => GitState::Modified,
            Err(_) => GitState::NoGit,
        }
    }

    /// Label shown next to a project in the list
    pub fn label(&self) -> &'static str {
        match self {
            GitState::NoGit => "no git",
            GitState::Clean => "git (clean)",
            GitState::Modified => "git (modified)",
        }
    }
}

impl fmt::Display for GitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
