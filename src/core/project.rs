//! Project records and their cached snapshots.
//!
//! A [`Project`] is built fresh on each scan. The discovery cache stores
//! [`ProjectSnapshot`] values instead, so a cached entry is never the live
//! instance the session mutates.
//!
//! # Public API
//! - [`Project`]: A discovered project directory
//! - [`ProjectSnapshot`]: Serialized form kept in the discovery cache

use crate::core::git_state::GitState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    /// Absolute path; the identity key of a project
    pub path: PathBuf,
    pub last_modified: DateTime<Utc>,
    pub git_state: GitState,
    pub favorite: bool,
}

impl Project {
    pub fn is_at(&self, path: &Path) -> bool {
        self.path == path
    }

    /// Text matched by the list filter
    pub fn filter_value(&self) -> String {
        format!("{} {}", self.name, self.path.display())
    }

    /// Second line shown under the project name
    pub fn description(&self) -> String {
        format!("{} ({})", self.path.display(), self.git_state)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub name: String,
    pub path: PathBuf,
    pub last_modified: DateTime<Utc>,
    pub git_state: GitState,
    #[serde(default)]
    pub favorite: bool,
}

impl From<&Project> for ProjectSnapshot {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            path: project.path.clone(),
            last_modified: project.last_modified,
            git_state: project.git_state,
            favorite: project.favorite,
        }
    }
}

impl From<&ProjectSnapshot> for Project {
    fn from(snapshot: &ProjectSnapshot) -> Self {
        Self {
            name: snapshot.name.clone(),
            path: snapshot.path.clone(),
            last_modified: snapshot.last_modified,
            git_state: snapshot.git_state,
            favorite: snapshot.favorite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project {
            name: "x".to_string(),
            path: PathBuf::from("/tmp/projects/x"),
            last_modified: DateTime::<Utc>::default(),
            git_state: GitState::Clean,
            favorite: false,
        }
    }

    #[test]
    fn test_description_includes_git_label() {
        assert_eq!(sample().description(), "/tmp/projects/x (git (clean))");
    }

    #[test]
    fn test_snapshot_is_detached_from_project() {
        let mut project = sample();
        let snapshot = ProjectSnapshot::from(&project);
        project.favorite = true;

        assert!(!snapshot.favorite);
        assert_eq!(Project::from(&snapshot).path, project.path);
    }

    #[test]
    fn test_snapshot_field_names() {
        let json = serde_json::to_value(ProjectSnapshot::from(&sample())).unwrap();
        let object = json.as_object().unwrap();
        for key in ["name", "path", "lastModified", "gitState", "favorite"] {
            assert!(object.contains_key(key), "missing {key}");
        }
    }
}
