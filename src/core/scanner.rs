//! Project discovery over configured root directories.
//!
//! Every immediate child directory of a root is a project candidate; the scan
//! never descends further. Unreadable roots and children are skipped so one bad
//! entry cannot abort the scan, and git probe failures degrade to
//! [`GitState::NoGit`].
//!
//! # Public API
//! - [`ScanOptions`]: Git probing switch and the favorites set
//! - [`scan`]: Scan with the default libgit2 probe
//! - [`scan_with`]: Scan with a caller-provided [`GitProbe`]

use crate::core::config::Config;
use crate::core::git::{Git2Probe, GitProbe};
use crate::core::git_state::GitState;
use crate::core::project::Project;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOptions {
    /// When false no probe is run and every project is `NoGit`
    pub probe_git: bool,
    pub favorites: Vec<PathBuf>,
}

impl ScanOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            probe_git: config.preferences.show_git_status,
            favorites: config.favorites.clone(),
        }
    }

    fn is_favorite(&self, path: &Path) -> bool {
        self.favorites.iter().any(|fav| fav == path)
    }
}

pub fn scan(directories: &[PathBuf], options: &ScanOptions) -> Vec<Project> {
    scan_with(directories, options, &Git2Probe)
}

pub fn scan_with(
    directories: &[PathBuf],
    options: &ScanOptions,
    probe: &dyn GitProbe,
) -> Vec<Project> {
    let mut projects = Vec::new();

    for root in directories {
        if let Err(e) = fs::metadata(root) {
            log::warn!("Skipping inaccessible root '{}': {e}", root.display());
            continue;
        }

        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Skipping unreadable root '{}': {e}", root.display());
                continue;
            }
        };

        let mut children: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|entry| entry.path())
            .collect();
        children.sort();

        let before = projects.len();
        projects.extend(
            children
                .iter()
                .filter_map(|child| detect_project(child, options, probe)),
        );
        log::debug!(
            "Scanned '{}': {} projects",
            root.display(),
            projects.len() - before
        );
    }

    projects
}

fn detect_project(path: &Path, options: &ScanOptions, probe: &dyn GitProbe) -> Option<Project> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            log::debug!("Skipping '{}': {e}", path.display());
            return None;
        }
    };
    let modified = metadata.modified().ok()?;
    let name = path.file_name()?.to_string_lossy().into_owned();

    Some(Project {
        name,
        path: path.to_path_buf(),
        last_modified: DateTime::<Utc>::from(modified),
        git_state: probe_state(path, options, probe),
        favorite: options.is_favorite(path),
    })
}

fn probe_state(path: &Path, options: &ScanOptions, probe: &dyn GitProbe) -> GitState {
    if !options.probe_git || !path.join(".git").exists() {
        return GitState::NoGit;
    }
    GitState::from_probe(probe.is_dirty(path))
}
