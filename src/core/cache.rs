//! Persisted snapshot of the last project scan.
//!
//! The cache lets den start without rescanning every child directory and
//! probing git status on each launch. It is replaced wholesale after every
//! scan and never updated in place.
//!
//! # Public API
//! - [`DiscoveryCache`]: Snapshot, timestamp and per-directory project counts
//! - [`CACHE_TTL_SECS`]: Freshness window
//!
//! # Cache Strategy
//! - **JSON serialization**: Human-readable, stable field and key order
//! - **Freshness**: Valid only when non-empty, younger than the TTL and every
//!   configured root still exists
//! - **Missing file**: Loads as an empty (and therefore invalid) cache

use crate::core::config::Config;
use crate::core::error::{DenError, Result};
use crate::core::project::{Project, ProjectSnapshot};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One hour
pub const CACHE_TTL_SECS: i64 = 60 * 60;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryCache {
    pub projects: Vec<ProjectSnapshot>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub directory_counts: BTreeMap<PathBuf, usize>,
}

impl DiscoveryCache {
    /// Snapshot `projects` as of `now`, counting projects per parent directory.
    pub fn from_projects(projects: &[Project], now: DateTime<Utc>) -> Self {
        let mut directory_counts = BTreeMap::new();
        for project in projects {
            if let Some(parent) = project.path.parent() {
                *directory_counts.entry(parent.to_path_buf()).or_insert(0) += 1;
            }
        }

        Self {
            projects: projects.iter().map(ProjectSnapshot::from).collect(),
            last_updated: now,
            directory_counts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Rebuild live projects from the snapshot
    pub fn to_projects(&self) -> Vec<Project> {
        self.projects.iter().map(Project::from).collect()
    }

    pub fn find(&self, path: &Path) -> Option<&ProjectSnapshot> {
        self.projects.iter().find(|p| p.path == path)
    }

    pub fn is_valid(&self, config: &Config) -> bool {
        self.is_valid_at(config, Utc::now())
    }

    pub fn is_valid_at(&self, config: &Config, now: DateTime<Utc>) -> bool {
        if self.is_empty() {
            log::debug!("Cache invalid: no projects");
            return false;
        }

        if let Some(missing) = config.project_dirs.iter().find(|dir| fs::metadata(dir).is_err()) {
            log::debug!("Cache invalid: '{}' no longer exists", missing.display());
            return false;
        }

        let age = now.signed_duration_since(self.last_updated);
        if age >= Duration::seconds(CACHE_TTL_SECS) {
            log::debug!("Cache invalid: {}s old", age.num_seconds());
            return false;
        }

        true
    }

    /// Load the cache at `path`. A missing file is an empty cache, not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::debug!("Looking for cache file: {}", path.display());

        if !path.exists() {
            log::debug!("Cache file does not exist: {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            log::error!("Failed to read cache file '{}': {}", path.display(), e);
            DenError::cache_read_failed(path, e)
        })?;

        let cache: DiscoveryCache = serde_json::from_str(&content).map_err(|e| {
            log::error!("Failed to parse cache file '{}': {}", path.display(), e);
            DenError::cache_parse_failed(path, e)
        })?;

        log::debug!("Loaded {} projects from cache", cache.projects.len());
        Ok(cache)
    }

    /// Overwrite the cache file at `path`, creating its directory first.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(cache_dir) = path.parent() {
            fs::create_dir_all(cache_dir).map_err(|e| {
                log::error!(
                    "Failed to create cache directory '{}': {}",
                    cache_dir.display(),
                    e
                );
                DenError::cache_directory_creation_failed(cache_dir, e)
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| {
            log::error!("Failed to serialize cache data: {e}");
            DenError::cache_serialization_failed(e)
        })?;

        fs::write(path, json).map_err(|e| {
            log::error!("Failed to write cache file '{}': {}", path.display(), e);
            DenError::cache_write_failed(path, e)
        })?;

        log::debug!("Cached {} projects", self.projects.len());
        Ok(())
    }
}
