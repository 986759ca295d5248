//! Startup discovery: reuse a fresh cache or rescan and refresh it.

use crate::core::cache::DiscoveryCache;
use crate::core::config::Config;
use crate::core::git::GitProbe;
use crate::core::project::Project;
use crate::core::scanner::{scan_with, ScanOptions};
use chrono::Utc;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverySource {
    Cache,
    Scan,
}

#[derive(Debug, Clone)]
pub struct Discovery {
    pub projects: Vec<Project>,
    pub source: DiscoverySource,
}

/// Projects for a new session.
///
/// A cache that fails to load is treated as absent. Favorite flags of cached
/// projects are re-derived from `config`, which is the source of truth for
/// favorites. A failed cache save is logged and otherwise ignored.
pub fn discover(config: &Config, cache_path: &Path, probe: &dyn GitProbe) -> Discovery {
    let cache = DiscoveryCache::load_from(cache_path).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable discovery cache: {e}");
        DiscoveryCache::default()
    });

    if cache.is_valid(config) {
        let mut projects = cache.to_projects();
        for project in &mut projects {
            project.favorite = config.is_favorite(&project.path);
        }
        log::debug!("Using cached projects ({} items)", projects.len());
        return Discovery {
            projects,
            source: DiscoverySource::Cache,
        };
    }

    let projects = scan_with(&config.project_dirs, &ScanOptions::from_config(config), probe);
    if let Err(e) = DiscoveryCache::from_projects(&projects, Utc::now()).save_to(cache_path) {
        log::warn!("Cache save failed (session will continue): {e}");
    }

    Discovery {
        projects,
        source: DiscoverySource::Scan,
    }
}
