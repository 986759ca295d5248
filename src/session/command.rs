//! Side effects requested by the session controller.
//!
//! Transitions never touch the outside world beyond reading the filesystem;
//! instead they return [`Command`] values which the terminal runtime executes
//! in order and reports back on failure.

use crate::core::cache::DiscoveryCache;
use crate::core::config::Config;
use crate::core::project::Project;
use crate::core::scanner::ScanOptions;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ScanRequest {
    /// Increases with every request; only the newest result is applied
    pub generation: u64,
    pub directories: Vec<PathBuf>,
    pub options: ScanOptions,
}

/// Projects found by a background rescan
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub generation: u64,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Persist the whole config
    SaveConfig(Config),
    /// Overwrite the discovery cache
    SaveCache(DiscoveryCache),
    /// Scan in the background and deliver `ProjectsLoaded`
    Rescan(ScanRequest),
    CopyToClipboard(String),
    /// Hand the terminal to the editor; the session ends
    OpenEditor(PathBuf),
    /// Open the file explorer; the session ends
    OpenFileExplorer(PathBuf),
    Quit,
}

impl Command {
    /// Prefix of the status message shown when this command fails
    pub fn failure_context(&self) -> &'static str {
        match self {
            Command::SaveConfig(_) => "Error saving config",
            Command::SaveCache(_) => "Error saving cache",
            Command::Rescan(_) => "Error scanning projects",
            Command::CopyToClipboard(_) => "Error copying to clipboard",
            Command::OpenEditor(_) => "Error opening editor",
            Command::OpenFileExplorer(_) => "Error opening file explorer",
            Command::Quit => "Error quitting",
        }
    }
}
