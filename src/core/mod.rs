//! Core functionality for den.
//!
//! This module provides the engine behind the session: configuration and
//! cache persistence, project discovery, git probing, path suggestions,
//! error handling and dispatch to external programs. Nothing here touches the
//! terminal.

pub mod cache;
pub mod config;
pub mod dirs;
pub mod discovery;
pub mod error;
pub mod git;
pub mod git_state;
pub mod launcher;
pub mod output;
pub mod project;
pub mod scanner;
pub mod suggest;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{DenError, Result};

// === Configuration ===
pub use config::{Config, Preferences};

// === Projects and discovery ===
// Scanning configured roots and reusing the discovery cache
pub use cache::{DiscoveryCache, CACHE_TTL_SECS};
pub use discovery::{discover, Discovery, DiscoverySource};
pub use git_state::GitState;
pub use project::{Project, ProjectSnapshot};
pub use scanner::{scan, scan_with, ScanOptions};

// === Git operations ===
pub use git::{Git2Probe, GitProbe, GitRepo};

// === Path suggestions ===
pub use suggest::{expand_home, suggest, SuggestOptions, SuggestionState, DEFAULT_PAGE_SIZE};

// === Output formatting ===
// Colored messages printed once the terminal session is over
pub use output::{print_error, print_success};
