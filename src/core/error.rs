//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`DenError`] which covers every failure mode of den:
//! configuration persistence, discovery cache persistence, directory-add
//! validation and dispatch to external programs. It uses `thiserror` for
//! ergonomic error definitions and includes named constructors for the
//! variants that carry context.
//!
//! # Public API
//! - [`DenError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, DenError>`
//!
//! # Error Categories
//! - **Configuration**: read, parse and write failures of the config file
//! - **Cache operations**: directory, serialization, read, parse and write failures
//! - **Directory validation**: inaccessible, not-a-directory and duplicate paths
//! - **Dispatch**: editor, file explorer and clipboard failures

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for den
#[derive(Error, Debug)]
pub enum DenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    // Configuration errors
    #[error("Could not determine home directory")]
    HomeDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to remove config file '{path}': {source}")]
    ConfigRemoveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Cache errors
    #[error("Failed to create cache directory '{path}': {source}")]
    CacheDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize cache data: {source}")]
    CacheSerializationFailed { source: serde_json::Error },

    #[error("Failed to write cache file '{path}': {source}")]
    CacheWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read cache file '{path}': {source}")]
    CacheReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse cache file '{path}': {source}")]
    CacheParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Directory-add validation errors
    #[error("cannot access directory: {path}: {source}")]
    DirectoryInaccessible {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("directory already exists in config: {path}")]
    DuplicateDirectory { path: PathBuf },

    // Dispatch errors
    #[error("No editor found. Set $EDITOR or preferences.defaultEditor")]
    NoEditorFound,

    #[error("Failed to launch '{program}': {source}")]
    LaunchFailed {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    LaunchExitStatus {
        program: String,
        status: std::process::ExitStatus,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Convenience type alias for Results using DenError
pub type Result<T> = std::result::Result<T, DenError>;

impl DenError {
    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_remove_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRemoveFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache directory creation failed error
    pub fn cache_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CacheDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache serialization failed error
    pub fn cache_serialization_failed(source: serde_json::Error) -> Self {
        Self::CacheSerializationFailed { source }
    }

    /// Create a cache write failed error
    pub fn cache_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache read failed error
    pub fn cache_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache parse failed error
    pub fn cache_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::CacheParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a directory inaccessible error
    pub fn directory_inaccessible(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryInaccessible {
            path: path.into(),
            source,
        }
    }

    /// Create a not-a-directory error
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create a duplicate directory error
    pub fn duplicate_directory(path: impl Into<PathBuf>) -> Self {
        Self::DuplicateDirectory { path: path.into() }
    }

    /// Create a launch failed error
    pub fn launch_failed(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::LaunchFailed {
            program: program.into(),
            source,
        }
    }

    /// Create a launch exit status error
    pub fn launch_exit_status(program: impl Into<String>, status: std::process::ExitStatus) -> Self {
        Self::LaunchExitStatus {
            program: program.into(),
            status,
        }
    }
}
