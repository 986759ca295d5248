//! User-scoped locations for den's config, cache and log files.

use crate::core::error::{DenError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "den";
const CONFIG_FILE: &str = "config.json";
const CACHE_FILE: &str = "projects.json";
const LOG_FILE: &str = "debug.log";

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(DenError::HomeDirectoryNotFound)
}

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => match std::env::var("XDG_CONFIG_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => home_dir()?.join(".config"),
        },
        "macos" => home_dir()?.join("Library/Application Support"),
        _ => dirs::config_dir().ok_or(DenError::HomeDirectoryNotFound)?,
    };

    Ok(base.join(APP_DIR))
}

pub fn get_cache_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => match std::env::var("XDG_CACHE_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => home_dir()?.join(".cache"),
        },
        "macos" => home_dir()?.join("Library/Caches"),
        _ => dirs::cache_dir().ok_or(DenError::HomeDirectoryNotFound)?,
    };

    Ok(base.join(APP_DIR))
}

/// Path of the JSON config file
pub fn config_file_path() -> Result<PathBuf> {
    Ok(get_config_directory()?.join(CONFIG_FILE))
}

/// Path of the discovery cache file
pub fn cache_file_path() -> Result<PathBuf> {
    Ok(get_cache_directory()?.join(CACHE_FILE))
}

/// Path of the debug log written while the terminal session owns the screen
pub fn log_file_path() -> Result<PathBuf> {
    Ok(get_cache_directory()?.join(LOG_FILE))
}
