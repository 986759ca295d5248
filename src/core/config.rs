//! User configuration: project roots, favorites and preferences.
//!
//! The config is a flat JSON document owned by the user. Den reads it at
//! startup, appends to `projectDirs` when a directory is added, adds or removes
//! one entry of `favorites` when a favorite is toggled, and rewrites the whole
//! file on save. Unrelated entries are never reordered or deduplicated.
//!
//! # Public API
//! - [`Config`]: The full document
//! - [`Preferences`]: Display and dispatch preferences
//! - [`Config::load_from`] / [`Config::save_to`]: Persistence at an explicit path

use crate::core::error::{DenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub default_editor: String,
    pub editor_list: Vec<String>,
    pub default_file_manager: String,
    pub show_hidden_files: bool,
    pub show_git_status: bool,
    pub theme: String,
    pub project_list_title: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_editor: default_editor().to_string(),
            editor_list: vec!["code".to_string(), "vim".to_string(), "nano".to_string()],
            default_file_manager: default_file_manager().to_string(),
            show_hidden_files: false,
            show_git_status: true,
            theme: "default".to_string(),
            project_list_title: "Your Projects".to_string(),
        }
    }
}

fn default_editor() -> &'static str {
    match std::env::consts::OS {
        "macos" => "code",
        "windows" => "notepad",
        _ => "vim",
    }
}

fn default_file_manager() -> &'static str {
    match std::env::consts::OS {
        "macos" => "open",
        "windows" => "explorer",
        _ => "xdg-open",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub project_dirs: Vec<PathBuf>,
    pub favorites: Vec<PathBuf>,
    pub preferences: Preferences,
}

impl Config {
    /// Load the config at `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| DenError::config_read_failed(path, e))?;
        let mut config: Config =
            serde_json::from_str(&content).map_err(|e| DenError::config_parse_failed(path, e))?;
        config.fill_missing_preferences();

        log::debug!(
            "Loaded config with {} project directories and {} favorites",
            config.project_dirs.len(),
            config.favorites.len()
        );
        Ok(config)
    }

    /// Serialize the whole config to `path`, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| DenError::config_write_failed(dir, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| DenError::config_write_failed(path, e))?;

        log::debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn is_favorite(&self, path: &Path) -> bool {
        self.favorites.iter().any(|fav| fav == path)
    }

    /// Add or remove `path` from the favorites; returns the new membership.
    pub fn set_favorite(&mut self, path: &Path, favorite: bool) -> bool {
        if favorite {
            if !self.is_favorite(path) {
                self.favorites.push(path.to_path_buf());
            }
        } else {
            self.favorites.retain(|fav| fav != path);
        }
        favorite
    }

    pub fn has_project_dir(&self, path: &Path) -> bool {
        self.project_dirs.iter().any(|dir| dir == path)
    }

    // Empty strings in a hand-edited file mean "use the default".
    fn fill_missing_preferences(&mut self) {
        let defaults = Preferences::default();
        let prefs = &mut self.preferences;

        if prefs.default_editor.is_empty() {
            prefs.default_editor = defaults.default_editor;
        }
        if prefs.default_file_manager.is_empty() {
            prefs.default_file_manager = defaults.default_file_manager;
        }
        if prefs.theme.is_empty() {
            prefs.theme = defaults.theme;
        }
        if prefs.project_list_title.is_empty() {
            prefs.project_list_title = defaults.project_list_title;
        }
        if prefs.editor_list.is_empty() {
            prefs.editor_list = defaults.editor_list;
        }
    }
}
