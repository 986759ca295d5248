//! The session controller: one event in, state transition plus commands out.
//!
//! [`Session::handle`] is the only place session state changes. It reads the
//! filesystem for suggestions and directory validation but never writes; all
//! other effects are returned as [`Command`] values for the runtime to execute.

use crate::core::cache::DiscoveryCache;
use crate::core::config::Config;
use crate::core::error::{DenError, Result};
use crate::core::project::Project;
use crate::core::scanner::ScanOptions;
use crate::core::suggest::{expand_home, suggest, SuggestOptions, SuggestionState, DEFAULT_PAGE_SIZE};
use crate::session::command::{Command, ScanRequest, ScanResult};
use crate::session::list::ProjectList;
use crate::session::mode::{ContextAction, ContextMenu, DirectoryPrompt, Mode};
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Key(KeyEvent),
    /// A background rescan finished
    ProjectsLoaded(ScanResult),
}

#[derive(Debug)]
pub struct Session {
    config: Config,
    config_path: PathBuf,
    /// Every known project; the list only ever shows a view of these
    projects: Vec<Project>,
    list: ProjectList,
    mode: Mode,
    favorites_only: bool,
    status: Option<String>,
    /// Generation of the newest rescan requested
    scan_generation: u64,
}

impl Session {
    /// Start a session. With no configured directories the user lands in the
    /// add-directory prompt.
    pub fn new(config: Config, config_path: PathBuf, projects: Vec<Project>) -> Self {
        let list = ProjectList::new(
            config.preferences.project_list_title.clone(),
            projects.clone(),
        );
        let mut session = Self {
            config,
            config_path,
            projects,
            list,
            mode: Mode::Browsing,
            favorites_only: false,
            status: None,
            scan_generation: 0,
        };
        if session.config.project_dirs.is_empty() {
            log::debug!("No project directories configured, starting in add-directory mode");
            session.enter_adding_directory();
        }
        session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn list(&self) -> &ProjectList {
        &self.list
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn favorites_only(&self) -> bool {
        self.favorites_only
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn handle(&mut self, event: SessionEvent) -> Vec<Command> {
        match event {
            SessionEvent::Key(key) => self.handle_key(key),
            SessionEvent::ProjectsLoaded(result) => self.projects_loaded(result),
        }
    }

    /// Record a failed command as the status message.
    pub fn report_failure(&mut self, command: &Command, err: &DenError) {
        log::error!("{}: {err}", command.failure_context());
        self.status = Some(format!("{}: {err}", command.failure_context()));
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        self.status = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Command::Quit];
        }

        log::debug!("Key {:?} in {} mode", key.code, self.mode.name());
        match self.mode {
            Mode::Browsing => self.browsing_key(key),
            Mode::Filtering => self.filtering_key(key),
            Mode::AddingDirectory(_) => self.adding_directory_key(key),
            Mode::ContextMenu(_) => self.context_menu_key(key),
        }
    }

    fn browsing_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Char('q') => return vec![Command::Quit],
            KeyCode::Char('a') => self.enter_adding_directory(),
            KeyCode::Char('.') => return vec![Command::OpenEditor(self.config_path.clone())],
            KeyCode::Char('F') => {
                self.favorites_only = !self.favorites_only;
                self.refresh_view();
            }
            KeyCode::Enter => {
                if let Some(project) = self.list.selected_project() {
                    self.mode = Mode::ContextMenu(ContextMenu::new(project.path.clone()));
                }
            }
            _ => {
                self.list.handle_key(key);
                if self.list.is_filtering() {
                    self.mode = Mode::Filtering;
                }
            }
        }
        Vec::new()
    }

    fn filtering_key(&mut self, key: KeyEvent) -> Vec<Command> {
        self.list.handle_key(key);
        if !self.list.is_filtering() {
            self.mode = Mode::Browsing;
        }
        Vec::new()
    }

    fn adding_directory_key(&mut self, key: KeyEvent) -> Vec<Command> {
        let options = self.suggest_options();
        let Mode::AddingDirectory(prompt) = &mut self.mode else {
            return Vec::new();
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => {
                let input = prompt.input.clone();
                return self.submit_directory(&input);
            }
            KeyCode::Esc => {
                if self.config.project_dirs.is_empty() {
                    return vec![Command::Quit];
                }
                self.mode = Mode::Browsing;
            }
            KeyCode::Tab => {
                if let Some(selected) = prompt.suggestions.selected().map(str::to_string) {
                    prompt.input = selected;
                    refresh_suggestions(prompt, options);
                }
            }
            KeyCode::Up => prompt.suggestions.move_up(),
            KeyCode::Down => prompt.suggestions.move_down(),
            KeyCode::Left => prompt.suggestions.prev_page(),
            KeyCode::Right => prompt.suggestions.next_page(),
            KeyCode::Char('k') if ctrl => prompt.suggestions.move_up(),
            KeyCode::Char('j') if ctrl => prompt.suggestions.move_down(),
            KeyCode::Char('h') if ctrl => prompt.suggestions.prev_page(),
            KeyCode::Char('l') if ctrl => prompt.suggestions.next_page(),
            KeyCode::Char(c) if !ctrl => {
                prompt.input.push(c);
                prompt.error = None;
                refresh_suggestions(prompt, options);
            }
            KeyCode::Backspace => {
                prompt.input.pop();
                prompt.error = None;
                refresh_suggestions(prompt, options);
            }
            _ => {}
        }
        Vec::new()
    }

    fn context_menu_key(&mut self, key: KeyEvent) -> Vec<Command> {
        let Mode::ContextMenu(menu) = &mut self.mode else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => menu.move_up(),
            KeyCode::Down | KeyCode::Char('j') => menu.move_down(),
            KeyCode::Esc => self.mode = Mode::Browsing,
            KeyCode::Enter => {
                let action = menu.selected_action();
                let target = menu.target.clone();
                self.mode = Mode::Browsing;
                return self.dispatch(action, target);
            }
            _ => {}
        }
        Vec::new()
    }

    fn dispatch(&mut self, action: ContextAction, target: PathBuf) -> Vec<Command> {
        log::debug!("Context action {:?} on {}", action, target.display());
        match action {
            ContextAction::OpenEditor => vec![Command::OpenEditor(target)],
            ContextAction::OpenFileExplorer => vec![Command::OpenFileExplorer(target)],
            ContextAction::CopyPath => {
                self.status = Some("Path copied to clipboard".to_string());
                vec![Command::CopyToClipboard(target.display().to_string())]
            }
            ContextAction::ToggleFavorite => self.toggle_favorite(&target),
            ContextAction::Cancel => Vec::new(),
        }
    }

    fn toggle_favorite(&mut self, target: &Path) -> Vec<Command> {
        let Some(project) = self.projects.iter_mut().find(|p| p.is_at(target)) else {
            log::warn!("Favorite toggle for unknown project {}", target.display());
            return Vec::new();
        };

        project.favorite = !project.favorite;
        self.config.set_favorite(target, project.favorite);
        self.refresh_view();
        self.status = Some("Favorite status updated".to_string());

        vec![
            Command::SaveConfig(self.config.clone()),
            Command::SaveCache(DiscoveryCache::from_projects(&self.projects, Utc::now())),
        ]
    }

    fn projects_loaded(&mut self, result: ScanResult) -> Vec<Command> {
        if result.generation != self.scan_generation {
            log::debug!(
                "Ignoring stale rescan {} (latest is {})",
                result.generation,
                self.scan_generation
            );
            return Vec::new();
        }
        let mut projects = result.projects;
        log::debug!("Rescan delivered {} projects", projects.len());
        for project in &mut projects {
            project.favorite = self.config.is_favorite(&project.path);
        }
        self.projects = projects;
        self.refresh_view();
        vec![Command::SaveCache(DiscoveryCache::from_projects(
            &self.projects,
            Utc::now(),
        ))]
    }

    fn submit_directory(&mut self, input: &str) -> Vec<Command> {
        match self.validate_directory(input) {
            Ok(dir) => {
                log::debug!("Adding project directory {}", dir.display());
                self.config.project_dirs.push(dir);
                self.mode = Mode::Browsing;
                self.scan_generation += 1;
                vec![
                    Command::SaveConfig(self.config.clone()),
                    Command::Rescan(ScanRequest {
                        generation: self.scan_generation,
                        directories: self.config.project_dirs.clone(),
                        options: ScanOptions::from_config(&self.config),
                    }),
                ]
            }
            Err(e) => {
                log::debug!("Rejected directory '{input}': {e}");
                if let Mode::AddingDirectory(prompt) = &mut self.mode {
                    prompt.error = Some(e.to_string());
                }
                Vec::new()
            }
        }
    }

    fn validate_directory(&self, input: &str) -> Result<PathBuf> {
        let dir = resolve_directory(input)?;
        let metadata = fs::metadata(&dir).map_err(|e| DenError::directory_inaccessible(&dir, e))?;
        if !metadata.is_dir() {
            return Err(DenError::not_a_directory(dir));
        }
        if self.config.has_project_dir(&dir) {
            return Err(DenError::duplicate_directory(dir));
        }
        Ok(dir)
    }

    fn enter_adding_directory(&mut self) {
        let mut prompt = DirectoryPrompt::default();
        refresh_suggestions(&mut prompt, self.suggest_options());
        self.mode = Mode::AddingDirectory(prompt);
    }

    fn suggest_options(&self) -> SuggestOptions {
        SuggestOptions {
            show_hidden: self.config.preferences.show_hidden_files,
        }
    }

    fn refresh_view(&mut self) {
        let items = self
            .projects
            .iter()
            .filter(|p| !self.favorites_only || p.favorite)
            .cloned()
            .collect();
        self.list.set_items(items);
    }
}

fn refresh_suggestions(prompt: &mut DirectoryPrompt, options: SuggestOptions) {
    prompt.suggestions = SuggestionState::new(suggest(&prompt.input, options), DEFAULT_PAGE_SIZE);
}

/// Absolute, lexically normalized form of a typed directory.
fn resolve_directory(input: &str) -> Result<PathBuf> {
    let expanded = PathBuf::from(expand_home(input.trim()));
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .map_err(|e| DenError::directory_inaccessible(&expanded, e))?
            .join(expanded)
    };
    Ok(normalize_lexically(&absolute))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
