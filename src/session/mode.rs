//! The single active interaction mode and its mode-scoped data.
//!
//! Each mode carries only the state that is meaningful while it is active, so
//! combinations such as "adding a directory while the context menu is open"
//! cannot be constructed.

use crate::core::suggest::SuggestionState;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Moving through the project list
    Browsing,
    /// The list view owns the keyboard while its filter is being edited
    Filtering,
    AddingDirectory(DirectoryPrompt),
    ContextMenu(ContextMenu),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Browsing => "browsing",
            Mode::Filtering => "filtering",
            Mode::AddingDirectory(_) => "adding-directory",
            Mode::ContextMenu(_) => "context-menu",
        }
    }
}

/// Input state of the add-directory prompt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryPrompt {
    pub input: String,
    pub suggestions: SuggestionState,
    /// Last validation error, shown inline
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    OpenEditor,
    OpenFileExplorer,
    CopyPath,
    ToggleFavorite,
    Cancel,
}

impl ContextAction {
    pub const ALL: [ContextAction; 5] = [
        ContextAction::OpenEditor,
        ContextAction::OpenFileExplorer,
        ContextAction::CopyPath,
        ContextAction::ToggleFavorite,
        ContextAction::Cancel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContextAction::OpenEditor => "Editor",
            ContextAction::OpenFileExplorer => "File Explorer",
            ContextAction::CopyPath => "Copy Path",
            ContextAction::ToggleFavorite => "Toggle Favorite",
            ContextAction::Cancel => "Cancel",
        }
    }
}

/// Action menu for the project that was selected when the menu opened
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    pub cursor: usize,
    pub target: PathBuf,
}

impl ContextMenu {
    pub fn new(target: PathBuf) -> Self {
        Self { cursor: 0, target }
    }

    pub fn selected_action(&self) -> ContextAction {
        ContextAction::ALL[self.cursor % ContextAction::ALL.len()]
    }

    pub fn move_up(&mut self) {
        let len = ContextAction::ALL.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % ContextAction::ALL.len();
    }
}
