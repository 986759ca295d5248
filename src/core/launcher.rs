//! Dispatch to external programs: editor, file explorer and clipboard.
//!
//! Launches are synchronous. The editor inherits the standard streams and is
//! waited on, so callers must hand the terminal back before calling
//! [`open_in_editor`].

use crate::core::config::Preferences;
use crate::core::error::{DenError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Pick the editor: `$EDITOR`, then the configured default, then the first
/// entry of the editor list found on `PATH`.
pub fn resolve_editor(prefs: &Preferences, env_editor: Option<String>) -> Result<String> {
    if let Some(editor) = env_editor.filter(|e| !e.trim().is_empty()) {
        return Ok(editor);
    }
    if !prefs.default_editor.is_empty() {
        return Ok(prefs.default_editor.clone());
    }
    prefs
        .editor_list
        .iter()
        .find(|candidate| find_in_path(candidate).is_some())
        .cloned()
        .ok_or(DenError::NoEditorFound)
}

/// File manager program: the configured one or the OS default.
pub fn resolve_file_manager(prefs: &Preferences) -> String {
    if !prefs.default_file_manager.is_empty() {
        return prefs.default_file_manager.clone();
    }
    match std::env::consts::OS {
        "macos" => "open",
        "windows" => "explorer",
        _ => "xdg-open",
    }
    .to_string()
}

fn find_in_path(program: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

// `$EDITOR` may carry arguments, e.g. "code --wait".
fn build_command(command_line: &str, path: &Path) -> Option<(String, Command)> {
    let mut parts = command_line.split_whitespace();
    let program = parts.next()?.to_string();
    let mut cmd = Command::new(&program);
    cmd.args(parts).arg(path.as_os_str());
    Some((program, cmd))
}

fn run(program: &str, mut cmd: Command) -> Result<()> {
    log::debug!("Launching {program}");
    let status = cmd
        .status()
        .map_err(|e| DenError::launch_failed(program, e))?;
    if !status.success() {
        return Err(DenError::launch_exit_status(program, status));
    }
    Ok(())
}

pub fn open_in_editor(path: &Path, prefs: &Preferences) -> Result<()> {
    let editor = resolve_editor(prefs, std::env::var("EDITOR").ok())?;
    let (program, mut cmd) = build_command(&editor, path).ok_or(DenError::NoEditorFound)?;
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    run(&program, cmd)
}

pub fn open_in_file_explorer(path: &Path, prefs: &Preferences) -> Result<()> {
    let manager = resolve_file_manager(prefs);
    let (program, cmd) = build_command(&manager, path)
        .ok_or_else(|| DenError::launch_failed(manager.clone(), missing_program()))?;
    run(&program, cmd)
}

fn missing_program() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::NotFound, "empty command")
}

/// Clipboard connection held for the whole session.
///
/// On X11 and Wayland the copied text is served by this process, so it stays
/// pasteable only while the connection is open (or a clipboard manager has
/// taken it over).
#[derive(Default)]
pub struct SessionClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SessionClipboard {
    /// Whether a connection has been opened and kept
    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }

    pub fn copy(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard.set_text(text.to_string())?;
        log::debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}
