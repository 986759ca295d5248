//! Terminal runtime: owns the terminal, feeds events into the session and
//! executes the commands it returns.
//!
//! The loop is single threaded. Rescans run on worker threads and report back
//! through a channel that is drained between input polls, so a slow scan never
//! blocks rendering.

use crate::core::error::Result;
use crate::core::launcher::SessionClipboard;
use crate::core::scanner::scan;
use crate::session::{Command, ScanRequest, ScanResult, Session, SessionEvent};
use crate::tui::theme::Theme;
use crate::tui::view;
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::panic;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(150);

type Backend = CrosstermBackend<Stdout>;

/// How the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    Quit,
    OpenEditor(PathBuf),
    OpenFileExplorer(PathBuf),
}

/// Executes session commands against the filesystem, clipboard and scanner.
pub struct Executor {
    config_path: PathBuf,
    cache_path: PathBuf,
    clipboard: SessionClipboard,
    loaded_tx: Sender<ScanResult>,
}

impl Executor {
    pub fn new(config_path: PathBuf, cache_path: PathBuf) -> (Self, Receiver<ScanResult>) {
        let (loaded_tx, loaded_rx) = channel();
        let executor = Self {
            config_path,
            cache_path,
            clipboard: SessionClipboard::default(),
            loaded_tx,
        };
        (executor, loaded_rx)
    }

    /// Run `commands` in order; the first session-ending command stops the run.
    pub fn execute(&mut self, session: &mut Session, commands: Vec<Command>) -> Option<Exit> {
        for command in commands {
            let result = match &command {
                Command::Quit => return Some(Exit::Quit),
                Command::OpenEditor(path) => return Some(Exit::OpenEditor(path.clone())),
                Command::OpenFileExplorer(path) => {
                    return Some(Exit::OpenFileExplorer(path.clone()))
                }
                Command::SaveConfig(config) => config.save_to(&self.config_path),
                Command::SaveCache(cache) => cache.save_to(&self.cache_path),
                Command::CopyToClipboard(text) => self.clipboard.copy(text),
                Command::Rescan(request) => {
                    self.spawn_rescan(request.clone());
                    Ok(())
                }
            };
            if let Err(e) = result {
                session.report_failure(&command, &e);
            }
        }
        None
    }

    fn spawn_rescan(&self, request: ScanRequest) {
        let tx = self.loaded_tx.clone();
        log::debug!(
            "Starting rescan {} of {} directories",
            request.generation,
            request.directories.len()
        );
        thread::spawn(move || {
            let projects = scan(&request.directories, &request.options);
            // The receiver is gone once the session has ended.
            let _ = tx.send(ScanResult {
                generation: request.generation,
                projects,
            });
        });
    }
}

/// Raw mode plus the alternate screen, left again on drop.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, Show)?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Put the terminal back before the panic message is printed.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

/// Run `session` in the terminal until it ends, restoring the terminal on the
/// way out regardless of the outcome.
pub fn run(session: &mut Session, cache_path: PathBuf) -> Result<Exit> {
    let theme = Theme::named(&session.config().preferences.theme);
    let (mut executor, loaded_rx) =
        Executor::new(session.config_path().to_path_buf(), cache_path);

    let mut guard = TerminalGuard::enter()?;
    install_panic_hook();
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let result = event_loop(&mut terminal, session, &mut executor, &loaded_rx, &theme);
    guard.restore()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<Backend>,
    session: &mut Session,
    executor: &mut Executor,
    loaded_rx: &Receiver<ScanResult>,
    theme: &Theme,
) -> Result<Exit> {
    loop {
        while let Ok(result) = loaded_rx.try_recv() {
            let commands = session.handle(SessionEvent::ProjectsLoaded(result));
            if let Some(exit) = executor.execute(session, commands) {
                return Ok(exit);
            }
        }

        terminal.draw(|frame| view::render(frame, session, theme))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        // Resizes need nothing beyond the redraw at the top of the loop.
        let session_event = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => SessionEvent::Key(key),
            _ => continue,
        };

        let commands = session.handle(session_event);
        if let Some(exit) = executor.execute(session, commands) {
            log::debug!("Session ended: {exit:?}");
            return Ok(exit);
        }
    }
}
