use crate::core::{
    config::Config,
    dirs,
    discovery::discover,
    error::Result,
    git::Git2Probe,
    launcher,
};
use crate::session::Session;
use crate::tui::{self, Exit};

/// Run the interactive session, then perform the dispatch it ended with.
///
/// The editor and file explorer are launched only after the terminal has been
/// restored, so their failures surface as an ordinary error exit.
pub fn execute_browse() -> Result<()> {
    let config_path = dirs::config_file_path()?;
    let cache_path = dirs::cache_file_path()?;

    let config = Config::load_from(&config_path)?;
    let discovery = discover(&config, &cache_path, &Git2Probe);
    log::info!(
        "Starting session with {} projects (source: {:?})",
        discovery.projects.len(),
        discovery.source
    );

    let mut session = Session::new(config, config_path, discovery.projects);
    let exit = tui::run(&mut session, cache_path)?;
    let preferences = &session.config().preferences;

    match exit {
        Exit::Quit => Ok(()),
        Exit::OpenEditor(path) => launcher::open_in_editor(&path, preferences),
        Exit::OpenFileExplorer(path) => launcher::open_in_file_explorer(&path, preferences),
    }
}
