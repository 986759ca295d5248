use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use den::core::cache::DiscoveryCache;
use den::core::config::Config;
use den::core::scanner::{scan, ScanOptions};
use den::session::{Command, ContextAction, Mode, Session, SessionEvent};
use den::tui::Executor;
use std::path::PathBuf;
use std::time::Duration;

mod common;
use common::{assertions::*, fixtures::*};

#[cfg(test)]
mod session_tests {
    use super::*;

    fn press(session: &mut Session, code: KeyCode) -> Vec<Command> {
        session.handle(SessionEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(session: &mut Session, text: &str) {
        for c in text.chars() {
            press(session, KeyCode::Char(c));
        }
    }

    fn prompt_error(session: &Session) -> Option<String> {
        match session.mode() {
            Mode::AddingDirectory(prompt) => prompt.error.clone(),
            _ => None,
        }
    }

    #[test]
    fn test_nonexistent_directory_keeps_prompt_open() -> anyhow::Result<()> {
        let root = create_mixed_root()?;
        let (config_path, _) = state_paths(root.temp_dir.path());
        let mut session = Session::new(Config::default(), config_path, Vec::new());
        assert!(matches!(session.mode(), Mode::AddingDirectory(_)));

        type_text(&mut session, &root.temp_dir.path().join("nope").display().to_string());
        let commands = press(&mut session, KeyCode::Enter);

        assert!(commands.is_empty());
        assert!(matches!(session.mode(), Mode::AddingDirectory(_)));
        assert!(prompt_error(&session).unwrap().contains("cannot access directory"));
        assert!(session.config().project_dirs.is_empty());
        Ok(())
    }

    #[test]
    fn test_file_is_not_a_directory() -> anyhow::Result<()> {
        let root = create_full_root()?;
        let (config_path, _) = state_paths(root.temp_dir.path());
        let mut session = Session::new(Config::default(), config_path, Vec::new());

        type_text(&mut session, &root.child("README.md").display().to_string());
        press(&mut session, KeyCode::Enter);

        assert!(prompt_error(&session).unwrap().contains("not a directory"));
        Ok(())
    }

    #[test]
    fn test_duplicate_directory_is_rejected() -> anyhow::Result<()> {
        let root = create_mixed_root()?;
        let (config_path, _) = state_paths(root.temp_dir.path());
        let config = config_for(&[root.path()]);
        let mut session = Session::new(config.clone(), config_path, Vec::new());

        press(&mut session, KeyCode::Char('a'));
        type_text(&mut session, &root.path.display().to_string());
        let commands = press(&mut session, KeyCode::Enter);

        assert!(commands.is_empty());
        assert!(prompt_error(&session).unwrap().contains("already exists"));
        assert_eq!(session.config(), &config);
        Ok(())
    }

    #[test]
    fn test_tab_completes_from_suggestions() -> anyhow::Result<()> {
        let root = create_mixed_root()?;
        let (config_path, _) = state_paths(root.temp_dir.path());
        let mut session = Session::new(Config::default(), config_path, Vec::new());

        type_text(&mut session, &format!("{}/", root.path.display()));
        type_text(&mut session, "X");
        press(&mut session, KeyCode::Tab);

        match session.mode() {
            Mode::AddingDirectory(prompt) => {
                assert_eq!(prompt.input, format!("{}/", root.child("x").display()));
            }
            other => panic!("expected add-directory prompt, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_added_directory_is_persisted_and_scanned() -> anyhow::Result<()> {
        let root = create_mixed_root()?;
        let (config_path, cache_path) = state_paths(root.temp_dir.path());
        let mut session = Session::new(Config::default(), config_path.clone(), Vec::new());
        let (mut executor, loaded) = Executor::new(config_path.clone(), cache_path.clone());

        type_text(&mut session, &root.path.display().to_string());
        let commands = press(&mut session, KeyCode::Enter);
        assert_eq!(session.mode(), &Mode::Browsing);
        assert!(executor.execute(&mut session, commands).is_none());

        assert_eq!(Config::load_from(&config_path)?.project_dirs, vec![root.path.clone()]);

        let result = loaded.recv_timeout(Duration::from_secs(30))?;
        let commands = session.handle(SessionEvent::ProjectsLoaded(result));
        executor.execute(&mut session, commands);

        assert_eq!(session.list().visible_len(), 2);
        assert_eq!(DiscoveryCache::load_from(&cache_path)?.projects.len(), 2);
        Ok(())
    }

    #[test]
    fn test_toggle_favorite_persists_config_and_cache() -> anyhow::Result<()> {
        let root = create_mixed_root()?;
        let (config_path, cache_path) = state_paths(root.temp_dir.path());
        let config = config_for(&[root.path()]);
        let projects = scan(&config.project_dirs, &ScanOptions::from_config(&config));
        let mut session = Session::new(config, config_path.clone(), projects);
        let (mut executor, _loaded) = Executor::new(config_path.clone(), cache_path.clone());
        let target: PathBuf = root.child("x");

        press(&mut session, KeyCode::Enter);
        let steps = ContextAction::ALL
            .iter()
            .position(|a| *a == ContextAction::ToggleFavorite)
            .unwrap();
        for _ in 0..steps {
            press(&mut session, KeyCode::Down);
        }
        let commands = press(&mut session, KeyCode::Enter);
        executor.execute(&mut session, commands);

        assert_eq!(Config::load_from(&config_path)?.favorites, vec![target.clone()]);
        let cache = DiscoveryCache::load_from(&cache_path)?;
        assert!(cache.find(&target).unwrap().favorite);
        assert!(!cache.find(&root.child("y")).unwrap().favorite);
        assert_eq!(session.status(), Some("Favorite status updated"));
        Ok(())
    }

    #[test]
    fn test_favorites_view_hides_other_projects() -> anyhow::Result<()> {
        let root = create_mixed_root()?;
        let (config_path, _) = state_paths(root.temp_dir.path());
        let mut config = config_for(&[root.path()]);
        config.favorites.push(root.child("y"));
        let projects = scan(&config.project_dirs, &ScanOptions::from_config(&config));
        let mut session = Session::new(config, config_path, projects);

        press(&mut session, KeyCode::Char('F'));

        let visible: Vec<_> = session.list().visible_items().cloned().collect();
        assert_eq!(project_names(&visible), vec!["y"]);
        assert_eq!(session.projects().len(), 2);
        Ok(())
    }
}
