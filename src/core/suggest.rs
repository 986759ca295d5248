//! Directory autocompletion for the add-directory prompt.
//!
//! [`suggest`] lists the immediate subdirectories matching a partially typed
//! path. [`SuggestionState`] is a paged, selectable view over one result set;
//! it is rebuilt whenever the input text changes.
//!
//! # Public API
//! - [`suggest`]: Candidate directories for a partial path
//! - [`SuggestOptions`]: Hidden-directory switch
//! - [`SuggestionState`]: Paging and selection over suggestions
//! - [`expand_home`]: `~` expansion shared with directory validation

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestOptions {
    pub show_hidden: bool,
}

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Replace a leading `~` with the home directory.
pub fn expand_home(input: &str) -> String {
    let rest = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with(MAIN_SEPARATOR) => rest,
        _ => return input.to_string(),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => format!("{}{MAIN_SEPARATOR}", home.display()),
        Some(home) => format!("{}{rest}", home.display()),
        None => input.to_string(),
    }
}

/// Subdirectories completing `partial`, each with a trailing separator.
///
/// Results come back in directory enumeration order; callers must not rely on
/// them being sorted. Unreadable directories yield no suggestions.
pub fn suggest(partial: &str, options: SuggestOptions) -> Vec<String> {
    let partial = expand_home(partial);

    // Split on the raw text: `Path` would fold a trailing `.` or `..` away.
    let (dir, filter) = if partial.is_empty() {
        (PathBuf::from(MAIN_SEPARATOR_STR), String::new())
    } else {
        let cut = partial.rfind(is_separator).map_or(0, |i| i + 1);
        let (dir, last) = partial.split_at(cut);
        (PathBuf::from(dir), last.to_lowercase())
    };

    let listing = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir.as_path()
    };

    let entries = match fs::read_dir(listing) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("No suggestions for '{}': {e}", listing.display());
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !options.show_hidden && name.starts_with('.') {
                return None;
            }
            if !filter.is_empty() && !name.to_lowercase().starts_with(&filter) {
                return None;
            }
            Some(format!("{}{MAIN_SEPARATOR}", dir.join(&name).display()))
        })
        .collect()
}

/// Paged selection over a suggestion list.
///
/// The selected index always lies inside the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionState {
    suggestions: Vec<String>,
    selected: usize,
    page: usize,
    page_size: usize,
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}

impl SuggestionState {
    pub fn new(suggestions: Vec<String>, page_size: usize) -> Self {
        Self {
            suggestions,
            selected: 0,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.suggestions.len().div_ceil(self.page_size)
    }

    /// Indices of the suggestions on the current page
    pub fn page_range(&self) -> Range<usize> {
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(self.suggestions.len());
        start..end
    }

    pub fn selected(&self) -> Option<&str> {
        self.suggestions.get(self.selected).map(String::as_str)
    }

    pub fn move_up(&mut self) {
        let range = self.page_range();
        if range.is_empty() {
            return;
        }
        self.selected = if self.selected <= range.start {
            range.end - 1
        } else {
            self.selected - 1
        };
    }

    pub fn move_down(&mut self) {
        let range = self.page_range();
        if range.is_empty() {
            return;
        }
        self.selected = if self.selected + 1 >= range.end {
            range.start
        } else {
            self.selected + 1
        };
    }

    pub fn next_page(&mut self) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        self.page = (self.page + 1) % pages;
        self.selected = self.page * self.page_size;
    }

    pub fn prev_page(&mut self) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        self.page = if self.page == 0 { pages - 1 } else { self.page - 1 };
        self.selected = self.page * self.page_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> std::io::Result<TempDir> {
        let temp = TempDir::new()?;
        for dir in ["Alpha", "alpine", "beta", ".hidden"] {
            fs::create_dir(temp.path().join(dir))?;
        }
        fs::write(temp.path().join("also-a-file"), "x")?;
        Ok(temp)
    }

    fn sorted(mut items: Vec<String>) -> Vec<String> {
        items.sort();
        items
    }

    fn dir_prefix(temp: &TempDir) -> String {
        format!("{}{MAIN_SEPARATOR}", temp.path().display())
    }

    #[test]
    fn test_trailing_separator_lists_directory() -> std::io::Result<()> {
        let temp = fixture()?;
        let base = dir_prefix(&temp);

        let results = sorted(suggest(&base, SuggestOptions::default()));
        assert_eq!(
            results,
            vec![
                format!("{base}Alpha{MAIN_SEPARATOR}"),
                format!("{base}alpine{MAIN_SEPARATOR}"),
                format!("{base}beta{MAIN_SEPARATOR}"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_prefix_filter_is_case_insensitive() -> std::io::Result<()> {
        let temp = fixture()?;
        let base = dir_prefix(&temp);

        let results = sorted(suggest(&format!("{base}AL"), SuggestOptions::default()));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|s| s.ends_with(MAIN_SEPARATOR)));
        Ok(())
    }

    #[test]
    fn test_hidden_directories_need_opt_in() -> std::io::Result<()> {
        let temp = fixture()?;
        let base = dir_prefix(&temp);

        let hidden = format!("{base}.hidden{MAIN_SEPARATOR}");
        assert!(!suggest(&base, SuggestOptions::default()).contains(&hidden));
        assert!(suggest(&base, SuggestOptions { show_hidden: true }).contains(&hidden));
        Ok(())
    }

    #[test]
    fn test_trailing_dot_filters_hidden_entries_of_that_directory() -> std::io::Result<()> {
        let temp = TempDir::new()?;
        for dir in ["u/.config", "u/code", "unrelated"] {
            fs::create_dir_all(temp.path().join(dir))?;
        }
        let user = temp.path().join("u");
        let hidden = SuggestOptions { show_hidden: true };

        let results = suggest(&format!("{}{MAIN_SEPARATOR}.", user.display()), hidden);
        assert_eq!(results, vec![format!("{}{MAIN_SEPARATOR}", user.join(".config").display())]);

        assert!(suggest(&format!("{}{MAIN_SEPARATOR}..", user.display()), hidden).is_empty());
        Ok(())
    }

    #[test]
    fn test_unreadable_directory_yields_nothing() {
        assert!(suggest("/definitely/not/here/", SuggestOptions::default()).is_empty());
    }

    #[test]
    fn test_expand_home_only_touches_leading_tilde() {
        assert_eq!(expand_home("/tmp/~x"), "/tmp/~x");
        assert_eq!(expand_home("~user"), "~user");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/code"), format!("{}/code", home.display()));
        }
    }

    fn numbered(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("/dir{i}/")).collect()
    }

    #[test]
    fn test_movement_wraps_within_page() {
        let mut state = SuggestionState::new(numbered(5), 2);
        state.move_up();
        assert_eq!(state.selected_index(), 1);
        state.move_down();
        assert_eq!(state.selected_index(), 0);

        state.prev_page();
        assert_eq!(state.page(), 2);
        assert_eq!(state.selected_index(), 4);
        state.move_down();
        assert_eq!(state.selected_index(), 4);

        state.next_page();
        assert_eq!(state.page(), 0);
        assert_eq!(state.selected(), Some("/dir0/"));
    }

    #[test]
    fn test_selection_stays_on_current_page() {
        let mut state = SuggestionState::new(numbered(23), 5);
        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            match (seed >> 16) % 4 {
                0 => state.move_up(),
                1 => state.move_down(),
                2 => state.next_page(),
                _ => state.prev_page(),
            }
            assert!(state.page_range().contains(&state.selected_index()));
        }
        assert_eq!(state.page_count(), 5);
    }

    #[test]
    fn test_empty_state_ignores_movement() {
        let mut state = SuggestionState::default();
        state.move_down();
        state.next_page();
        assert_eq!(state.selected(), None);
        assert_eq!(state.page_count(), 0);
    }
}
