//! Selectable, filterable project list.
//!
//! The list owns its own text-filter sub-mode: once filtering starts every key
//! goes to the list until the filter is accepted or cancelled. Filtering only
//! hides items; the underlying item sequence is never modified.

use crate::core::project::Project;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const PAGE_STEP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    Unfiltered,
    /// The filter text is being edited
    Filtering,
    /// A non-empty filter is in effect
    FilterApplied,
}

#[derive(Debug, Clone)]
pub struct ProjectList {
    title: String,
    items: Vec<Project>,
    /// Indices into `items` that pass the filter
    visible: Vec<usize>,
    /// Position within `visible`
    selected: usize,
    filter_state: FilterState,
    query: String,
}

impl ProjectList {
    pub fn new(title: impl Into<String>, items: Vec<Project>) -> Self {
        let mut list = Self {
            title: title.into(),
            items: Vec::new(),
            visible: Vec::new(),
            selected: 0,
            filter_state: FilterState::Unfiltered,
            query: String::new(),
        };
        list.set_items(items);
        list
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the items, keeping the selected project selected when it survives.
    pub fn set_items(&mut self, items: Vec<Project>) {
        let previous = self.selected_project().map(|p| p.path.clone());
        self.items = items;
        self.refilter();
        if let Some(path) = previous {
            if let Some(pos) = self.visible.iter().position(|&i| self.items[i].path == path) {
                self.selected = pos;
            }
        }
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &Project> {
        self.visible.iter().map(|&i| &self.items[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.visible.is_empty()).then_some(self.selected)
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.visible.get(self.selected).map(|&i| &self.items[i])
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_filtering(&self) -> bool {
        self.filter_state == FilterState::Filtering
    }

    pub fn start_filtering(&mut self) {
        self.filter_state = FilterState::Filtering;
    }

    pub fn clear_filter(&mut self) {
        self.query.clear();
        self.filter_state = FilterState::Unfiltered;
        self.refilter();
    }

    /// Handle a key; returns false when the key has no meaning for the list.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.is_filtering() {
            return self.handle_filter_key(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(1),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(1),
            KeyCode::PageUp => self.select_prev(PAGE_STEP),
            KeyCode::PageDown => self.select_next(PAGE_STEP),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.visible.len().saturating_sub(1)
            }
            KeyCode::Char('/') => self.start_filtering(),
            KeyCode::Esc if self.filter_state == FilterState::FilterApplied => self.clear_filter(),
            _ => return false,
        }
        true
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => self.clear_filter(),
            KeyCode::Enter => {
                self.filter_state = if self.query.is_empty() {
                    FilterState::Unfiltered
                } else {
                    FilterState::FilterApplied
                };
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.refilter();
            }
            KeyCode::Up => self.select_prev(1),
            KeyCode::Down => self.select_next(1),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.push(c);
                self.refilter();
            }
            _ => return false,
        }
        true
    }

    fn select_prev(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
    }

    fn select_next(&mut self, step: usize) {
        let last = self.visible.len().saturating_sub(1);
        self.selected = (self.selected + step).min(last);
    }

    fn refilter(&mut self) {
        let needle = self.query.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, p)| needle.is_empty() || p.filter_value().to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
    }
}
