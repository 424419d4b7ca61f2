//! Selectable list component.
//!
//! Holds any entry type that can describe itself for display. Owns the
//! selection; rendering borrows it through [`Picker::list_state`].

use crossterm::event::{KeyCode, KeyEvent};
use humansize::{BINARY, format_size};
use ratatui::widgets::ListState;

use crate::types::{NoteEntry, Palette};

/// Display capability of anything a [`Picker`] can hold.
pub trait ListEntry {
    /// Primary text of the row.
    fn title(&self) -> &str;
    /// Secondary text, shown where the layout has room for it.
    fn description(&self) -> String;
    /// Stable key used to keep the selection across item replacement.
    fn key(&self) -> &str;
}

impl ListEntry for NoteEntry {
    fn title(&self) -> &str {
        &self.display_title
    }

    fn description(&self) -> String {
        format_size(self.size_bytes, BINARY)
    }

    fn key(&self) -> &str {
        &self.filename
    }
}

/// A theme as listed in the settings picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEntry {
    pub id: String,
    pub name: String,
}

impl From<&Palette> for ThemeEntry {
    fn from(palette: &Palette) -> Self {
        ThemeEntry {
            id: palette.file_name.clone(),
            name: palette.name.clone(),
        }
    }
}

impl ListEntry for ThemeEntry {
    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        self.id.clone()
    }

    fn key(&self) -> &str {
        &self.id
    }
}

/// Rows moved by PageUp / PageDown.
const PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Picker<T> {
    items: Vec<T>,
    state: ListState,
}

impl<T: ListEntry> Picker<T> {
    /// Create a picker with the first item selected (if any).
    pub fn new(items: Vec<T>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Picker {
            items,
            state: ListState::default().with_selected(selected),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected(&self) -> Option<&T> {
        self.state.selected().and_then(|i| self.items.get(i))
    }

    /// Selection state for stateful rendering.
    pub fn list_state(&self) -> &ListState {
        &self.state
    }

    /// Replace all items.
    ///
    /// The selection follows the previously selected entry's key when it
    /// is still present, otherwise the index is clamped to the new length.
    pub fn set_items(&mut self, items: Vec<T>) {
        let previous_key = self.selected().map(|e| e.key().to_string());
        let previous_index = self.state.selected().unwrap_or(0);
        self.items = items;

        let by_key = previous_key
            .as_deref()
            .and_then(|key| self.position(key));
        let selected = match by_key {
            Some(i) => Some(i),
            None if self.items.is_empty() => None,
            None => Some(previous_index.min(self.items.len() - 1)),
        };
        self.state.select(selected);
    }

    /// Index of the entry with the given key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|e| e.key() == key)
    }

    /// Select the entry with the given key. Returns false if absent.
    pub fn select_key(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(i) => {
                self.state.select(Some(i));
                true
            }
            None => false,
        }
    }

    pub fn select(&mut self, index: usize) {
        if self.items.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(index.min(self.items.len() - 1)));
        }
    }

    pub fn move_up(&mut self, rows: usize) {
        let current = self.state.selected().unwrap_or(0);
        self.select(current.saturating_sub(rows));
    }

    pub fn move_down(&mut self, rows: usize) {
        let current = self.state.selected().unwrap_or(0);
        self.select(current.saturating_add(rows));
    }

    /// Apply a navigation key. Returns false when the key is not a
    /// navigation key.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(1),
            KeyCode::PageUp => self.move_up(PAGE),
            KeyCode::PageDown => self.move_down(PAGE),
            KeyCode::Home | KeyCode::Char('g') => self.select(0),
            KeyCode::End | KeyCode::Char('G') => self.select(usize::MAX),
            _ => return false,
        }
        true
    }
}
