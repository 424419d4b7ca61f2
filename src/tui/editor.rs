//! Multi-line editor component.
//!
//! Wraps a `tui_textarea::TextArea` with an explicit input-capture flag:
//! key events only reach the text while the editor is active, and the
//! cursor is only drawn then.

use std::fmt;

use crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use super::theme::STYLE_CURSOR;

const PLACEHOLDER: &str = "Select a note to view and edit its contents";

pub struct Editor {
    textarea: TextArea<'static>,
    active: bool,
    text_style: Style,
}

impl Editor {
    pub fn new() -> Self {
        let mut editor = Editor {
            textarea: TextArea::default(),
            active: false,
            text_style: Style::default(),
        };
        editor.configure();
        editor
    }

    /// Full text, lines joined with `\n`.
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the text and put the cursor at the start.
    pub fn set_content(&mut self, content: &str) {
        self.textarea = TextArea::new(content.split('\n').map(str::to_string).collect());
        self.configure();
        self.cursor_to_top();
    }

    pub fn clear(&mut self) {
        self.set_content("");
    }

    pub fn cursor_to_top(&mut self) {
        self.textarea.move_cursor(CursorMove::Jump(0, 0));
    }

    /// (row, column) of the cursor.
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start capturing keys.
    pub fn activate(&mut self) {
        self.active = true;
        self.configure();
    }

    /// Stop capturing keys.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.configure();
    }

    /// Feed a key to the text. Ignored while inactive.
    pub fn input(&mut self, key: KeyEvent) {
        if self.active {
            self.textarea.input(key);
        }
    }

    /// Text color, taken from the active palette.
    pub fn set_text_style(&mut self, style: Style) {
        self.text_style = style;
        self.configure();
    }

    /// The wrapped widget, for rendering.
    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    fn configure(&mut self) {
        self.textarea.set_placeholder_text(PLACEHOLDER);
        self.textarea.set_style(self.text_style);
        self.textarea.set_cursor_line_style(Style::default());
        let cursor = if self.active { STYLE_CURSOR } else { self.text_style };
        self.textarea.set_cursor_style(cursor);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new()
    }
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("active", &self.active)
            .field("cursor", &self.cursor())
            .field("lines", &self.textarea.lines().len())
            .finish()
    }
}
