//! Logical key bindings.
//!
//! The state machine matches keys against a [`KeyMap`] instead of raw
//! key codes, so bindings can be remapped without touching transitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One physical key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    pub const fn plain(code: KeyCode) -> Self {
        KeyChord {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub const fn ctrl(c: char) -> Self {
        KeyChord {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Shift is ignored: terminals report it inconsistently for characters.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let mut pressed = key.modifiers;
        pressed.remove(KeyModifiers::SHIFT);
        let mut wanted = self.modifiers;
        wanted.remove(KeyModifiers::SHIFT);
        self.code == key.code && pressed == wanted
    }
}

/// A logical action bound to one or more chords, with its help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyChord>,
    pub label: &'static str,
    pub help: &'static str,
}

impl Binding {
    pub fn new(keys: Vec<KeyChord>, label: &'static str, help: &'static str) -> Self {
        Binding { keys, label, help }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.keys.iter().any(|chord| chord.matches(key))
    }
}

/// The full set of bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub new: Binding,
    pub delete: Binding,
    pub save: Binding,
    pub quit: Binding,
    pub switch: Binding,
    pub top: Binding,
    pub select: Binding,
    pub settings: Binding,
    pub cancel: Binding,
    pub reload: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        KeyMap {
            new: Binding::new(
                vec![KeyChord::plain(KeyCode::Char('n'))],
                "n",
                "Create new note",
            ),
            delete: Binding::new(
                vec![KeyChord::plain(KeyCode::Char('d'))],
                "d",
                "Delete note",
            ),
            save: Binding::new(vec![KeyChord::ctrl('s')], "ctrl+s", "Save note"),
            quit: Binding::new(
                vec![KeyChord::plain(KeyCode::Char('q')), KeyChord::ctrl('c')],
                "q/ctrl+c",
                "Quit Terminotes",
            ),
            switch: Binding::new(vec![KeyChord::plain(KeyCode::Tab)], "tab", "Switch focus"),
            top: Binding::new(vec![KeyChord::ctrl('t')], "ctrl+t", "Return to top"),
            select: Binding::new(vec![KeyChord::plain(KeyCode::Enter)], "enter", "Select note"),
            settings: Binding::new(vec![KeyChord::ctrl('o')], "ctrl+o", "Themes"),
            cancel: Binding::new(vec![KeyChord::plain(KeyCode::Esc)], "esc", "Cancel"),
            reload: Binding::new(
                vec![KeyChord::plain(KeyCode::Char('r'))],
                "r",
                "Reload themes",
            ),
        }
    }
}

impl KeyMap {
    /// Bindings shown in the notes view help line, in display order.
    pub fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.quit,
            &self.switch,
            &self.new,
            &self.delete,
            &self.save,
            &self.top,
            &self.select,
            &self.settings,
        ]
    }

    /// Pack the help entries into rows no wider than `width`.
    ///
    /// Always returns at least one row.
    pub fn help_rows(&self, width: u16) -> Vec<Vec<&Binding>> {
        let width = width as usize;
        let mut rows: Vec<Vec<&Binding>> = vec![Vec::new()];
        let mut used = 0;

        for binding in self.short_help() {
            let item = help_item_width(binding);
            let needed = if used == 0 { item } else { HELP_SEPARATOR.chars().count() + item };
            if used > 0 && used + needed > width {
                rows.push(Vec::new());
                used = item;
            } else {
                used += needed;
            }
            if let Some(row) = rows.last_mut() {
                row.push(binding);
            }
        }

        rows
    }

    /// Rendered height of the help line at the given width.
    pub fn help_height(&self, width: u16) -> u16 {
        self.help_rows(width).len() as u16
    }
}

/// Separator between help entries.
pub const HELP_SEPARATOR: &str = " • ";

fn help_item_width(binding: &Binding) -> usize {
    binding.label.chars().count() + 1 + binding.help.chars().count()
}

/// True for keys that type a character into a text field.
///
/// While the editor or the filename prompt captures input, such keys are
/// never interpreted as bindings.
pub fn is_text_input(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
