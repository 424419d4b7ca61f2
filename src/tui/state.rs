//! TUI state algebra.
//!
//! These types define the whole interaction state space. View and focus
//! are independent enums; the filename prompt is a single optional value,
//! so "prompting" and "prompt purpose" can never disagree.
//!
//! File operations never mutate state directly. The transition function
//! emits [`Command`]s, the effects layer runs them and reports back with
//! an [`AppEvent`], and the transition function folds that outcome in.
//! Whether a command runs inline or on a worker thread is invisible here.

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::themes::ThemeMap;
use crate::types::{NoteEntry, Palette};

use super::editor::Editor;
use super::keys::KeyMap;
use super::picker::{Picker, ThemeEntry};
use super::theme::{self, StyleSet};

/// Initial status line.
pub const STATUS_IDLE: &str = "Select a file to view and edit.";

/// Width of the note list pane, borders included.
pub const LIST_PANE_WIDTH: u16 = 30;

/// Height of the status bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the transition function reacts to.
///
/// `Key` and `Resize` come from the terminal. The rest are outcomes of
/// commands, produced by the effects layer.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
    /// A note was read from disk.
    NoteOpened { filename: String, content: String },
    /// An empty note file was created.
    NoteCreated { filename: String },
    /// Editor content was written to a note file.
    NoteSaved { filename: String },
    /// A note file was removed.
    NoteDeleted { filename: String },
    /// Fresh directory listing.
    NotesListed(Vec<NoteEntry>),
    /// Theme directory was re-read.
    ThemesLoaded(ThemeMap),
    /// A command failed. The message is already human readable.
    OperationFailed { op: FileOp, message: String },
}

/// Which operation an [`AppEvent::OperationFailed`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    CreateDir,
    Create,
    Save,
    Read,
    Delete,
    List,
    LoadThemes,
}

impl FileOp {
    /// Status line prefix for a failure of this operation.
    pub fn failure_prefix(self) -> &'static str {
        match self {
            FileOp::CreateDir => "Error creating directory",
            FileOp::Create => "Error creating file",
            FileOp::Save => "Error saving file",
            FileOp::Read => "Error reading file",
            FileOp::Delete => "Error deleting file",
            FileOp::List => "Error refreshing list",
            FileOp::LoadThemes => "Error loading themes",
        }
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Side effect requested by a transition.
///
/// Pure code never executes these; the effects layer does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read a note into the editor.
    OpenNote { filename: String },
    /// Create an empty note file.
    CreateNote { filename: String },
    /// Write content to a note file.
    SaveNote { filename: String, content: String },
    /// Remove a note file.
    DeleteNote { filename: String },
    /// Re-read the notes directory.
    RefreshNotes,
    /// Re-read the theme directory.
    ReloadThemes,
}

// ============================================================================
// VIEW / FOCUS / PROMPT
// ============================================================================

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Notes,
    Settings,
}

/// Which notes-view pane receives keys. Meaningless outside `Notes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Editor,
}

/// What confirming the filename prompt does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    New,
    Save,
}

/// Filename capture in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPrompt {
    pub purpose: PromptPurpose,
    pub buffer: String,
}

impl InputPrompt {
    /// Maximum filename length accepted by the prompt.
    pub const CHAR_LIMIT: usize = 50;

    pub fn new(purpose: PromptPurpose) -> Self {
        InputPrompt {
            purpose,
            buffer: String::new(),
        }
    }

    /// Append a character unless the limit is reached.
    pub fn push(&mut self, c: char) {
        if self.buffer.chars().count() < Self::CHAR_LIMIT {
            self.buffer.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.buffer.pop();
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Screen regions derived from the terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneLayout {
    pub list: Rect,
    pub editor: Rect,
    pub status: Rect,
    pub help: Rect,
    pub picker: Rect,
}

impl PaneLayout {
    /// Fixed-width list pane on the left, editor filling the rest, then
    /// one status row and the help rows at the bottom.
    pub fn compute(width: u16, height: u16, help_height: u16) -> Self {
        let status_height = STATUS_BAR_HEIGHT.min(height);
        let help_height = help_height.min(height - status_height);
        let main_height = height - status_height - help_height;

        let list_width = LIST_PANE_WIDTH.min(width);

        PaneLayout {
            list: Rect::new(0, 0, list_width, main_height),
            editor: Rect::new(list_width, 0, width - list_width, main_height),
            status: Rect::new(0, main_height, width, status_height),
            help: Rect::new(0, main_height + status_height, width, help_height),
            picker: centered(width, height, width / 2, height / 2),
        }
    }
}

fn centered(width: u16, height: u16, w: u16, h: u16) -> Rect {
    Rect::new((width - w) / 2, (height - h) / 2, w, h)
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model, owned by the event loop.
#[derive(Debug)]
pub struct App {
    pub view: AppView,
    pub focus: Focus,
    /// Present exactly while a filename is being captured.
    pub prompt: Option<InputPrompt>,

    pub notes: Picker<NoteEntry>,
    pub editor: Editor,
    /// Note the editor content belongs to. None until one is opened or created.
    pub current_file: Option<String>,
    pub status: String,

    pub themes: ThemeMap,
    pub theme_picker: Picker<ThemeEntry>,
    pub palette: Palette,
    pub styles: StyleSet,

    pub keys: KeyMap,
    pub width: u16,
    pub height: u16,
    pub layout: PaneLayout,

    /// Set when the app should exit; nothing is rendered afterwards.
    pub should_quit: bool,
}

impl App {
    /// Create the app on the notes view with the list focused.
    pub fn new(notes: Vec<NoteEntry>, themes: ThemeMap, palette: Palette) -> Self {
        let styles = theme::build(&palette);
        let mut editor = Editor::new();
        editor.set_text_style(styles.editor_text);
        let theme_picker = Picker::new(themes.values().map(ThemeEntry::from).collect());

        App {
            view: AppView::Notes,
            focus: Focus::List,
            prompt: None,
            notes: Picker::new(notes),
            editor,
            current_file: None,
            status: STATUS_IDLE.to_string(),
            themes,
            theme_picker,
            palette,
            styles,
            keys: KeyMap::default(),
            width: 0,
            height: 0,
            layout: PaneLayout::default(),
            should_quit: false,
        }
    }

    /// True while the filename prompt captures input.
    pub fn inputting(&self) -> bool {
        self.prompt.is_some()
    }

    /// Move focus, coupling it to the editor's input capture.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::Editor => self.editor.activate(),
            Focus::List => self.editor.deactivate(),
        }
    }

    /// Make `palette` active and rebuild every derived style.
    pub fn apply_palette(&mut self, palette: Palette) {
        self.styles = theme::build(&palette);
        self.editor.set_text_style(self.styles.editor_text);
        self.palette = palette;
    }
}

// ============================================================================
// TESTS
// ============================================================================
