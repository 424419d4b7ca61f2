//! State transitions: (App, AppEvent) → commands.
//!
//! This is the core logic of the TUI. Fully testable without a terminal
//! or a filesystem: file work is requested through [`Command`]s and its
//! outcome arrives later as another [`AppEvent`].
//!
//! Key routing, in order:
//! 1. a quit chord (non-text quit binding) always quits
//! 2. the filename prompt, when present, swallows everything else
//! 3. the settings view
//! 4. the notes view, split by focus

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, warn};

use crate::notes::{NOTE_EXTENSION, is_plain_filename};
use crate::themes::ThemeMap;
use crate::types::NoteEntry;

use super::keys::is_text_input;
use super::picker::ThemeEntry;
use super::state::{
    App, AppEvent, AppView, Command, FileOp, Focus, InputPrompt, PaneLayout, PromptPurpose,
    STATUS_IDLE,
};

const STATUS_SETTINGS: &str = "Settings - Press Enter to select a theme, Esc to return";

/// Apply one event to the app and return the commands it requests.
pub fn update(app: &mut App, event: AppEvent) -> Vec<Command> {
    update_at(app, event, Local::now())
}

/// [`update`] with an explicit clock, for default filenames.
pub fn update_at(app: &mut App, event: AppEvent, now: DateTime<Local>) -> Vec<Command> {
    if app.should_quit {
        return Vec::new();
    }

    match event {
        AppEvent::Key(key) => handle_key(app, key, now),
        AppEvent::Resize { width, height } => {
            resize(app, width, height);
            Vec::new()
        }
        outcome => handle_outcome(app, outcome),
    }
}

/// Resolve a filename typed at the prompt.
///
/// Empty input becomes `note-<YYYY-MM-DD-HH-MM-SS>.md`; anything else
/// gets `.md` appended unless it already ends with it.
pub fn resolve_filename(input: &str, now: DateTime<Local>) -> String {
    if input.is_empty() {
        format!("note-{}{}", now.format("%Y-%m-%d-%H-%M-%S"), NOTE_EXTENSION)
    } else if input.ends_with(NOTE_EXTENSION) {
        input.to_string()
    } else {
        format!("{input}{NOTE_EXTENSION}")
    }
}

// ============================================================================
// KEYS
// ============================================================================

fn handle_key(app: &mut App, key: KeyEvent, now: DateTime<Local>) -> Vec<Command> {
    if !is_text_input(&key) && app.keys.quit.matches(&key) {
        app.should_quit = true;
        return Vec::new();
    }

    if app.inputting() {
        return handle_prompt_key(app, key, now);
    }

    match app.view {
        AppView::Settings => handle_settings_key(app, key),
        AppView::Notes => {
            if app.keys.settings.matches(&key) {
                open_settings(app);
                return Vec::new();
            }
            if app.keys.switch.matches(&key) {
                toggle_focus(app);
                return Vec::new();
            }
            match app.focus {
                Focus::List => handle_list_key(app, key),
                Focus::Editor => handle_editor_key(app, key),
            }
        }
    }
}

/// Filename prompt: confirm, cancel, or edit the buffer.
fn handle_prompt_key(app: &mut App, key: KeyEvent, now: DateTime<Local>) -> Vec<Command> {
    if app.keys.select.matches(&key) {
        return confirm_prompt(app, now);
    }
    if app.keys.cancel.matches(&key) {
        app.prompt = None;
        app.status = "Filename input cancelled.".to_string();
        return Vec::new();
    }

    if let Some(prompt) = app.prompt.as_mut() {
        match key.code {
            KeyCode::Char(c) if is_text_input(&key) => prompt.push(c),
            KeyCode::Backspace => prompt.pop(),
            _ => {}
        }
    }
    Vec::new()
}

fn handle_settings_key(app: &mut App, key: KeyEvent) -> Vec<Command> {
    if app.keys.select.matches(&key) {
        if let Some(id) = app.theme_picker.selected().map(|e| e.id.clone()) {
            apply_theme(app, &id);
        }
        app.view = AppView::Notes;
        return Vec::new();
    }
    if app.keys.cancel.matches(&key) {
        app.view = AppView::Notes;
        app.status = STATUS_IDLE.to_string();
        return Vec::new();
    }
    if app.keys.quit.matches(&key) {
        app.should_quit = true;
        return Vec::new();
    }
    if app.keys.reload.matches(&key) {
        return vec![Command::ReloadThemes];
    }

    app.theme_picker.handle_key(&key);
    Vec::new()
}

fn handle_list_key(app: &mut App, key: KeyEvent) -> Vec<Command> {
    if app.keys.quit.matches(&key) {
        app.should_quit = true;
        Vec::new()
    } else if app.keys.new.matches(&key) {
        app.prompt = Some(InputPrompt::new(PromptPurpose::New));
        Vec::new()
    } else if app.keys.delete.matches(&key) {
        match app.notes.selected() {
            Some(entry) => vec![Command::DeleteNote {
                filename: entry.filename.clone(),
            }],
            None => Vec::new(),
        }
    } else if app.keys.select.matches(&key) {
        match app.notes.selected() {
            Some(entry) => vec![Command::OpenNote {
                filename: entry.filename.clone(),
            }],
            None => Vec::new(),
        }
    } else if app.keys.save.matches(&key) {
        save(app)
    } else if app.keys.top.matches(&key) {
        cursor_to_top(app);
        Vec::new()
    } else {
        app.notes.handle_key(&key);
        Vec::new()
    }
}

/// Editor focus: printable keys always go to the text.
fn handle_editor_key(app: &mut App, key: KeyEvent) -> Vec<Command> {
    if is_text_input(&key) {
        app.editor.input(key);
        return Vec::new();
    }

    if app.keys.save.matches(&key) {
        save(app)
    } else if app.keys.top.matches(&key) {
        cursor_to_top(app);
        Vec::new()
    } else {
        app.editor.input(key);
        Vec::new()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

fn toggle_focus(app: &mut App) {
    let next = match app.focus {
        Focus::List => Focus::Editor,
        Focus::Editor => Focus::List,
    };
    app.set_focus(next);
}

fn cursor_to_top(app: &mut App) {
    app.editor.cursor_to_top();
    app.status = "Moved cursor to top".to_string();
}

/// Save to the current file, or ask for a name when there is none.
fn save(app: &mut App) -> Vec<Command> {
    match &app.current_file {
        Some(filename) => vec![Command::SaveNote {
            filename: filename.clone(),
            content: app.editor.content(),
        }],
        None => {
            app.prompt = Some(InputPrompt::new(PromptPurpose::Save));
            Vec::new()
        }
    }
}

fn confirm_prompt(app: &mut App, now: DateTime<Local>) -> Vec<Command> {
    let Some(prompt) = app.prompt.take() else {
        return Vec::new();
    };
    let filename = resolve_filename(&prompt.buffer, now);

    if !is_plain_filename(&filename) {
        let op = match prompt.purpose {
            PromptPurpose::New => FileOp::Create,
            PromptPurpose::Save => FileOp::Save,
        };
        warn!(filename = %filename, "rejected filename");
        app.status = format!("{}: invalid filename", op.failure_prefix());
        return Vec::new();
    }

    app.current_file = Some(filename.clone());

    match prompt.purpose {
        PromptPurpose::New => {
            app.editor.clear();
            app.status = format!("New note: {filename}");
            app.set_focus(Focus::Editor);
            vec![Command::CreateNote { filename }]
        }
        PromptPurpose::Save => {
            app.status = format!("Saving as: {filename}");
            vec![Command::SaveNote {
                filename,
                content: app.editor.content(),
            }]
        }
    }
}

fn open_settings(app: &mut App) {
    app.view = AppView::Settings;
    let active = app.palette.file_name.clone();
    app.theme_picker.select_key(&active);
    app.status = STATUS_SETTINGS.to_string();
}

/// Switch to the palette with the given id, if it still exists.
fn apply_theme(app: &mut App, id: &str) {
    match app.themes.get(id).cloned() {
        Some(palette) => {
            app.status = format!("Theme changed to {}", palette.name);
            app.apply_palette(palette);
        }
        None => {
            app.status = format!("Error: Theme {id} not found");
        }
    }
}

fn resize(app: &mut App, width: u16, height: u16) {
    app.width = width;
    app.height = height;
    let help_height = app.keys.help_height(width);
    app.layout = PaneLayout::compute(width, height, help_height);
}

// ============================================================================
// OUTCOMES
// ============================================================================

fn handle_outcome(app: &mut App, outcome: AppEvent) -> Vec<Command> {
    match outcome {
        AppEvent::NoteOpened { filename, content } => {
            app.editor.set_content(&content);
            app.status = format!("Editing {filename}");
            app.current_file = Some(filename);
            Vec::new()
        }
        AppEvent::NoteCreated { .. } => vec![Command::RefreshNotes],
        AppEvent::NoteSaved { filename } => {
            app.status = format!("Saved: {filename}");
            vec![Command::RefreshNotes]
        }
        AppEvent::NoteDeleted { filename } => {
            if app.current_file.as_deref() == Some(filename.as_str()) {
                app.current_file = None;
                app.editor.clear();
            }
            app.status = format!("Deleted: {filename}");
            vec![Command::RefreshNotes]
        }
        AppEvent::NotesListed(entries) => {
            set_notes(app, entries);
            Vec::new()
        }
        AppEvent::ThemesLoaded(themes) => {
            set_themes(app, themes);
            Vec::new()
        }
        AppEvent::OperationFailed { op, message } => {
            app.status = format!("{}: {message}", op.failure_prefix());
            Vec::new()
        }
        AppEvent::Key(_) | AppEvent::Resize { .. } => Vec::new(),
    }
}

fn set_notes(app: &mut App, entries: Vec<NoteEntry>) {
    debug!(count = entries.len(), "note list refreshed");
    app.notes.set_items(entries);
}

fn set_themes(app: &mut App, themes: ThemeMap) {
    let entries: Vec<ThemeEntry> = themes.values().map(ThemeEntry::from).collect();
    let noun = if entries.len() == 1 { "theme" } else { "themes" };
    app.status = format!("Reloaded {} {noun}", entries.len());
    app.theme_picker.set_items(entries);
    app.themes = themes;
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{DEFAULT_THEME_ID, default_palette};
    use crate::types::Palette;
    use chrono::TimeZone;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ch(c: char) -> AppEvent {
        key(KeyCode::Char(c))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn nord() -> Palette {
        Palette {
            name: "Nord".to_string(),
            file_name: "nord.json".to_string(),
            accent: "#88c0d0".to_string(),
            ..default_palette()
        }
    }

    fn themes() -> ThemeMap {
        let mut themes = ThemeMap::new();
        themes.insert(DEFAULT_THEME_ID.to_string(), default_palette());
        themes.insert("nord.json".to_string(), nord());
        themes
    }

    fn app_with(names: &[&str]) -> App {
        let notes = names.iter().map(|n| NoteEntry::new(*n, 0)).collect();
        App::new(notes, themes(), default_palette())
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, ch(c));
        }
    }

    // -- filename resolution --

    #[test]
    fn resolve_appends_extension() {
        assert_eq!(resolve_filename("draft", fixed_now()), "draft.md");
    }

    #[test]
    fn resolve_keeps_existing_extension() {
        assert_eq!(resolve_filename("draft.md", fixed_now()), "draft.md");
    }

    #[test]
    fn resolve_blank_uses_timestamp() {
        assert_eq!(
            resolve_filename("", fixed_now()),
            "note-2024-03-09-14-05-07.md"
        );
    }

    // -- focus --

    #[test]
    fn switch_toggles_focus_and_capture() {
        let mut app = app_with(&["a.md"]);
        update(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Editor);
        assert!(app.editor.is_active());

        update(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::List);
        assert!(!app.editor.is_active());
    }

    #[test]
    fn printable_keys_type_into_focused_editor() {
        let mut app = app_with(&["a.md"]);
        update(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "qnd");
        assert_eq!(app.editor.content(), "qnd");
        assert!(!app.should_quit);
        assert!(!app.inputting());
    }

    #[test]
    fn list_keys_do_not_reach_editor() {
        let mut app = app_with(&["a.md", "b.md"]);
        update(&mut app, ch('j'));
        assert_eq!(app.notes.selected_index(), Some(1));
        assert_eq!(app.editor.content(), "");
    }

    // -- open --

    #[test]
    fn enter_on_list_requests_open() {
        let mut app = app_with(&["a.md", "b.md"]);
        let commands = update(&mut app, key(KeyCode::Enter));
        assert_eq!(
            commands,
            vec![Command::OpenNote { filename: "a.md".to_string() }]
        );
    }

    #[test]
    fn enter_on_empty_list_does_nothing() {
        let mut app = app_with(&[]);
        assert!(update(&mut app, key(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn opened_note_fills_editor() {
        let mut app = app_with(&["a.md"]);
        update(
            &mut app,
            AppEvent::NoteOpened {
                filename: "a.md".to_string(),
                content: "hello\nworld".to_string(),
            },
        );
        assert_eq!(app.editor.content(), "hello\nworld");
        assert_eq!(app.editor.cursor(), (0, 0));
        assert_eq!(app.current_file.as_deref(), Some("a.md"));
        assert_eq!(app.status, "Editing a.md");
    }

    #[test]
    fn failed_open_keeps_editor_and_current_file() {
        let mut app = app_with(&["a.md", "b.md"]);
        update(
            &mut app,
            AppEvent::NoteOpened {
                filename: "a.md".to_string(),
                content: "keep me".to_string(),
            },
        );
        update(
            &mut app,
            AppEvent::OperationFailed {
                op: FileOp::Read,
                message: "permission denied".to_string(),
            },
        );
        assert_eq!(app.editor.content(), "keep me");
        assert_eq!(app.current_file.as_deref(), Some("a.md"));
        assert_eq!(app.status, "Error reading file: permission denied");
    }

    // -- new --

    #[test]
    fn new_opens_prompt_from_list() {
        let mut app = app_with(&[]);
        update(&mut app, ch('n'));
        assert_eq!(app.prompt, Some(InputPrompt::new(PromptPurpose::New)));
    }

    #[test]
    fn prompt_captures_every_printable_key() {
        let mut app = app_with(&["a.md"]);
        update(&mut app, ch('n'));
        type_text(&mut app, "qd n");
        update(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.prompt.as_ref().unwrap().buffer, "qd ");
        assert!(!app.should_quit);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn prompt_blocks_focus_switch_and_list_navigation() {
        let mut app = app_with(&["a.md", "b.md"]);
        update(&mut app, ch('n'));
        update(&mut app, key(KeyCode::Tab));
        update(&mut app, key(KeyCode::Down));
        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.notes.selected_index(), Some(0));
        assert!(!app.editor.is_active());
    }

    #[test]
    fn confirm_new_creates_note_and_focuses_editor() {
        let mut app = app_with(&["a.md"]);
        update(
            &mut app,
            AppEvent::NoteOpened {
                filename: "a.md".to_string(),
                content: "old".to_string(),
            },
        );
        update(&mut app, ch('n'));
        type_text(&mut app, "ideas");
        let commands = update(&mut app, key(KeyCode::Enter));

        assert_eq!(
            commands,
            vec![Command::CreateNote { filename: "ideas.md".to_string() }]
        );
        assert!(!app.inputting());
        assert_eq!(app.current_file.as_deref(), Some("ideas.md"));
        assert_eq!(app.editor.content(), "");
        assert_eq!(app.focus, Focus::Editor);
        assert!(app.editor.is_active());
        assert_eq!(app.status, "New note: ideas.md");
    }

    #[test]
    fn confirm_blank_new_uses_timestamp() {
        let mut app = app_with(&[]);
        update(&mut app, ch('n'));
        let commands = update_at(&mut app, key(KeyCode::Enter), fixed_now());
        assert_eq!(
            commands,
            vec![Command::CreateNote {
                filename: "note-2024-03-09-14-05-07.md".to_string()
            }]
        );
    }

    #[test]
    fn cancel_prompt_restores_previous_state() {
        let mut app = app_with(&["a.md"]);
        update(&mut app, ch('n'));
        type_text(&mut app, "abc");
        let commands = update(&mut app, key(KeyCode::Esc));
        assert!(commands.is_empty());
        assert!(app.prompt.is_none());
        assert!(app.current_file.is_none());
        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.status, "Filename input cancelled.");
    }

    #[test]
    fn path_like_name_is_refused() {
        let mut app = app_with(&["a.md"]);
        update(&mut app, ch('n'));
        type_text(&mut app, "../escaped");
        let commands = update(&mut app, key(KeyCode::Enter));

        assert!(commands.is_empty());
        assert!(!app.inputting());
        assert!(app.current_file.is_none());
        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.status, "Error creating file: invalid filename");
    }

    #[test]
    fn path_like_save_as_keeps_editor_text() {
        let mut app = app_with(&[]);
        update(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "body");
        update(&mut app, ctrl('s'));
        type_text(&mut app, "sub/draft");
        let commands = update(&mut app, key(KeyCode::Enter));

        assert!(commands.is_empty());
        assert!(app.current_file.is_none());
        assert_eq!(app.editor.content(), "body");
        assert_eq!(app.status, "Error saving file: invalid filename");
    }

    #[test]
    fn created_note_triggers_refresh() {
        let mut app = app_with(&[]);
        let commands = update(
            &mut app,
            AppEvent::NoteCreated { filename: "x.md".to_string() },
        );
        assert_eq!(commands, vec![Command::RefreshNotes]);
    }

    #[test]
    fn directory_failure_still_closes_prompt() {
        let mut app = app_with(&[]);
        update(&mut app, ch('n'));
        update(&mut app, key(KeyCode::Enter));
        let commands = update(
            &mut app,
            AppEvent::OperationFailed {
                op: FileOp::CreateDir,
                message: "read-only file system".to_string(),
            },
        );
        assert!(commands.is_empty());
        assert!(!app.inputting());
        assert_eq!(app.status, "Error creating directory: read-only file system");
    }

    // -- save --

    #[test]
    fn save_without_current_file_opens_save_prompt() {
        let mut app = app_with(&[]);
        update(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "text");
        let commands = update(&mut app, ctrl('s'));
        assert!(commands.is_empty());
        assert_eq!(app.prompt, Some(InputPrompt::new(PromptPurpose::Save)));
    }

    #[test]
    fn save_with_current_file_writes_directly() {
        let mut app = app_with(&["a.md"]);
        update(
            &mut app,
            AppEvent::NoteOpened {
                filename: "a.md".to_string(),
                content: String::new(),
            },
        );
        update(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "hi");
        let commands = update(&mut app, ctrl('s'));
        assert_eq!(
            commands,
            vec![Command::SaveNote {
                filename: "a.md".to_string(),
                content: "hi".to_string()
            }]
        );
        assert!(!app.inputting());
    }

    #[test]
    fn save_as_sets_current_file_and_writes_content() {
        let mut app = app_with(&[]);
        update(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "body");
        update(&mut app, ctrl('s'));
        type_text(&mut app, "draft");
        let commands = update(&mut app, key(KeyCode::Enter));

        assert_eq!(
            commands,
            vec![Command::SaveNote {
                filename: "draft.md".to_string(),
                content: "body".to_string()
            }]
        );
        assert_eq!(app.current_file.as_deref(), Some("draft.md"));
        assert_eq!(app.status, "Saving as: draft.md");
        assert_eq!(app.focus, Focus::Editor);
        assert_eq!(app.editor.content(), "body");
    }

    #[test]
    fn saved_note_reports_and_refreshes() {
        let mut app = app_with(&[]);
        let commands = update(
            &mut app,
            AppEvent::NoteSaved { filename: "draft.md".to_string() },
        );
        assert_eq!(commands, vec![Command::RefreshNotes]);
        assert_eq!(app.status, "Saved: draft.md");
    }

    // -- delete --

    #[test]
    fn delete_requests_removal_of_selected() {
        let mut app = app_with(&["a.md", "b.md"]);
        update(&mut app, key(KeyCode::Down));
        let commands = update(&mut app, ch('d'));
        assert_eq!(
            commands,
            vec![Command::DeleteNote { filename: "b.md".to_string() }]
        );
    }

    #[test]
    fn deleting_current_file_clears_editor() {
        let mut app = app_with(&["a.md"]);
        update(
            &mut app,
            AppEvent::NoteOpened {
                filename: "a.md".to_string(),
                content: "text".to_string(),
            },
        );
        let commands = update(
            &mut app,
            AppEvent::NoteDeleted { filename: "a.md".to_string() },
        );
        assert_eq!(commands, vec![Command::RefreshNotes]);
        assert!(app.current_file.is_none());
        assert_eq!(app.editor.content(), "");
        assert_eq!(app.status, "Deleted: a.md");
    }

    #[test]
    fn deleting_other_file_keeps_editor() {
        let mut app = app_with(&["a.md", "b.md"]);
        update(
            &mut app,
            AppEvent::NoteOpened {
                filename: "a.md".to_string(),
                content: "text".to_string(),
            },
        );
        update(
            &mut app,
            AppEvent::NoteDeleted { filename: "b.md".to_string() },
        );
        assert_eq!(app.current_file.as_deref(), Some("a.md"));
        assert_eq!(app.editor.content(), "text");
    }

    #[test]
    fn listing_replaces_entries() {
        let mut app = app_with(&["a.md"]);
        update(
            &mut app,
            AppEvent::NotesListed(vec![NoteEntry::new("a.md", 0), NoteEntry::new("b.md", 0)]),
        );
        let names: Vec<&str> = app.notes.items().iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    // -- top --

    #[test]
    fn top_moves_cursor_without_commands() {
        let mut app = app_with(&["a.md"]);
        update(
            &mut app,
            AppEvent::NoteOpened {
                filename: "a.md".to_string(),
                content: "one\ntwo".to_string(),
            },
        );
        update(&mut app, key(KeyCode::Tab));
        update(&mut app, key(KeyCode::Down));
        let commands = update(&mut app, ctrl('t'));
        assert!(commands.is_empty());
        assert_eq!(app.editor.cursor(), (0, 0));
        assert_eq!(app.status, "Moved cursor to top");
    }

    // -- settings --

    #[test]
    fn settings_opens_with_active_theme_highlighted() {
        let mut app = app_with(&[]);
        update(&mut app, ctrl('o'));
        assert_eq!(app.view, AppView::Settings);
        assert_eq!(app.status, STATUS_SETTINGS);
        assert_eq!(app.theme_picker.selected().unwrap().id, DEFAULT_THEME_ID);
    }

    #[test]
    fn settings_not_reachable_while_prompting() {
        let mut app = app_with(&[]);
        update(&mut app, ch('n'));
        update(&mut app, ctrl('o'));
        assert_eq!(app.view, AppView::Notes);
        assert!(app.inputting());
    }

    #[test]
    fn confirming_known_theme_applies_it() {
        let mut app = app_with(&[]);
        let before = app.styles;
        update(&mut app, ctrl('o'));
        app.theme_picker.select_key("nord.json");
        update(&mut app, key(KeyCode::Enter));

        assert_eq!(app.view, AppView::Notes);
        assert_eq!(app.palette.file_name, "nord.json");
        assert_ne!(app.styles, before);
        assert_eq!(app.status, "Theme changed to Nord");
    }

    #[test]
    fn unknown_theme_leaves_styles_and_returns() {
        let mut app = app_with(&[]);
        let before = app.styles;
        update(&mut app, ctrl('o'));
        app.themes.remove("nord.json");
        app.theme_picker.select_key("nord.json");
        update(&mut app, key(KeyCode::Enter));

        assert_eq!(app.view, AppView::Notes);
        assert_eq!(app.styles, before);
        assert_eq!(app.status, "Error: Theme nord.json not found");
    }

    #[test]
    fn cancel_settings_keeps_palette() {
        let mut app = app_with(&[]);
        update(&mut app, ctrl('o'));
        update(&mut app, key(KeyCode::Down));
        update(&mut app, key(KeyCode::Esc));
        assert_eq!(app.view, AppView::Notes);
        assert_eq!(app.palette, default_palette());
        assert_eq!(app.status, STATUS_IDLE);
    }

    #[test]
    fn reload_requests_theme_store() {
        let mut app = app_with(&[]);
        update(&mut app, ctrl('o'));
        assert_eq!(update(&mut app, ch('r')), vec![Command::ReloadThemes]);
    }

    #[test]
    fn reloaded_themes_rebuild_picker() {
        let mut app = app_with(&[]);
        let mut reloaded = ThemeMap::new();
        reloaded.insert("nord.json".to_string(), nord());
        update(&mut app, AppEvent::ThemesLoaded(reloaded));
        assert_eq!(app.theme_picker.len(), 1);
        assert_eq!(app.themes.len(), 1);
        assert_eq!(app.status, "Reloaded 1 theme");

        update(&mut app, AppEvent::ThemesLoaded(themes()));
        assert_eq!(app.status, "Reloaded 2 themes");
    }

    // -- quit / resize --

    #[test]
    fn q_quits_from_list() {
        let mut app = app_with(&[]);
        update(&mut app, ch('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_prompt() {
        let mut app = app_with(&[]);
        update(&mut app, ch('n'));
        update(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn nothing_happens_after_quit() {
        let mut app = app_with(&["a.md"]);
        update(&mut app, ch('q'));
        assert!(update(&mut app, key(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn resize_recomputes_layout() {
        let mut app = app_with(&[]);
        update(&mut app, AppEvent::Resize { width: 120, height: 40 });
        assert_eq!((app.width, app.height), (120, 40));
        assert_eq!(app.layout.list.width, 30);
        assert_eq!(app.layout.editor.width, 90);
        assert_eq!(app.layout.status.height, 1);
        assert_eq!(
            app.layout.list.height,
            40 - 1 - app.keys.help_height(120)
        );
    }
}
