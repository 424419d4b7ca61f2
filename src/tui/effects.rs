//! Effects boundary: run commands against the filesystem.
//!
//! Every command turns into exactly one [`AppEvent`] describing its
//! outcome. [`dispatch`] drives an event through the transition function
//! until no commands remain, so one key press is fully handled (file I/O
//! included) before the next is read.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::error::NoteError;
use crate::notes::NoteRepository;
use crate::themes::ThemeStore;

use super::state::{App, AppEvent, Command, FileOp};
use super::update::update;

/// The stores commands operate on.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub notes: NoteRepository,
    pub themes: ThemeStore,
}

impl Workspace {
    pub fn new(notes: NoteRepository, themes: ThemeStore) -> Self {
        Workspace { notes, themes }
    }
}

/// Handle one event and every command that follows from it.
pub fn dispatch(app: &mut App, event: AppEvent, workspace: &Workspace) {
    let mut queue = VecDeque::from([event]);
    while let Some(event) = queue.pop_front() {
        for command in update(app, event) {
            queue.push_back(execute(command, workspace));
        }
    }
}

/// Run one command and describe its outcome.
pub fn execute(command: Command, workspace: &Workspace) -> AppEvent {
    debug!(?command, "executing");
    let notes = &workspace.notes;

    match command {
        Command::OpenNote { filename } => match notes.read(&filename) {
            Ok(content) => AppEvent::NoteOpened { filename, content },
            Err(e) => failure(FileOp::Read, e),
        },
        Command::CreateNote { filename } => match notes.write(&filename, "") {
            Ok(()) => AppEvent::NoteCreated { filename },
            Err(e) => failure(FileOp::Create, e),
        },
        Command::SaveNote { filename, content } => match notes.write(&filename, &content) {
            Ok(()) => AppEvent::NoteSaved { filename },
            Err(e) => failure(FileOp::Save, e),
        },
        Command::DeleteNote { filename } => match notes.delete(&filename) {
            Ok(()) => AppEvent::NoteDeleted { filename },
            Err(e) => failure(FileOp::Delete, e),
        },
        Command::RefreshNotes => match notes.list() {
            Ok(entries) => AppEvent::NotesListed(entries),
            Err(e) => failure(FileOp::List, e),
        },
        Command::ReloadThemes => match workspace.themes.load_all() {
            Ok(themes) => AppEvent::ThemesLoaded(themes),
            Err(e) => {
                warn!("{e}");
                AppEvent::OperationFailed {
                    op: FileOp::LoadThemes,
                    message: e.to_string(),
                }
            }
        },
    }
}

/// A failed directory creation is reported as such, whatever the command.
fn failure(op: FileOp, error: NoteError) -> AppEvent {
    warn!(kind = ?error.kind(), "{error}");
    let op = match error {
        NoteError::CreateDir { .. } => FileOp::CreateDir,
        _ => op,
    };
    AppEvent::OperationFailed {
        op,
        message: error.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
