//! Error types for terminotes.
//!
//! Repository and theme errors are caught by the TUI and turned into a
//! status line. Only [`Error`] reaches `main`, where it ends the process.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::IoKind;

/// Failure of a note file operation.
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("{}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("{}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{}: {source}", path.display())]
    Delete { path: PathBuf, source: io::Error },

    #[error("{}: {source}", path.display())]
    List { path: PathBuf, source: io::Error },
}

impl NoteError {
    /// Classify the underlying I/O failure.
    pub fn kind(&self) -> IoKind {
        self.source_io().kind().into()
    }

    fn source_io(&self) -> &io::Error {
        match self {
            NoteError::CreateDir { source, .. }
            | NoteError::Read { source, .. }
            | NoteError::Write { source, .. }
            | NoteError::Delete { source, .. }
            | NoteError::List { source, .. } => source,
        }
    }
}

/// Failure while loading theme files.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A single theme file is not valid JSON. Skipped during loading.
    #[error("could not parse theme file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A single theme file could not be read. Skipped during loading.
    #[error("could not read theme file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The theme directory itself could not be read.
    #[error("could not load themes from {}: {source}", path.display())]
    Load { path: PathBuf, source: io::Error },
}

/// Top-level error returned to `main`.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Notes(#[from] NoteError),

    #[error(transparent)]
    Themes(#[from] ThemeError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
