//! Domain types for terminotes.
//!
//! Shared by the repository, the theme store and the TUI layers.

use std::io;

use serde::{Deserialize, Serialize};

// ============================================================================
// NOTES
// ============================================================================

/// A note file discovered in the notes directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    /// File name relative to the notes directory (e.g. "todo.md").
    pub filename: String,
    /// Text shown in the note list.
    pub display_title: String,
    /// File size in bytes at listing time.
    pub size_bytes: u64,
}

impl NoteEntry {
    pub fn new(filename: impl Into<String>, size_bytes: u64) -> Self {
        let filename = filename.into();
        NoteEntry {
            display_title: filename.clone(),
            filename,
            size_bytes,
        }
    }
}

/// Coarse classification of an I/O failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoKind {
    NotFound,
    PermissionDenied,
    Other,
}

impl From<io::ErrorKind> for IoKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => IoKind::NotFound,
            io::ErrorKind::PermissionDenied => IoKind::PermissionDenied,
            _ => IoKind::Other,
        }
    }
}

// ============================================================================
// THEMES
// ============================================================================

/// A named color palette loaded from a theme file.
///
/// Colors are kept as the raw strings found in the file ("#89b4fa",
/// "blue", ...). Conversion happens in the style builder, which maps
/// anything unparsable to the terminal default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Palette {
    #[serde(alias = "name")]
    pub name: String,
    /// Theme identifier: the file name the palette was loaded from.
    #[serde(skip)]
    pub file_name: String,
    #[serde(alias = "accent")]
    pub accent: String,
    #[serde(alias = "title")]
    pub title: String,
    #[serde(alias = "input")]
    pub input: String,
    #[serde(alias = "text")]
    pub text: String,
    #[serde(alias = "subtleText", alias = "subtle_text", alias = "subtletext")]
    pub subtle_text: String,
    #[serde(
        alias = "statusBarBackground",
        alias = "status_bar_background",
        alias = "statusbarbackground"
    )]
    pub status_bar_background: String,
    #[serde(
        alias = "modalBackground",
        alias = "modal_background",
        alias = "modalbackground"
    )]
    pub modal_background: String,
    #[serde(alias = "border")]
    pub border: String,
}
