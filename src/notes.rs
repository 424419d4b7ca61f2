//! Note file repository.
//!
//! Flat plain-text files in a single directory. No caching: every call
//! hits the filesystem, so callers refresh their listing after mutating.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::NoteError;
use crate::types::NoteEntry;

/// File extension given to every note created through the editor.
pub const NOTE_EXTENSION: &str = ".md";

/// True if `filename` names a file directly inside the notes directory.
///
/// Separators and `.`/`..` components are refused so a typed name can
/// never reach outside the directory.
pub fn is_plain_filename(filename: &str) -> bool {
    if filename.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(filename).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Reads and writes note files under one directory.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    dir: PathBuf,
}

impl NoteRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        NoteRepository { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a note file.
    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// List the note files in directory order.
    ///
    /// Only regular files directly inside the directory are returned.
    /// A missing directory is an empty listing; it is created on first write.
    ///
    /// # Errors
    /// Returns an error if the directory exists but cannot be read.
    pub fn list(&self) -> Result<Vec<NoteEntry>, NoteError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| NoteError::List {
                path: self.dir.clone(),
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop")),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let filename = match entry.file_name().to_str() {
                Some(name) => name.to_string(),
                None => continue,
            };

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            entries.push(NoteEntry::new(filename, size));
        }

        Ok(entries)
    }

    /// Read a note's full content.
    pub fn read(&self, filename: &str) -> Result<String, NoteError> {
        let path = self.path_of(filename);
        fs::read_to_string(&path).map_err(|source| NoteError::Read { path, source })
    }

    /// Write a note, creating the notes directory if needed.
    pub fn write(&self, filename: &str, content: &str) -> Result<(), NoteError> {
        self.ensure_dir()?;
        let path = self.path_of(filename);
        fs::write(&path, content).map_err(|source| NoteError::Write { path, source })
    }

    /// Delete a note file.
    pub fn delete(&self, filename: &str) -> Result<(), NoteError> {
        let path = self.path_of(filename);
        fs::remove_file(&path).map_err(|source| NoteError::Delete { path, source })
    }

    fn ensure_dir(&self) -> Result<(), NoteError> {
        fs::create_dir_all(&self.dir).map_err(|source| NoteError::CreateDir {
            path: self.dir.clone(),
            source,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
