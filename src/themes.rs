//! Theme store: JSON palette files in a directory.
//!
//! One bad file never blocks startup. Unreadable or unparsable files are
//! logged and skipped; only a directory that exists but cannot be read
//! is an error.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ThemeError;
use crate::types::Palette;

/// Identifier of the palette used when nothing else is configured.
pub const DEFAULT_THEME_ID: &str = "mocha.json";

const THEME_EXTENSION: &str = "json";

/// Theme identifier → palette, ordered by identifier.
pub type ThemeMap = BTreeMap<String, Palette>;

/// Loads palettes from a theme directory.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    dir: PathBuf,
}

impl ThemeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ThemeStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load every `*.json` palette in the directory.
    ///
    /// Falls back to the built-in palette when the directory is missing
    /// or yields no usable theme.
    ///
    /// # Errors
    /// Returns [`ThemeError::Load`] if the directory exists but cannot be read.
    pub fn load_all(&self) -> Result<ThemeMap, ThemeError> {
        let mut themes = ThemeMap::new();

        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => Some(entries),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(dir = %self.dir.display(), "theme directory missing");
                None
            }
            Err(source) => {
                return Err(ThemeError::Load {
                    path: self.dir.clone(),
                    source,
                });
            }
        };

        for entry in entries.into_iter().flatten() {
            let entry = entry.map_err(|source| ThemeError::Load {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();

            if path.extension().and_then(|e| e.to_str()) != Some(THEME_EXTENSION) {
                continue;
            }

            match load_file(&path) {
                Ok(palette) => {
                    themes.insert(palette.file_name.clone(), palette);
                }
                Err(e) => warn!("{e}"),
            }
        }

        if themes.is_empty() {
            let palette = default_palette();
            themes.insert(palette.file_name.clone(), palette);
        }

        Ok(themes)
    }
}

/// Read and parse a single theme file.
fn load_file(path: &Path) -> Result<Palette, ThemeError> {
    let content = fs::read_to_string(path).map_err(|source| ThemeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    parse_palette(file_name, &content).map_err(|source| ThemeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse palette JSON, filling in the identifier and a fallback name.
pub fn parse_palette(file_name: &str, content: &str) -> Result<Palette, serde_json::Error> {
    let mut palette: Palette = serde_json::from_str(content)?;
    palette.file_name = file_name.to_string();
    if palette.name.is_empty() {
        palette.name = file_name
            .strip_suffix(".json")
            .unwrap_or(file_name)
            .to_string();
    }
    Ok(palette)
}

/// Normalize a user-supplied theme id: "nord" and "nord.json" are the same theme.
pub fn theme_id(name: &str) -> String {
    if name.ends_with(".json") {
        name.to_string()
    } else {
        format!("{name}.json")
    }
}

/// Built-in Catppuccin Mocha palette.
pub fn default_palette() -> Palette {
    Palette {
        name: "Catppuccin Mocha".to_string(),
        file_name: DEFAULT_THEME_ID.to_string(),
        accent: "#cba6f7".to_string(),
        title: "#89b4fa".to_string(),
        input: "#f5e0dc".to_string(),
        text: "#cdd6f4".to_string(),
        subtle_text: "#a6adc8".to_string(),
        status_bar_background: "#313244".to_string(),
        modal_background: "#1e1e2e".to_string(),
        border: "#45475a".to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
