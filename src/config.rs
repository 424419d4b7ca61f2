//! Runtime configuration, assembled from the command line.

use std::path::PathBuf;

use crate::themes::{DEFAULT_THEME_ID, theme_id};

/// Default notes directory, relative to the working directory.
pub const DEFAULT_NOTES_DIR: &str = "notes";

/// Default theme directory, relative to the working directory.
pub const DEFAULT_THEMES_DIR: &str = "themes";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the note files.
    pub notes_dir: PathBuf,
    /// Directory holding `*.json` palettes.
    pub themes_dir: PathBuf,
    /// Identifier of the palette applied at startup.
    pub theme: String,
    /// Log destination. None disables logging.
    pub log_file: Option<PathBuf>,
    /// `tracing` filter directive, e.g. "debug" or "terminotes=trace".
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_dir: PathBuf::from(DEFAULT_NOTES_DIR),
            themes_dir: PathBuf::from(DEFAULT_THEMES_DIR),
            theme: DEFAULT_THEME_ID.to_string(),
            log_file: default_log_file(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Set the startup theme, accepting ids with or without `.json`.
    pub fn with_theme(mut self, name: &str) -> Self {
        self.theme = theme_id(name);
        self
    }
}

/// Returns the default log file.
///
/// On Linux: ~/.local/share/terminotes/terminotes.log
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("terminotes").join("terminotes.log"))
}
