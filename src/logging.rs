//! `tracing` subscriber setup.
//!
//! The terminal belongs to the TUI, so log lines go to a file. Logging is
//! optional: any failure to set it up leaves the app running without it.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber filtered by `level`.
///
/// Returns false when logging could not be enabled. Safe to call more
/// than once; only the first successful call takes effect.
pub fn init(log_file: &Path, level: &str) -> bool {
    if let Some(parent) = log_file.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_creates_log_file_and_parent() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("logs").join("terminotes.log");

        init(&log, "debug");
        tracing::info!("logging ready");

        assert!(log.exists());
    }

    #[test]
    fn init_fails_quietly_on_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        assert!(!init(&blocker.join("terminotes.log"), "info"));
    }
}
