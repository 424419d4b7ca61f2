//! terminotes CLI
//!
//! Split-pane Markdown note editor for the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use humansize::{BINARY, format_size};
use tracing::{info, warn};

use terminotes::config::{Config, DEFAULT_LOG_LEVEL, DEFAULT_NOTES_DIR, DEFAULT_THEMES_DIR};
use terminotes::error::Result;
use terminotes::logging;
use terminotes::notes::NoteRepository;
use terminotes::themes::{DEFAULT_THEME_ID, ThemeMap, ThemeStore, default_palette};
use terminotes::tui::effects::Workspace;
use terminotes::tui::run::run;
use terminotes::tui::state::App;
use terminotes::types::Palette;

#[derive(Parser)]
#[command(name = "terminotes")]
#[command(about = "Split-pane Markdown note editor for the terminal")]
#[command(version)]
struct Cli {
    /// Directory holding the notes
    #[arg(long, default_value = DEFAULT_NOTES_DIR)]
    notes_dir: PathBuf,

    /// Directory holding the JSON themes
    #[arg(long, default_value = DEFAULT_THEMES_DIR)]
    themes_dir: PathBuf,

    /// Theme applied at startup (file name, `.json` optional)
    #[arg(long, default_value = DEFAULT_THEME_ID)]
    theme: String,

    /// Log file (default: data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "terminotes=trace"
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the notes with their sizes
    List,

    /// Print the available themes
    Themes,
}

impl Cli {
    fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            notes_dir: self.notes_dir.clone(),
            themes_dir: self.themes_dir.clone(),
            log_file: self.log_file.clone().or(defaults.log_file),
            log_level: self.log_level.clone(),
            ..defaults
        }
        .with_theme(&self.theme)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();

    if let Some(log_file) = &config.log_file {
        logging::init(log_file, &config.log_level);
    }

    let result = match cli.command {
        Some(Commands::List) => cmd_list(&config),
        Some(Commands::Themes) => cmd_themes(&config),
        None => cmd_edit(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_edit(config: &Config) -> Result<()> {
    let notes = NoteRepository::new(&config.notes_dir);
    let themes = ThemeStore::new(&config.themes_dir);

    let theme_map = themes.load_all()?;
    info!(count = theme_map.len(), "themes loaded");

    let entries = match notes.list() {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading notes directory: {}", e);
            warn!("{e}");
            Vec::new()
        }
    };

    let palette = startup_palette(&theme_map, &config.theme);
    let app = App::new(entries, theme_map, palette);

    run(app, Workspace::new(notes, themes))?;
    Ok(())
}

fn cmd_list(config: &Config) -> Result<()> {
    let notes = NoteRepository::new(&config.notes_dir);
    let entries = notes.list()?;

    if entries.is_empty() {
        println!("No notes in {}", notes.dir().display());
        return Ok(());
    }

    for entry in &entries {
        println!("{:<40} {:>10}", entry.filename, format_size(entry.size_bytes, BINARY));
    }

    let total: u64 = entries.iter().map(|e| e.size_bytes).sum();
    println!();
    println!("{} notes, {}", entries.len(), format_size(total, BINARY));

    Ok(())
}

fn cmd_themes(config: &Config) -> Result<()> {
    let themes = ThemeStore::new(&config.themes_dir).load_all()?;

    for (id, palette) in &themes {
        let marker = if *id == config.theme { "*" } else { " " };
        println!("{} {:<24} {}", marker, id, palette.name);
    }

    Ok(())
}

// ============================================================================
// HELPERS
// ============================================================================

/// The requested palette, else the default one, else any loaded one.
fn startup_palette(themes: &ThemeMap, requested: &str) -> Palette {
    if let Some(palette) = themes.get(requested) {
        return palette.clone();
    }
    warn!(theme = requested, "theme not found, using fallback");
    themes
        .get(DEFAULT_THEME_ID)
        .or_else(|| themes.values().next())
        .cloned()
        .unwrap_or_else(default_palette)
}
