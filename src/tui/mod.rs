//! Interactive split-pane editor.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data (App, AppEvent, Command)
//! - `update`: pure transitions, events in, commands out
//! - `view`: pure rendering
//! - `effects`: runs commands against the filesystem
//! - `run`: terminal lifecycle and the event loop
//!
//! `editor`, `keys`, `picker` and `theme` are the widgets and tables the
//! pure layers are built from.

pub mod editor;
pub mod effects;
pub mod keys;
pub mod picker;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
