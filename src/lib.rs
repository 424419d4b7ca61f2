//! terminotes: a terminal split-pane note editor.

pub mod config;
pub mod error;
pub mod logging;
pub mod notes;
pub mod themes;
pub mod tui;
pub mod types;
