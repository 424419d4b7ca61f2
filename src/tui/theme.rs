//! Style builder: palette in, named styles out.
//!
//! Pure data. Rebuilt whenever the active palette changes and consumed by
//! the rendering layer.
//!
//! Palette roles:
//! - Accent: focused pane border, selected list row, modal border
//! - Border: unfocused pane border
//! - Title: list titles
//! - Input: text typed into the filename prompt
//! - Text / SubtleText: body text and de-emphasized hints

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::types::Palette;

// ============================================================================
// FIXED STYLES
// ============================================================================

/// Editor cursor while the editor captures input.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

// ============================================================================
// PALETTE-DERIVED STYLES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleSet {
    /// Status bar text and background.
    pub status_bar: Style,
    /// Filename prompt box body.
    pub modal: Style,
    /// Filename prompt box border.
    pub modal_border: Style,
    /// Prompt labels and hints.
    pub prompt: Style,
    /// Text typed into the prompt.
    pub text_input: Style,
    /// Pane and picker titles.
    pub list_title: Style,
    /// Unselected list row.
    pub list_item: Style,
    /// Selected list row.
    pub list_item_active: Style,
    /// Border of the focused pane.
    pub active_pane: Style,
    /// Border of the unfocused pane.
    pub inactive_pane: Style,
    /// Editor body text.
    pub editor_text: Style,
    /// Key names in the help line.
    pub help_key: Style,
    /// Descriptions in the help line.
    pub help_desc: Style,
}

/// Derive every style from a palette.
pub fn build(palette: &Palette) -> StyleSet {
    let accent = color(&palette.accent);
    let text = color(&palette.text);
    let subtle = color(&palette.subtle_text);
    let modal_bg = color(&palette.modal_background);

    StyleSet {
        status_bar: Style::new().fg(text).bg(color(&palette.status_bar_background)),
        modal: Style::new().fg(text).bg(modal_bg),
        modal_border: Style::new().fg(accent).bg(modal_bg),
        prompt: Style::new().fg(subtle),
        text_input: Style::new().fg(color(&palette.input)),
        list_title: Style::new()
            .fg(color(&palette.title))
            .add_modifier(Modifier::BOLD),
        list_item: Style::new().fg(text),
        list_item_active: Style::new().fg(modal_bg).bg(accent),
        active_pane: Style::new().fg(accent),
        inactive_pane: Style::new().fg(color(&palette.border)),
        editor_text: Style::new().fg(text),
        help_key: Style::new().fg(subtle).add_modifier(Modifier::BOLD),
        help_desc: Style::new().fg(subtle).add_modifier(Modifier::DIM),
    }
}

/// Parse a palette color. Anything unparsable becomes the terminal default.
pub fn color(value: &str) -> Color {
    Color::from_str(value.trim()).unwrap_or(Color::Reset)
}

// ============================================================================
// TESTS
// ============================================================================
