//! Rendering: map App state onto a ratatui frame.
//!
//! Overlay precedence, highest first: quitting (nothing drawn), settings
//! picker, filename prompt over the notes view, plain notes view.
//! Everything here reads state; nothing mutates it.

use humansize::{BINARY, format_size};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph};

use super::keys::HELP_SEPARATOR;
use super::picker::{ListEntry, Picker};
use super::state::{App, AppView, Focus, InputPrompt, PromptPurpose};
use super::theme::StyleSet;

const PROMPT_PLACEHOLDER: &str = "Enter filename (leave blank for default)";
const PROMPT_HINT: &str = "Press Enter to confirm, Esc to cancel.";
const PROMPT_WIDTH: u16 = 50;
const PROMPT_HEIGHT: u16 = 7;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current state to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    if app.should_quit {
        return;
    }

    let area = frame.area();

    match app.view {
        AppView::Settings => {
            let picker_area = fit(app.layout.picker, area, area.width / 2, area.height / 2);
            render_theme_picker(app, frame, picker_area);
        }
        AppView::Notes => {
            render_notes(app, frame, area);
            if let Some(prompt) = &app.prompt {
                render_prompt(prompt, &app.styles, frame, area);
            }
        }
    }
}

// ============================================================================
// NOTES VIEW
// ============================================================================

fn render_notes(app: &App, frame: &mut Frame, area: Rect) {
    let layout = &app.layout;
    let styles = &app.styles;

    let (list_border, editor_border) = match app.focus {
        Focus::List => (styles.active_pane, styles.inactive_pane),
        Focus::Editor => (styles.inactive_pane, styles.active_pane),
    };

    render_note_list(&app.notes, styles, list_border, frame, layout.list.intersection(area));

    let editor_area = layout.editor.intersection(area);
    let block = pane_block(editor_title(app), styles, editor_border);
    let inner = block.inner(editor_area);
    frame.render_widget(block, editor_area);
    frame.render_widget(app.editor.textarea(), inner);

    let status = Paragraph::new(format!(" {}", app.status)).style(styles.status_bar);
    frame.render_widget(status, layout.status.intersection(area));

    let help = Paragraph::new(help_lines(app));
    frame.render_widget(help, layout.help.intersection(area));
}

fn render_note_list<T: ListEntry>(
    picker: &Picker<T>,
    styles: &StyleSet,
    border: Style,
    frame: &mut Frame,
    area: Rect,
) {
    let block = pane_block("Notes".to_string(), styles, border);
    let max_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = picker
        .items()
        .iter()
        .map(|entry| ListItem::new(truncate(entry.title(), max_width)).style(styles.list_item))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styles.list_item_active);

    let mut state = picker.list_state().clone();
    frame.render_stateful_widget(list, area, &mut state);
}

/// "name · size" for the open note, a hint otherwise.
fn editor_title(app: &App) -> String {
    match &app.current_file {
        Some(name) => {
            let size = app.editor.content().len() as u64;
            format!("{} · {}", name, format_size(size, BINARY))
        }
        None => "No note open".to_string(),
    }
}

fn pane_block(title: String, styles: &StyleSet, border: Style) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(Span::styled(format!(" {} ", title), styles.list_title))
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let styles = &app.styles;
    app.keys
        .help_rows(app.layout.help.width)
        .into_iter()
        .map(|row| {
            let mut spans = Vec::new();
            for (i, binding) in row.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(HELP_SEPARATOR, styles.help_desc));
                }
                spans.push(Span::styled(binding.label, styles.help_key));
                spans.push(Span::styled(format!(" {}", binding.help), styles.help_desc));
            }
            Line::from(spans)
        })
        .collect()
}

/// Cut a title to `max` characters, marking the cut with "...".
fn truncate(title: &str, max: usize) -> String {
    if max == 0 || title.chars().count() <= max {
        return title.to_string();
    }
    let keep = max.saturating_sub(3);
    let cut: String = title.chars().take(keep).collect();
    format!("{cut}...")
}

// ============================================================================
// PROMPT OVERLAY
// ============================================================================

fn render_prompt(prompt: &InputPrompt, styles: &StyleSet, frame: &mut Frame, area: Rect) {
    let box_area = centered(area, PROMPT_WIDTH, PROMPT_HEIGHT);

    let title = match prompt.purpose {
        PromptPurpose::New => " New note ",
        PromptPurpose::Save => " Save as ",
    };

    let input = if prompt.buffer.is_empty() {
        Line::from(Span::styled(PROMPT_PLACEHOLDER, styles.prompt))
    } else {
        Line::from(vec![
            Span::styled(prompt.buffer.clone(), styles.text_input),
            Span::styled("_", styles.prompt),
        ])
    };

    let lines = vec![
        Line::from("Enter filename: "),
        input,
        Line::from(""),
        Line::from(Span::styled(PROMPT_HINT, styles.prompt)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.modal_border)
        .title(title)
        .style(styles.modal);

    frame.render_widget(Clear, box_area);
    frame.render_widget(Paragraph::new(lines).block(block).style(styles.modal), box_area);
}

// ============================================================================
// SETTINGS VIEW
// ============================================================================

fn render_theme_picker(app: &App, frame: &mut Frame, area: Rect) {
    let styles = &app.styles;
    let picker = &app.theme_picker;

    let items: Vec<ListItem> = picker
        .items()
        .iter()
        .map(|entry| {
            let marker = if entry.key() == app.palette.file_name { "* " } else { "  " };
            ListItem::new(format!("{marker}{}", entry.title())).style(styles.list_item)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.active_pane)
        .title(Span::styled(" Themes ", styles.list_title))
        .title_bottom(Line::from(Span::styled(
            " enter apply • esc back • r reload ",
            styles.help_desc,
        )));

    let list = List::new(items)
        .block(block)
        .highlight_style(styles.list_item_active);

    let mut state = picker.list_state().clone();
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

// ============================================================================
// GEOMETRY
// ============================================================================

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Use `rect` if it lies within `area`, otherwise a centered fallback.
fn fit(rect: Rect, area: Rect, width: u16, height: u16) -> Rect {
    if rect.area() > 0 && rect.intersection(area) == rect {
        rect
    } else {
        centered(area, width, height)
    }
}

// ============================================================================
// TESTS
// ============================================================================
