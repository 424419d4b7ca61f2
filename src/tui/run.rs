//! TUI runtime: terminal lifecycle, input thread, event loop.
//!
//! This is the only module that touches the real terminal. It wires the
//! pure layers (state, update, view) to crossterm and ratatui.
//!
//! A key reader thread feeds an mpsc channel. The loop draws, blocks on
//! the next event, then hands it to the effects layer, which runs every
//! resulting command before the next event is read.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use super::effects::{Workspace, dispatch};
use super::state::{App, AppEvent};
use super::view::render;

// ============================================================================
// EVENT TRANSLATION
// ============================================================================

/// Turn a terminal event into an app event.
///
/// Only key presses and resizes matter. Key releases and repeats
/// (reported by some terminals) are dropped so nothing is typed twice.
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(width, height) => Some(AppEvent::Resize { width, height }),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Restore the terminal before the panic message is printed.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// INPUT THREAD
// ============================================================================

fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    let Some(app_event) = translate(event) else {
                        continue;
                    };
                    if tx.send(app_event).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Err(e) => {
                    debug!("input reader stopped: {e}");
                    break;
                }
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the editor until the user quits.
pub fn run(mut app: App, workspace: Workspace) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    // Lay out for the current size before the first frame.
    let size = terminal.size()?;
    dispatch(
        &mut app,
        AppEvent::Resize {
            width: size.width,
            height: size.height,
        },
        &workspace,
    );

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_input_reader(tx);
    info!(notes = %workspace.notes.dir().display(), "editor started");

    let result = event_loop(&mut terminal, &mut app, &workspace, &rx);

    restore_terminal()?;
    info!("editor stopped");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    workspace: &Workspace,
    rx: &mpsc::Receiver<AppEvent>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => return Ok(()), // input thread gone
        };

        dispatch(app, event, workspace);
    }
}

// ============================================================================
// TESTS
// ============================================================================
