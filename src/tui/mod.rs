//! TUI module for interactive tree exploration.

pub mod app;
pub mod event;
pub mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub use app::App;

use crate::view::TreeViewer;

/// How long to wait for input before redrawing.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the interactive viewer until the user quits.
///
/// Returns the viewer so its settings and output can be saved.
pub fn run(viewer: TreeViewer, source: Option<PathBuf>) -> io::Result<TreeViewer> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(viewer, source);

    let result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result?;

    Ok(app.viewer)
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;
        event::handle_events(app, TICK_RATE)?;
    }
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    undo_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        reset_terminal,
    )
}

/// Run `step`; if it fails, run `undo` and return the step's error.
fn undo_on_error<T>(
    step: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    match step() {
        Ok(value) => Ok(value),
        Err(err) => {
            if let Err(undo_err) = undo() {
                tracing::warn!(error = %undo_err, "Failed to reset terminal");
            }
            Err(err)
        }
    }
}

/// Leave the alternate screen and raw mode without a `Terminal` handle.
fn reset_terminal() -> io::Result<()> {
    let left = execute!(io::stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    left
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = reset_terminal();
        default_hook(info);
    }));
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
