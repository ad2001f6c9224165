//! Terminal User Interface (TUI) for pomo.
//!
//! Owns the terminal lifecycle and the event loop around the session state
//! machine. Built with ratatui and crossterm.

mod event;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::prelude::*;

use crate::config::SessionConfig;
use crate::error::PomoError;
use crate::session::{Effect, Event, Session};

/// Run the timer until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or deliver events.
pub fn run(config: SessionConfig) -> Result<(), PomoError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Pomodoro"))
        .map_err(|e| PomoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomoError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut session = Session::new(config);
    let result = run_app(&mut terminal, &mut session);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main event loop.
///
/// One event at a time, to completion: draw the current state, block for the
/// next event, feed it to the session, act on the returned effect. A tick is
/// armed only when the session asks for one, so pausing stops the clock
/// without any cancel step.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
) -> Result<(), PomoError> {
    let mut events = event::EventSource::new();

    // Delivered once before the first draw; the session ignores it.
    session.handle_event(Event::Init);

    loop {
        terminal
            .draw(|frame| ui::render(frame, session))
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))?;

        let event = events.next()?;
        match session.handle_event(event) {
            Effect::ScheduleTick => events.arm_tick(),
            Effect::Quit => break,
            Effect::None => {}
        }
    }

    Ok(())
}
