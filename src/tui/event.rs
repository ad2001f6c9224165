//! Event delivery for the TUI.
//!
//! Translates crossterm input into session events and owns the one-shot tick
//! timer. A tick is armed only on request and cleared on delivery, so at most
//! one is ever outstanding and none arrives unasked.

use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::PomoError;
use crate::session::Event;

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Blocking source of session events.
pub struct EventSource {
    /// When the pending tick is due, if one was requested.
    tick_due: Option<Instant>,
}

impl EventSource {
    pub const fn new() -> Self {
        Self { tick_due: None }
    }

    /// Request one tick, one second from now.
    pub fn arm_tick(&mut self) {
        self.tick_due = Some(Instant::now() + TICK_INTERVAL);
    }

    /// Block until the next session event: a due tick or a key press.
    ///
    /// Keys and ticks are delivered in arrival order, one at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if event polling or reading fails.
    pub fn next(&mut self) -> Result<Event, PomoError> {
        loop {
            // A due tick is delivered before polling for further input.
            if let Some(due) = self.tick_due {
                let now = Instant::now();
                if now >= due {
                    self.tick_due = None;
                    return Ok(Event::Tick(Local::now()));
                }
                if let Some(key) = poll_key(due - now)? {
                    return Ok(key);
                }
            } else if let Some(key) = poll_key(POLL_TIMEOUT)? {
                return Ok(key);
            }
        }
    }
}

/// Poll for a key press within the timeout.
///
/// Returns `None` on timeout or on terminal events that carry no key (the
/// next draw picks up resizes on its own).
fn poll_key(timeout: Duration) -> Result<Option<Event>, PomoError> {
    if !event::poll(timeout.min(POLL_TIMEOUT))
        .map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let TermEvent::Key(key) = event::read()
        .map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    // Windows terminals report both press and release.
    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    // Ctrl+C quits like 'q'.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Event::Key('q')));
    }

    match key.code {
        KeyCode::Char(c) => Ok(Some(Event::Key(c))),
        _ => Ok(None),
    }
}
