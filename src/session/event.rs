//! Events consumed and effects produced by the session state machine.

use chrono::{DateTime, Local};

/// An input delivered by the host runtime.
///
/// The event set is closed: the state machine matches it exhaustively and
/// anything it does not recognize (including every key outside the control
/// set) is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A one-second time advance. Only delivered after the session asked for
    /// one via [`Effect::ScheduleTick`]. The timestamp is informational; the
    /// countdown logic never reads it.
    Tick(DateTime<Local>),
    /// A decoded key press. Recognized keys: `' '` (start/pause), `'r'`
    /// (reset), `'q'` (quit). The event source translates Ctrl+C to `'q'`.
    Key(char),
    /// Delivered exactly once, before the first draw.
    Init,
}

/// What the session wants the host runtime to do after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver one `Tick` after a one-second delay.
    ///
    /// The countdown re-arms itself on every tick; pausing is simply not
    /// asking again, so there is no cancel operation to get wrong.
    ScheduleTick,
    /// Shut down. No further events, draws, or ticks.
    Quit,
    /// Nothing to do.
    None,
}
