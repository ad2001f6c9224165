//! The Pomodoro session state machine.
//!
//! [`Session`] owns all mutable timer state. It consumes [`Event`]s one at a
//! time through [`Session::handle_event`] and answers with an [`Effect`]
//! telling the host what, if anything, to do next. [`Session::render`]
//! projects the state to the full-screen view string and has no side effects.

pub mod event;
pub mod format;
pub mod state;

pub use event::{Effect, Event};
pub use state::{Phase, Session};
