//! Error types for pomo.

use thiserror::Error;

/// Errors that can occur while running pomo.
///
/// The timer state machine itself is infallible; everything that can go wrong
/// lives at the terminal boundary.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Terminal setup, teardown, or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),
}
