//! Session configuration for pomo.
//!
//! Durations and cycle count are fixed for the lifetime of the process; there
//! is no config file and no flags, only the built-in defaults.

/// Work/break durations and cycle count for a Pomodoro session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Length of one work interval, in seconds.
    pub work_seconds: u32,
    /// Length of one break interval, in seconds.
    pub break_seconds: u32,
    /// Number of work/break pairs in a full session.
    pub cycles: u32,
}

impl Default for SessionConfig {
    /// The classic Pomodoro: 25 minutes of work, a 5 minute break, 4 cycles.
    fn default() -> Self {
        Self {
            work_seconds: 25 * 60,
            break_seconds: 5 * 60,
            cycles: 4,
        }
    }
}

impl SessionConfig {
    /// Create a configuration from explicit values.
    #[must_use]
    pub const fn new(work_seconds: u32, break_seconds: u32, cycles: u32) -> Self {
        Self {
            work_seconds,
            break_seconds,
            cycles,
        }
    }
}
