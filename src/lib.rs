//! pomo - A terminal Pomodoro timer
//!
//! This crate provides a full-screen terminal Pomodoro timer: a fixed number
//! of work/break cycles counted down one second at a time, with pause, resume,
//! and reset driven entirely by the keyboard.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod tui;

pub use cli::args::Cli;
pub use config::SessionConfig;
pub use error::PomoError;
pub use session::{Effect, Event, Phase, Session};
