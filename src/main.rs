use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomo::error::PomoError;
use pomo::{Cli, SessionConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomoError> {
    let _cli = Cli::parse();
    pomo::tui::run(SessionConfig::default())
}
