use clap::Parser;

/// pomo takes no arguments: it launches straight into the timer and runs
/// until quit. Parsing still goes through clap so `--help` and `--version`
/// behave like any other CLI.
#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A full-screen terminal Pomodoro timer")]
#[command(long_about = "pomo - A terminal Pomodoro timer

Runs a fixed set of work/break cycles in a full-screen terminal view.

CONTROLS:
  Space    Start or pause the current countdown
  r        Reset the session to the first cycle
  q        Quit (Ctrl+C also works)")]
#[command(version)]
pub struct Cli {}
