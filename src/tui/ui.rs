//! UI rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::session::{Phase, Session};

/// Render the application UI.
///
/// The view text itself comes from [`Session::render`]; this layer only lays
/// it out and colors it by phase.
pub fn render(frame: &mut Frame<'_>, session: &Session) {
    // Create layout: header, view text, progress gauge
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // View
            Constraint::Length(3), // Progress
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_view(frame, session, chunks[1]);
    render_progress(frame, session, chunks[2]);
}

const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Working => Color::Red,
        Phase::OnBreak => Color::Green,
        Phase::Idle => Color::Yellow,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, session: &Session, area: Rect) {
    let title = format!(
        " Pomodoro ({} of {} cycles left) ",
        session.cycles_remaining(),
        session.cycles_total()
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the session view text.
fn render_view(frame: &mut Frame<'_>, session: &Session, area: Rect) {
    let view = Paragraph::new(session.render())
        .style(Style::default().fg(phase_color(session.phase())))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );

    frame.render_widget(view, area);
}

/// Render the progress gauge for the current interval.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_progress(frame: &mut Frame<'_>, session: &Session, area: Rect) {
    let percent = (session.progress() * 100.0).clamp(0.0, 100.0) as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(phase_color(session.phase())))
        .percent(percent);

    frame.render_widget(gauge, area);
}
