//! The timer state machine.

use crate::config::SessionConfig;
use crate::session::event::{Effect, Event};
use crate::session::format::format_mmss;

/// Which countdown, if any, is currently running.
///
/// Exactly one phase holds at a time. A pause is `Idle` with a remainder
/// below its full duration; "cycle complete" is `Idle` with no cycles left,
/// a display condition rather than a stored phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not counting down: never started, paused, or finished.
    Idle,
    /// Counting down work time.
    Working,
    /// Counting down break time.
    OnBreak,
}

/// Which banner the view shows. Derived from state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Banner {
    Working,
    OnBreak,
    CycleComplete,
    PausedWork,
    PausedBreak,
    Initial,
}

/// A Pomodoro session: fixed durations and cycle count, plus the live
/// countdown state.
///
/// All mutation goes through [`Session::handle_event`]; everything else is a
/// read-only projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    work_duration: u32,
    break_duration: u32,
    cycles_total: u32,
    work_remaining: u32,
    break_remaining: u32,
    cycles_remaining: u32,
    phase: Phase,
}

impl Session {
    /// Create a fresh session: idle, full durations, full cycle count.
    #[must_use]
    pub const fn new(config: SessionConfig) -> Self {
        Self {
            work_duration: config.work_seconds,
            break_duration: config.break_seconds,
            cycles_total: config.cycles,
            work_remaining: config.work_seconds,
            break_remaining: config.break_seconds,
            cycles_remaining: config.cycles,
            phase: Phase::Idle,
        }
    }

    /// Advance the state machine by one event and say what the host should
    /// do next.
    ///
    /// Total over the whole event set: unrecognized keys, `Init`, and ticks
    /// that arrive while idle leave the state untouched and request nothing.
    pub fn handle_event(&mut self, event: Event) -> Effect {
        match event {
            Event::Tick(_) => self.on_tick(),
            Event::Key(' ') => self.toggle(),
            Event::Key('r') => {
                self.reset();
                Effect::None
            }
            Event::Key('q') => Effect::Quit,
            Event::Key(_) | Event::Init => Effect::None,
        }
    }

    fn on_tick(&mut self) -> Effect {
        match self.phase {
            Phase::Working => {
                self.work_remaining = self.work_remaining.saturating_sub(1);
                if self.work_remaining == 0 {
                    // Work drained on this tick; the break starts immediately.
                    self.phase = Phase::OnBreak;
                }
                Effect::ScheduleTick
            }
            Phase::OnBreak => {
                self.break_remaining = self.break_remaining.saturating_sub(1);
                if self.break_remaining == 0 {
                    self.complete_cycle();
                }
                Effect::ScheduleTick
            }
            // Nothing scheduled this tick's successor, so the chain ends here.
            Phase::Idle => Effect::None,
        }
    }

    /// Break finished: refill both countdowns and either start the next
    /// cycle's work or, with no cycles left, stop.
    fn complete_cycle(&mut self) {
        self.work_remaining = self.work_duration;
        self.break_remaining = self.break_duration;
        self.cycles_remaining = self.cycles_remaining.saturating_sub(1);
        self.phase = if self.cycles_remaining > 0 {
            Phase::Working
        } else {
            Phase::Idle
        };
    }

    /// Space: pause a running countdown, or start/resume from idle.
    ///
    /// Resuming picks the phase that was paused: a drained work countdown
    /// means the break was in progress (or about to start), so it resumes as
    /// a break; anything else resumes as work.
    fn toggle(&mut self) -> Effect {
        match self.phase {
            Phase::Working | Phase::OnBreak => {
                self.phase = Phase::Idle;
                Effect::None
            }
            Phase::Idle => {
                self.phase = if self.work_remaining == 0 {
                    Phase::OnBreak
                } else {
                    Phase::Working
                };
                Effect::ScheduleTick
            }
        }
    }

    /// `r`: back to a fresh idle session, countdowns and cycles refilled.
    fn reset(&mut self) {
        self.work_remaining = self.work_duration;
        self.break_remaining = self.break_duration;
        self.cycles_remaining = self.cycles_total;
        self.phase = Phase::Idle;
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left on the work countdown.
    #[must_use]
    pub const fn work_remaining(&self) -> u32 {
        self.work_remaining
    }

    /// Seconds left on the break countdown.
    #[must_use]
    pub const fn break_remaining(&self) -> u32 {
        self.break_remaining
    }

    /// Work/break pairs still to run.
    #[must_use]
    pub const fn cycles_remaining(&self) -> u32 {
        self.cycles_remaining
    }

    /// Work/break pairs in a full session.
    #[must_use]
    pub const fn cycles_total(&self) -> u32 {
        self.cycles_total
    }

    /// Progress through the current interval as a fraction (0.0 - 1.0).
    ///
    /// Follows the interval the view is showing: the work countdown while
    /// working or paused mid-work, the break countdown while on break or
    /// paused mid-break, 1.0 once the full session is complete.
    #[must_use]
    pub fn progress(&self) -> f64 {
        match self.banner() {
            Banner::Working | Banner::PausedWork => {
                fraction_elapsed(self.work_remaining, self.work_duration)
            }
            Banner::OnBreak | Banner::PausedBreak => {
                fraction_elapsed(self.break_remaining, self.break_duration)
            }
            Banner::CycleComplete => 1.0,
            Banner::Initial => 0.0,
        }
    }

    /// Classify the state for display.
    ///
    /// Precedence: a running countdown wins; idle splits into complete,
    /// paused-mid-break (work drained), paused-mid-work, and untouched. The
    /// break countdown only moves after work drains, so the idle arms are
    /// mutually exclusive.
    const fn banner(&self) -> Banner {
        match self.phase {
            Phase::Working => Banner::Working,
            Phase::OnBreak => Banner::OnBreak,
            Phase::Idle => {
                if self.cycles_remaining == 0 {
                    Banner::CycleComplete
                } else if self.work_remaining == 0 {
                    Banner::PausedBreak
                } else if self.work_remaining < self.work_duration {
                    Banner::PausedWork
                } else {
                    Banner::Initial
                }
            }
        }
    }

    /// Project the state to the full-screen view string.
    ///
    /// Pure: no side effects, same state always yields the same string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut s = String::new();

        match self.banner() {
            Banner::Working => {
                s.push_str(&format!(
                    "Work Time: {}\n\n",
                    format_mmss(self.work_remaining)
                ));
                s.push_str("Working... (Press space to pause)\n");
            }
            Banner::OnBreak => {
                s.push_str(&format!(
                    "☕ Break Time: {}\n\n",
                    format_mmss(self.break_remaining)
                ));
                s.push_str("Break - Go Get Some Rest! (Press space to pause)\n");
            }
            Banner::CycleComplete => {
                s.push_str("🎉 Cycle Complete! Ready for next work session.\n");
                s.push_str(&format!(
                    "⏰ Work Time: {}\n\n",
                    format_mmss(self.work_duration)
                ));
            }
            Banner::PausedWork => {
                s.push_str(&format!(
                    "⏰ Work Time: {}\n\n",
                    format_mmss(self.work_remaining)
                ));
                s.push_str("⏸️ Work Paused (Press space to resume)\n");
            }
            Banner::PausedBreak => {
                s.push_str(&format!(
                    "⏰ Break Time: {}\n\n",
                    format_mmss(self.break_remaining)
                ));
                s.push_str("⏸️ Break Paused (Press space to resume)\n");
            }
            Banner::Initial => {
                s.push_str(&format!(
                    "⏰ Work Time: {}\n\n",
                    format_mmss(self.work_remaining)
                ));
                s.push_str("Press SpaceBar to Start Your Pomodoro!\n");
            }
        }

        s.push_str("\nControls:\n");
        s.push_str("• Space: Start/Pause\n");
        s.push_str("• r: Reset timer\n");
        s.push_str("• q: Quit\n");

        s
    }
}

/// How much of an interval has elapsed, as a fraction.
fn fraction_elapsed(remaining: u32, duration: u32) -> f64 {
    if duration == 0 {
        return 1.0;
    }
    1.0 - (f64::from(remaining) / f64::from(duration))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn session() -> Session {
        Session::new(SessionConfig::new(6, 3, 3))
    }

    fn tick() -> Event {
        Event::Tick(Local::now())
    }

    fn assert_bounds(s: &Session) {
        assert!(s.work_remaining() <= 6);
        assert!(s.break_remaining() <= 3);
    }

    #[test]
    fn test_initial_state() {
        let s = session();
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.work_remaining(), 6);
        assert_eq!(s.break_remaining(), 3);
        assert_eq!(s.cycles_remaining(), 3);
        assert_eq!(s.cycles_total(), 3);
    }

    #[test]
    fn test_space_starts_work_and_schedules_tick() {
        let mut s = session();
        assert_eq!(s.handle_event(Event::Key(' ')), Effect::ScheduleTick);
        assert_eq!(s.phase(), Phase::Working);
    }

    #[test]
    fn test_pause_before_first_tick_loses_no_time() {
        let mut s = session();
        s.handle_event(Event::Key(' '));
        assert_eq!(s.handle_event(Event::Key(' ')), Effect::None);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.work_remaining(), 6);
    }

    #[test]
    fn test_tick_decrements_work_and_reschedules() {
        let mut s = session();
        s.handle_event(Event::Key(' '));
        assert_eq!(s.handle_event(tick()), Effect::ScheduleTick);
        assert_eq!(s.work_remaining(), 5);
        assert_eq!(s.phase(), Phase::Working);
    }

    #[test]
    fn test_work_drains_into_break() {
        let mut s = session();
        s.handle_event(Event::Key(' '));
        for _ in 0..6 {
            assert_eq!(s.handle_event(tick()), Effect::ScheduleTick);
        }
        assert_eq!(s.phase(), Phase::OnBreak);
        assert_eq!(s.work_remaining(), 0);
        assert_eq!(s.break_remaining(), 3);
    }

    #[test]
    fn test_break_drains_into_next_cycle() {
        let mut s = session();
        s.handle_event(Event::Key(' '));
        for _ in 0..9 {
            s.handle_event(tick());
        }
        assert_eq!(s.phase(), Phase::Working);
        assert_eq!(s.work_remaining(), 6);
        assert_eq!(s.break_remaining(), 3);
        assert_eq!(s.cycles_remaining(), 2);
    }

    #[test]
    fn test_final_break_completion_goes_idle() {
        let mut s = Session::new(SessionConfig::new(6, 3, 1));
        s.handle_event(Event::Key(' '));
        for _ in 0..8 {
            s.handle_event(tick());
        }
        // One second of break left before the last cycle closes.
        assert_eq!(s.phase(), Phase::OnBreak);
        assert_eq!(s.break_remaining(), 1);
        assert_eq!(s.cycles_remaining(), 1);

        assert_eq!(s.handle_event(tick()), Effect::ScheduleTick);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.cycles_remaining(), 0);
        assert_eq!(s.work_remaining(), 6);
        assert_eq!(s.break_remaining(), 3);
    }

    #[test]
    fn test_stray_tick_while_idle_is_a_noop() {
        let mut s = session();
        let before = s.clone();
        assert_eq!(s.handle_event(tick()), Effect::None);
        assert_eq!(s, before);
    }

    #[test]
    fn test_resume_continues_paused_work() {
        let mut s = session();
        s.handle_event(Event::Key(' '));
        s.handle_event(tick());
        s.handle_event(tick());
        s.handle_event(Event::Key(' '));
        assert_eq!(s.phase(), Phase::Idle);

        assert_eq!(s.handle_event(Event::Key(' ')), Effect::ScheduleTick);
        assert_eq!(s.phase(), Phase::Working);
        assert_eq!(s.work_remaining(), 4);
    }

    #[test]
    fn test_resume_continues_paused_break() {
        let mut s = session();
        s.handle_event(Event::Key(' '));
        for _ in 0..7 {
            s.handle_event(tick());
        }
        assert_eq!(s.phase(), Phase::OnBreak);
        assert_eq!(s.break_remaining(), 2);

        s.handle_event(Event::Key(' '));
        assert_eq!(s.phase(), Phase::Idle);

        assert_eq!(s.handle_event(Event::Key(' ')), Effect::ScheduleTick);
        assert_eq!(s.phase(), Phase::OnBreak);
        assert_eq!(s.break_remaining(), 2);
    }

    #[test]
    fn test_reset_refills_everything() {
        let mut s = session();
        s.handle_event(Event::Key(' '));
        for _ in 0..10 {
            s.handle_event(tick());
        }
        assert_eq!(s.handle_event(Event::Key('r')), Effect::None);
        assert_eq!(s, session());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut s = session();
        s.handle_event(Event::Key(' '));
        s.handle_event(tick());
        s.handle_event(Event::Key('r'));
        let once = s.clone();
        s.handle_event(Event::Key('r'));
        assert_eq!(s, once);
    }

    #[test]
    fn test_quit_in_any_phase() {
        let mut s = session();
        assert_eq!(s.handle_event(Event::Key('q')), Effect::Quit);

        s.handle_event(Event::Key(' '));
        assert_eq!(s.handle_event(Event::Key('q')), Effect::Quit);

        for _ in 0..6 {
            s.handle_event(tick());
        }
        assert_eq!(s.phase(), Phase::OnBreak);
        assert_eq!(s.handle_event(Event::Key('q')), Effect::Quit);
    }

    #[test]
    fn test_unrecognized_key_is_a_noop() {
        let mut s = session();
        s.handle_event(Event::Key(' '));
        s.handle_event(tick());
        let before = s.clone();
        assert_eq!(s.handle_event(Event::Key('x')), Effect::None);
        assert_eq!(s.handle_event(Event::Init), Effect::None);
        assert_eq!(s, before);
    }

    #[test]
    fn test_cycles_never_go_negative() {
        let mut s = Session::new(SessionConfig::new(2, 1, 1));
        s.handle_event(Event::Key(' '));
        for _ in 0..3 {
            s.handle_event(tick());
        }
        assert_eq!(s.cycles_remaining(), 0);

        // Restart after completion runs a bonus cycle; the counter stays at zero.
        s.handle_event(Event::Key(' '));
        for _ in 0..3 {
            s.handle_event(tick());
        }
        assert_eq!(s.cycles_remaining(), 0);
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_remainders_stay_in_bounds() {
        let mut s = session();
        let script = [
            Event::Key(' '),
            tick(),
            tick(),
            Event::Key(' '),
            Event::Key(' '),
            tick(),
            tick(),
            tick(),
            tick(),
            tick(),
            Event::Key(' '),
            Event::Key(' '),
            tick(),
            tick(),
            Event::Key('r'),
            tick(),
            Event::Key(' '),
            tick(),
        ];
        for event in script {
            s.handle_event(event);
            assert_bounds(&s);
        }
    }

    #[test]
    fn test_render_initial_banner() {
        let s = session();
        let view = s.render();
        assert!(view.contains("Press SpaceBar to Start Your Pomodoro!"));
        assert!(view.contains("Work Time: 00:06"));
        assert!(view.contains("Controls:"));
        assert!(view.contains("• Space: Start/Pause"));
    }

    #[test]
    fn test_render_working_banner() {
        let mut s = session();
        s.handle_event(Event::Key(' '));
        s.handle_event(tick());
        let view = s.render();
        assert!(view.contains("Work Time: 00:05"));
        assert!(view.contains("Working..."));
    }

    #[test]
    fn test_render_break_banner() {
        let mut s = session();
        s.handle_event(Event::Key(' '));
        for _ in 0..6 {
            s.handle_event(tick());
        }
        let view = s.render();
        assert!(view.contains("Break Time: 00:03"));
        assert!(view.contains("Go Get Some Rest!"));
    }

    #[test]
    fn test_render_paused_banners() {
        let mut s = session();
        s.handle_event(Event::Key(' '));
        s.handle_event(tick());
        s.handle_event(Event::Key(' '));
        assert!(s.render().contains("Work Paused"));

        s.handle_event(Event::Key(' '));
        for _ in 0..6 {
            s.handle_event(tick());
        }
        s.handle_event(Event::Key(' '));
        assert!(s.render().contains("Break Paused"));
    }

    #[test]
    fn test_render_cycle_complete_banner() {
        let mut s = Session::new(SessionConfig::new(2, 1, 1));
        s.handle_event(Event::Key(' '));
        for _ in 0..3 {
            s.handle_event(tick());
        }
        let view = s.render();
        assert!(view.contains("Cycle Complete!"));
        assert!(view.contains("Work Time: 00:02"));
    }

    #[test]
    fn test_render_is_pure() {
        let s = session();
        assert_eq!(s.render(), s.render());
    }

    #[test]
    fn test_progress() {
        let mut s = Session::new(SessionConfig::new(100, 10, 1));
        assert!(s.progress().abs() < f64::EPSILON);

        s.handle_event(Event::Key(' '));
        for _ in 0..50 {
            s.handle_event(tick());
        }
        assert!((s.progress() - 0.5).abs() < 0.01);
    }
}
