//! Countdown focus timer.
//!
//! The engine is a small state machine over [`TimerState`]. It owns no
//! thread: ticks come from an injected [`TickScheduler`], which is armed on
//! `start` and cancelled on `pause`, `reset` and completion.
//!
//! ## State Transitions
//!
//! ```text
//! Idle --start--> Running --pause--> Paused --start--> Running
//!                    |
//!                    +--tick (remaining hits 0)--> Finished
//! any --reset--> Idle
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(1500, ManualScheduler::new())?;
//! engine.start();
//! // For every token the scheduler delivers:
//! engine.fire(token); // Some(Event::TimerCompleted { .. }) on the last one
//! ```

use std::time::Duration;

use tracing::{debug, info, warn};

use super::display::format_mm_ss;
use super::scheduler::{ManualScheduler, TickScheduler, TickToken};
use super::state::TimerState;
use crate::error::TimerError;
use crate::events::Event;
use crate::time::Clock;

/// Default real-time period between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Core timer engine.
#[derive(Debug)]
pub struct TimerEngine<S: TickScheduler> {
    state: TimerState,
    scheduler: S,
    tick_interval: Duration,
    /// Token of the currently armed tick, if any.
    armed: Option<TickToken>,
    next_generation: u64,
    clock: Clock,
}

impl<S: TickScheduler> TimerEngine<S> {
    /// Create an idle engine with `total_secs` on the clock.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidDuration`] when `total_secs` is zero.
    pub fn new(total_secs: u64, scheduler: S) -> Result<Self, TimerError> {
        Ok(Self {
            state: TimerState::new(total_secs)?,
            scheduler,
            tick_interval: DEFAULT_TICK_INTERVAL,
            armed: None,
            next_generation: 0,
            clock: Clock::default(),
        })
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_secs(&self) -> u64 {
        self.state.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.state.total_secs
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// 0.0 .. 1.0 elapsed fraction, for the progress ring.
    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    /// Remaining time as `mm:ss`.
    pub fn label(&self) -> String {
        format_mm_ss(self.state.remaining_secs)
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn armed_token(&self) -> Option<TickToken> {
        self.armed
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            remaining_secs: self.state.remaining_secs,
            total_secs: self.state.total_secs,
            running: self.state.running,
            progress: self.progress(),
            label: self.label(),
            at: self.clock.now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// No-op when already running or when the countdown is at zero.
    pub fn start(&mut self) -> Option<Event> {
        if self.state.running || self.state.is_finished() {
            return None;
        }
        self.state.running = true;
        self.arm();
        info!(
            remaining_secs = self.state.remaining_secs,
            total_secs = self.state.total_secs,
            "timer started"
        );
        Some(Event::TimerStarted {
            remaining_secs: self.state.remaining_secs,
            total_secs: self.state.total_secs,
            at: self.clock.now(),
        })
    }

    /// No-op when not running. Remaining time is kept.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.state.running {
            return None;
        }
        self.state.running = false;
        self.disarm();
        info!(remaining_secs = self.state.remaining_secs, "timer paused");
        Some(Event::TimerPaused {
            remaining_secs: self.state.remaining_secs,
            at: self.clock.now(),
        })
    }

    /// Stop, cancel any pending tick and reload the clock with `total_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidDuration`] when `total_secs` is zero; the
    /// engine is left untouched in that case.
    pub fn reset(&mut self, total_secs: u64) -> Result<Event, TimerError> {
        let fresh = TimerState::new(total_secs)?;
        self.disarm();
        self.state = fresh;
        info!(total_secs, "timer reset");
        Ok(Event::TimerReset {
            total_secs,
            at: self.clock.now(),
        })
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `None` while not running, `Some(Event::TimerTicked)` for an
    /// ordinary decrement and `Some(Event::TimerCompleted)` when the countdown
    /// reaches zero.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.state.running {
            return None;
        }
        self.state.remaining_secs = self.state.remaining_secs.saturating_sub(1);
        debug!(remaining_secs = self.state.remaining_secs, "tick");

        if self.state.is_finished() {
            self.state.running = false;
            self.disarm();
            info!(total_secs = self.state.total_secs, "timer completed");
            return Some(Event::TimerCompleted {
                total_secs: self.state.total_secs,
                at: self.clock.now(),
            });
        }

        Some(Event::TimerTicked {
            remaining_secs: self.state.remaining_secs,
            progress: self.progress(),
            at: self.clock.now(),
        })
    }

    /// Handle a tick delivered by the scheduler.
    ///
    /// Tokens from a cancelled arm are dropped.
    pub fn fire(&mut self, token: TickToken) -> Option<Event> {
        if self.armed != Some(token) {
            warn!(generation = token.generation(), "dropping stale tick");
            return None;
        }
        self.tick()
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn arm(&mut self) {
        self.disarm();
        let token = TickToken(self.next_generation);
        self.next_generation += 1;
        self.armed = Some(token);
        self.scheduler.arm(token, self.tick_interval);
    }

    fn disarm(&mut self) {
        if let Some(token) = self.armed.take() {
            self.scheduler.cancel(token);
        }
    }
}

impl TimerEngine<ManualScheduler> {
    /// Let `periods` tick periods pass on the manual scheduler.
    ///
    /// Stops early once nothing is armed, since later periods deliver nothing.
    pub fn advance(&mut self, periods: usize) -> Vec<Event> {
        let mut events = Vec::new();
        for _ in 0..periods {
            if self.armed.is_none() {
                break;
            }
            for token in self.scheduler.advance(1) {
                events.extend(self.fire(token));
            }
        }
        events
    }
}

impl<S: TickScheduler> Drop for TimerEngine<S> {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_clock;

    fn engine(total: u64) -> TimerEngine<ManualScheduler> {
        TimerEngine::new(total, ManualScheduler::new())
            .unwrap()
            .with_clock(fixed_clock())
    }

    #[test]
    fn new_rejects_zero_duration() {
        let err = TimerEngine::new(0, ManualScheduler::new()).unwrap_err();
        assert_eq!(err, TimerError::InvalidDuration { total_secs: 0 });
    }

    #[test]
    fn start_arms_scheduler() {
        let mut e = engine(10);
        assert!(e.start().is_some());
        assert!(e.is_running());
        assert_eq!(e.scheduler().armed(), e.armed_token());
        assert_eq!(e.scheduler().period(), Some(DEFAULT_TICK_INTERVAL));
    }

    #[test]
    fn start_twice_is_noop() {
        let mut e = engine(10);
        e.start();
        assert!(e.start().is_none());
        assert_eq!(e.scheduler().arm_count(), 1);
    }

    #[test]
    fn pause_when_idle_is_noop() {
        let mut e = engine(10);
        assert!(e.pause().is_none());
        assert_eq!(e.remaining_secs(), 10);
    }

    #[test]
    fn pause_cancels_tick() {
        let mut e = engine(10);
        e.start();
        let token = e.armed_token().unwrap();
        e.pause();
        assert_eq!(e.scheduler().armed(), None);
        assert_eq!(e.scheduler().cancelled(), &[token]);
        assert!(e.fire(token).is_none());
        assert_eq!(e.remaining_secs(), 10);
    }

    #[test]
    fn stale_token_after_reset_is_ignored() {
        let mut e = engine(10);
        e.start();
        let old = e.armed_token().unwrap();
        e.tick();
        e.reset(10).unwrap();
        e.start();
        assert_ne!(e.armed_token(), Some(old));
        assert!(e.fire(old).is_none());
        assert_eq!(e.remaining_secs(), 10);
    }

    #[test]
    fn reset_rejects_zero_and_keeps_state() {
        let mut e = engine(10);
        e.start();
        e.tick();
        assert!(e.reset(0).is_err());
        assert_eq!(e.remaining_secs(), 9);
        assert!(e.is_running());
    }

    #[test]
    fn completion_disarms_and_signals() {
        let mut e = engine(2);
        e.start();
        assert!(matches!(e.tick(), Some(Event::TimerTicked { remaining_secs: 1, .. })));
        let done = e.tick().unwrap();
        assert!(done.is_completion());
        assert!(!e.is_running());
        assert_eq!(e.scheduler().armed(), None);
        assert!(e.tick().is_none());
        assert_eq!(e.remaining_secs(), 0);
    }

    #[test]
    fn start_at_zero_is_noop() {
        let mut e = engine(1);
        e.start();
        e.tick();
        assert!(e.start().is_none());
        assert!(!e.is_running());
    }

    #[test]
    fn snapshot_reports_label_and_progress() {
        let mut e = engine(120);
        e.start();
        for _ in 0..30 {
            e.tick();
        }
        match e.snapshot() {
            Event::StateSnapshot {
                remaining_secs,
                running,
                progress,
                label,
                ..
            } => {
                assert_eq!(remaining_secs, 90);
                assert!(running);
                assert!((progress - 0.25).abs() < f64::EPSILON);
                assert_eq!(label, "01:30");
            }
            other => panic!("Expected StateSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn advance_stops_once_disarmed() {
        let mut e = engine(3);
        assert!(e.advance(usize::MAX).is_empty());

        e.start();
        let events = e.advance(usize::MAX);
        assert_eq!(events.len(), 3);
        assert!(events[2].is_completion());
        assert_eq!(e.remaining_secs(), 0);
    }

    #[test]
    fn drop_cancels_armed_tick() {
        use std::cell::RefCell;
        use std::rc::Rc;

        #[derive(Default)]
        struct Recording(Rc<RefCell<Vec<TickToken>>>);

        impl TickScheduler for Recording {
            fn arm(&mut self, _token: TickToken, _period: Duration) {}
            fn cancel(&mut self, token: TickToken) {
                self.0.borrow_mut().push(token);
            }
        }

        let cancelled = Rc::new(RefCell::new(Vec::new()));
        {
            let mut e = TimerEngine::new(5, Recording(Rc::clone(&cancelled))).unwrap();
            e.start();
        }
        assert_eq!(cancelled.borrow().len(), 1);
    }
}
