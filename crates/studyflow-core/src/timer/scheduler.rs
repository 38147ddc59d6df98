//! Tick sources for the timer engine.
//!
//! The engine never sleeps or spawns on its own. It asks a [`TickScheduler`]
//! to deliver a [`TickToken`] once per period and hands every delivered token
//! back to [`TimerEngine::fire`](super::TimerEngine::fire). Each arm uses a
//! fresh token, so a token that arrives after its arm was cancelled is
//! recognised as stale and dropped.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Identifies one arm of the periodic tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickToken(pub(crate) u64);

impl TickToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Periodic tick source injected into the engine.
pub trait TickScheduler {
    /// Begin delivering `token` every `period`, replacing any earlier arm.
    fn arm(&mut self, token: TickToken, period: Duration);

    /// Stop delivering `token`. Unknown or already-cancelled tokens are ignored.
    fn cancel(&mut self, token: TickToken);
}

/// Deterministic scheduler for tests and simulations.
///
/// Nothing fires by itself; [`ManualScheduler::advance`] reports which tokens
/// would have been delivered over a number of periods.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    armed: Option<(TickToken, Duration)>,
    cancelled: Vec<TickToken>,
    arm_count: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn armed(&self) -> Option<TickToken> {
        self.armed.map(|(token, _)| token)
    }

    pub fn period(&self) -> Option<Duration> {
        self.armed.map(|(_, period)| period)
    }

    pub fn cancelled(&self) -> &[TickToken] {
        &self.cancelled
    }

    /// How many times `arm` has been called.
    pub fn arm_count(&self) -> usize {
        self.arm_count
    }

    /// Tokens delivered over `periods` periods with the current arm.
    pub fn advance(&self, periods: usize) -> Vec<TickToken> {
        match self.armed() {
            Some(token) => vec![token; periods],
            None => Vec::new(),
        }
    }
}

impl TickScheduler for ManualScheduler {
    fn arm(&mut self, token: TickToken, period: Duration) {
        if let Some((previous, _)) = self.armed.replace((token, period)) {
            self.cancelled.push(previous);
        }
        self.arm_count += 1;
    }

    fn cancel(&mut self, token: TickToken) {
        if self.armed() == Some(token) {
            self.armed = None;
            self.cancelled.push(token);
        }
    }
}

/// Real-time scheduler backed by a tokio interval task.
///
/// Tokens are sent down an unbounded channel; the owner of the engine drains
/// the receiver and calls `fire`. The spawned task never touches timer state.
/// Must be armed from within a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<TickToken>,
    task: Option<(TickToken, JoinHandle<()>)>,
}

impl TokioScheduler {
    /// Create a scheduler together with the receiving end of its tick channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TickToken>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, task: None }, rx)
    }

    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }

    fn abort_current(&mut self) {
        if let Some((_, handle)) = self.task.take() {
            handle.abort();
        }
    }
}

impl TickScheduler for TokioScheduler {
    fn arm(&mut self, token: TickToken, period: Duration) {
        self.abort_current();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            // First delivery one full period after arming.
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(token).is_err() {
                    break;
                }
            }
        });
        self.task = Some((token, handle));
    }

    fn cancel(&mut self, token: TickToken) {
        if self.task.as_ref().map(|(armed, _)| *armed) == Some(token) {
            self.abort_current();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.abort_current();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_advance_without_arm_is_empty() {
        let scheduler = ManualScheduler::new();
        assert!(scheduler.advance(3).is_empty());
    }

    #[test]
    fn manual_rearm_cancels_previous() {
        let mut scheduler = ManualScheduler::new();
        scheduler.arm(TickToken(1), Duration::from_secs(1));
        scheduler.arm(TickToken(2), Duration::from_secs(1));
        assert_eq!(scheduler.armed(), Some(TickToken(2)));
        assert_eq!(scheduler.cancelled(), &[TickToken(1)]);
        assert_eq!(scheduler.arm_count(), 2);
    }

    #[test]
    fn manual_cancel_ignores_unknown_token() {
        let mut scheduler = ManualScheduler::new();
        scheduler.arm(TickToken(5), Duration::from_secs(1));
        scheduler.cancel(TickToken(4));
        assert_eq!(scheduler.armed(), Some(TickToken(5)));
        scheduler.cancel(TickToken(5));
        assert_eq!(scheduler.armed(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_delivers_once_per_period() {
        let (mut scheduler, mut rx) = TokioScheduler::channel();
        scheduler.arm(TickToken(7), Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(3500)).await;
        let mut delivered = Vec::new();
        while let Ok(token) = rx.try_recv() {
            delivered.push(token);
        }
        assert_eq!(delivered, vec![TickToken(7); 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_cancel_stops_delivery() {
        let (mut scheduler, mut rx) = TokioScheduler::channel();
        scheduler.arm(TickToken(1), Duration::from_secs(1));
        tokio::time::sleep(Duration::from_millis(1500)).await;
        scheduler.cancel(TickToken(1));
        assert!(!scheduler.is_armed());

        tokio::time::sleep(Duration::from_secs(5)).await;
        let mut delivered = 0;
        while rx.try_recv().is_ok() {
            delivered += 1;
        }
        assert_eq!(delivered, 1);
    }
}
