use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every timer state change produces an Event.
/// The host view renders from them; the CLI prints them as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        remaining_secs: u64,
        total_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerTicked {
        remaining_secs: u64,
        progress: f64,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero. The engine is no longer running.
    TimerCompleted {
        total_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        total_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        remaining_secs: u64,
        total_secs: u64,
        running: bool,
        progress: f64,
        label: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn is_completion(&self) -> bool {
        matches!(self, Event::TimerCompleted { .. })
    }
}
