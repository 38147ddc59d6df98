use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// Countdown state owned by a [`TimerEngine`](super::TimerEngine).
///
/// Invariant: `remaining_secs <= total_secs` and `total_secs > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub remaining_secs: u64,
    pub total_secs: u64,
    pub running: bool,
}

impl TimerState {
    /// Fresh, idle state with the full duration remaining.
    pub fn new(total_secs: u64) -> Result<Self, TimerError> {
        if total_secs == 0 {
            return Err(TimerError::InvalidDuration { total_secs });
        }
        Ok(Self {
            remaining_secs: total_secs,
            total_secs,
            running: false,
        })
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.total_secs - self.remaining_secs
    }

    /// Elapsed fraction of the configured duration, 0.0 ..= 1.0.
    pub fn progress(&self) -> f64 {
        self.elapsed_secs() as f64 / self.total_secs as f64
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }
}
