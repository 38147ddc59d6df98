//! Real-time host loop for a [`TimerEngine`] driven by a [`TokioScheduler`].

use std::future::Future;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use super::engine::TimerEngine;
use super::scheduler::{TickToken, TokioScheduler};
use crate::events::Event;

/// How a countdown run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// The countdown reached zero.
    Completed,
    /// Shutdown was requested; the engine was paused with time left.
    Interrupted { remaining_secs: u64 },
    /// Nothing to run: the countdown was already at zero.
    AlreadyFinished,
}

/// Start `engine` and feed it ticks until it completes or `shutdown` resolves.
///
/// Every event the engine produces is passed to `on_event`, starting with
/// `TimerStarted` (unless the engine was already running).
pub async fn run_countdown<F, Fut>(
    engine: &mut TimerEngine<TokioScheduler>,
    ticks: &mut UnboundedReceiver<TickToken>,
    shutdown: Fut,
    mut on_event: F,
) -> CountdownOutcome
where
    F: FnMut(&Event),
    Fut: Future<Output = ()>,
{
    match engine.start() {
        Some(event) => on_event(&event),
        None if !engine.is_running() => return CountdownOutcome::AlreadyFinished,
        None => {}
    }

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            token = ticks.recv() => {
                // The engine holds the sender through its scheduler.
                let Some(token) = token else {
                    return CountdownOutcome::Interrupted { remaining_secs: engine.remaining_secs() };
                };
                if let Some(event) = engine.fire(token) {
                    on_event(&event);
                    if event.is_completion() {
                        return CountdownOutcome::Completed;
                    }
                }
            }
            _ = &mut shutdown => {
                info!("countdown interrupted");
                if let Some(event) = engine.pause() {
                    on_event(&event);
                }
                return CountdownOutcome::Interrupted { remaining_secs: engine.remaining_secs() };
            }
        }
    }
}
