mod display;
mod engine;
mod runner;
mod scheduler;
mod state;

pub use display::{format_mm_ss, render_bar, ProgressRing};
pub use engine::{TimerEngine, DEFAULT_TICK_INTERVAL};
pub use runner::{run_countdown, CountdownOutcome};
pub use scheduler::{ManualScheduler, TickScheduler, TickToken, TokioScheduler};
pub use state::TimerState;
