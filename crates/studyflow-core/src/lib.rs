//! # Studyflow Core Library
//!
//! Core logic for the Studyflow study dashboard. The `studyflow` CLI is a
//! thin host view over this crate.
//!
//! ## Architecture
//!
//! - **Timer Engine**: countdown state machine driven by an injected tick
//!   scheduler, so tests run without wall-clock waits
//! - **Dashboard**: static mock data, explicit UI state and pure text renderers
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Focus timer state machine
//! - [`TickScheduler`]: Tick source seam ([`ManualScheduler`], [`TokioScheduler`])
//! - [`DashboardState`]: Theme, notification flags and the new-session form
//! - [`Config`]: Application configuration management

pub mod dashboard;
pub mod error;
pub mod events;
pub mod storage;
pub mod time;
pub mod timer;

pub use dashboard::{DashboardState, MockData, MonthGrid, SessionDraft, Theme};
pub use error::{ConfigError, CoreError, TimerError, ValidationError};
pub use events::Event;
pub use storage::Config;
pub use time::Clock;
pub use timer::{
    run_countdown, CountdownOutcome, ManualScheduler, ProgressRing, TickScheduler, TickToken,
    TimerEngine, TimerState, TokioScheduler,
};
