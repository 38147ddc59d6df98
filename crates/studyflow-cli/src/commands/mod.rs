pub mod config;
pub mod dashboard;
pub mod sessions;
pub mod timer;

use chrono::{Local, NaiveDate, NaiveTime};
use studyflow_core::{Config, Theme};

/// `--date` or the local date.
pub fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// Explicit `--dark`/`--light` flags win over the configured theme.
pub fn theme(config: &Config, dark: bool, light: bool) -> Theme {
    if dark {
        Theme::Dark
    } else if light {
        Theme::Light
    } else {
        Theme::from_dark_mode(config.ui.dark_mode)
    }
}

/// Parse `HH:MM`.
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}
