use chrono::{NaiveDate, Utc};
use clap::Args;
use studyflow_core::dashboard::{mock, render};
use studyflow_core::{Config, DashboardState, MockData, MonthGrid, ProgressRing, TimerState};

use super::{theme, today_or};

#[derive(Args)]
pub struct DashboardArgs {
    /// Reference day (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Force the dark theme
    #[arg(long, conflicts_with = "light")]
    dark: bool,
    /// Force the light theme
    #[arg(long)]
    light: bool,
}

#[derive(Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(long)]
    month: Option<String>,
}

#[derive(Args)]
pub struct NotificationsArgs {
    /// Mark a notification as read before listing (repeatable)
    #[arg(long = "read", value_name = "ID")]
    read: Vec<String>,
    /// Mark every notification as read before listing
    #[arg(long)]
    read_all: bool,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub fn run_dashboard(args: DashboardArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let data = MockData::new(today_or(args.date));
    let state = DashboardState::new(
        theme(config, args.dark, args.light),
        mock::notifications(Utc::now()),
    );
    let timer = TimerState::new(config.timer.focus_secs)?;
    let ring = ProgressRing::new(config.ui.ring_radius);

    print!("{}", render::render_dashboard(&data, &state, &timer, &ring));
    Ok(())
}

pub fn run_calendar(args: CalendarArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let today = today_or(None);
    let grid = match args.month {
        Some(month) => MonthGrid::parse(&month)?,
        None => MonthGrid::containing(today),
    };
    let data = MockData::new(today);
    let sessions: Vec<_> = data.sessions.iter().collect();
    print!(
        "{}",
        render::render_calendar(theme(config, false, false), &grid, today, &sessions)
    );
    Ok(())
}

pub fn run_progress(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    print!(
        "{}",
        render::render_progress_chart(theme(config, false, false), &mock::progress(), &mock::subjects())
    );
    Ok(())
}

pub fn run_recommendations(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    print!(
        "{}",
        render::render_recommendations(theme(config, false, false), &mock::recommendations())
    );
    Ok(())
}

pub fn run_notifications(args: NotificationsArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = DashboardState::new(theme(config, false, false), mock::notifications(Utc::now()));
    for id in &args.read {
        state.mark_read(id)?;
    }
    if args.read_all {
        state.mark_all_read();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state.notifications)?);
    } else {
        print!("{}", render::render_notifications(state.theme, &state.notifications));
    }
    Ok(())
}
