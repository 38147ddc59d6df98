use chrono::{NaiveDate, NaiveTime, Utc};
use clap::Subcommand;
use studyflow_core::dashboard::{mock, render, Difficulty};
use studyflow_core::{Config, DashboardState, MockData, SessionDraft};

use super::{parse_time, theme, today_or};

#[derive(Subcommand)]
pub enum SessionsAction {
    /// List sessions for a day
    List {
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate and show a new session (not saved)
    Create {
        /// Session title
        #[arg(long)]
        title: String,
        /// Subject id (math, physics, chemistry, history, literature)
        #[arg(long)]
        subject: String,
        /// Day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Start time (HH:MM)
        #[arg(long, value_parser = parse_time)]
        start: NaiveTime,
        /// Duration in minutes
        #[arg(long)]
        duration: u32,
        /// Difficulty from 1 (very easy) to 5 (very hard), defaults to 3
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Free-form notes shown on the card
        #[arg(long)]
        notes: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SessionsAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SessionsAction::List { date, json } => {
            let day = today_or(date);
            let data = MockData::new(day);
            let state = DashboardState::new(theme(config, false, false), Vec::new());
            let sessions = state.sessions_on(day, &data.sessions);

            if json {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            } else if sessions.is_empty() {
                println!("No sessions planned for {day}.");
            } else {
                for session in sessions {
                    print!(
                        "{}",
                        render::render_session_card(state.theme, session, data.subject(&session.subject_id))
                    );
                }
            }
        }
        SessionsAction::Create {
            title,
            subject,
            date,
            start,
            duration,
            difficulty,
            notes,
            json,
        } => {
            let mut state = DashboardState::new(theme(config, false, false), mock::notifications(Utc::now()));
            state.draft = SessionDraft {
                title,
                subject_id: subject,
                date: Some(today_or(date)),
                start: Some(start),
                duration_min: duration,
                difficulty,
                notes,
            };
            let subjects = mock::subjects();
            let session = state.submit_draft(&subjects)?.clone();

            if json {
                println!("{}", serde_json::to_string_pretty(&session)?);
            } else {
                let subject = subjects.iter().find(|s| s.id == session.subject_id);
                print!("{}", render::render_session_card(state.theme, &session, subject));
                eprintln!("session created (not saved)");
            }
        }
    }
    Ok(())
}
