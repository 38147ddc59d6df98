//! Mutable dashboard state: theme, notification read flags and the
//! new-session form. Lives only as long as its owner.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::model::{Difficulty, Notification, StudySession, Subject};
use crate::error::ValidationError;

/// Longest session the form accepts, in minutes.
pub const MAX_SESSION_MINUTES: u32 = 8 * 60;

/// Longest note the form accepts, in characters.
pub const MAX_NOTES_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Fields of the "new session" form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionDraft {
    pub title: String,
    pub subject_id: String,
    pub date: Option<NaiveDate>,
    pub start: Option<NaiveTime>,
    pub duration_min: u32,
    pub difficulty: Option<Difficulty>,
    pub notes: Option<String>,
}

impl SessionDraft {
    fn validate(&self, subjects: &[Subject]) -> Result<StudySession, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::invalid("title", "must not be empty"));
        }
        if !subjects.iter().any(|s| s.id == self.subject_id) {
            return Err(ValidationError::not_found("subject", &self.subject_id));
        }
        let date = self
            .date
            .ok_or_else(|| ValidationError::invalid("date", "is required"))?;
        let start = self
            .start
            .ok_or_else(|| ValidationError::invalid("start", "is required"))?;
        if !(1..=MAX_SESSION_MINUTES).contains(&self.duration_min) {
            return Err(ValidationError::invalid(
                "duration_min",
                format!("must be between 1 and {MAX_SESSION_MINUTES}"),
            ));
        }

        let notes = self
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);
        if notes.as_ref().is_some_and(|n| n.chars().count() > MAX_NOTES_CHARS) {
            return Err(ValidationError::invalid(
                "notes",
                format!("must be at most {MAX_NOTES_CHARS} characters"),
            ));
        }

        Ok(StudySession {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            subject_id: self.subject_id.clone(),
            date,
            start,
            duration_min: self.duration_min,
            difficulty: self.difficulty.unwrap_or_default(),
            progress_pct: 0,
            notes,
        })
    }
}

/// Everything the dashboard can change, passed by reference to renderers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardState {
    pub theme: Theme,
    pub notifications: Vec<Notification>,
    pub draft: SessionDraft,
    /// Sessions created through the form in this run.
    pub created: Vec<StudySession>,
}

impl DashboardState {
    pub fn new(theme: Theme, notifications: Vec<Notification>) -> Self {
        Self {
            theme,
            notifications,
            ..Self::default()
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Mark one notification read. Marking it again is a no-op.
    pub fn mark_read(&mut self, id: &str) -> Result<(), ValidationError> {
        let note = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| ValidationError::not_found("notification", id))?;
        note.read = true;
        Ok(())
    }

    pub fn mark_all_read(&mut self) {
        for note in &mut self.notifications {
            note.read = true;
        }
    }

    /// Validate the draft, add the session and clear the form.
    ///
    /// On error the draft is kept so the user can fix it.
    pub fn submit_draft(&mut self, subjects: &[Subject]) -> Result<&StudySession, ValidationError> {
        let session = self.draft.validate(subjects)?;
        info!(id = %session.id, title = %session.title, "session created");
        self.draft = SessionDraft::default();
        self.created.push(session);
        Ok(&self.created[self.created.len() - 1])
    }

    /// Sessions on `date` from `base` plus those created here, by start time.
    pub fn sessions_on<'a>(&'a self, date: NaiveDate, base: &'a [StudySession]) -> Vec<&'a StudySession> {
        let mut day: Vec<_> = base
            .iter()
            .chain(self.created.iter())
            .filter(|s| s.date == date)
            .collect();
        day.sort_by_key(|s| s.start);
        day
    }
}
