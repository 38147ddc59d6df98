//! Read-only display records for the dashboard.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A subject shown in the sidebar, progress chart and session cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    /// Hex colour used for chart bars.
    pub color: String,
}

/// Difficulty level on a 1..=5 scale, drawn as five dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

/// Class of an unfilled difficulty dot.
pub const EMPTY_DOT_CLASS: &str = "difficulty-dot difficulty-dot--empty";

/// Filled-dot class and colour per level. Every class name is known ahead
/// of time, so a styling pipeline can see them all.
const LEVELS: [(&str, &str); 5] = [
    ("difficulty-dot difficulty-dot--1", "#22c55e"),
    ("difficulty-dot difficulty-dot--2", "#84cc16"),
    ("difficulty-dot difficulty-dot--3", "#eab308"),
    ("difficulty-dot difficulty-dot--4", "#f97316"),
    ("difficulty-dot difficulty-dot--5", "#ef4444"),
];

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ValidationError::invalid(
                "difficulty",
                format!("{level} is outside {}..={}", Self::MIN, Self::MAX),
            ))
        }
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    fn entry(&self) -> (&'static str, &'static str) {
        LEVELS[usize::from(self.0 - 1)]
    }

    /// CSS class of a filled dot at this level.
    pub fn dot_class(&self) -> &'static str {
        self.entry().0
    }

    pub fn color(&self) -> &'static str {
        self.entry().1
    }

    /// Which of the five dots are filled.
    pub fn dots(&self) -> [bool; 5] {
        std::array::from_fn(|i| i < usize::from(self.0))
    }

    /// Class of each of the five dots, left to right.
    pub fn dot_classes(&self) -> [&'static str; 5] {
        self.dots()
            .map(|filled| if filled { self.dot_class() } else { EMPTY_DOT_CLASS })
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ValidationError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = s.trim().parse::<u8>().map_err(|_| {
            ValidationError::invalid("difficulty", format!("'{s}' is not a level from 1 to 5"))
        })?;
        Self::new(level)
    }
}

/// A planned study session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: String,
    pub title: String,
    pub subject_id: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub duration_min: u32,
    pub difficulty: Difficulty,
    /// Share of the session's material covered so far, 0..=100.
    #[serde(default)]
    pub progress_pct: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StudySession {
    pub fn end_time(&self) -> NaiveTime {
        // Wraps past midnight rather than overflowing.
        self.start + Duration::minutes(i64::from(self.duration_min))
    }

    pub fn is_completed(&self) -> bool {
        self.progress_pct >= 100
    }

    /// Progress as a 0.0 ..= 1.0 fraction.
    pub fn progress(&self) -> f64 {
        f64::from(self.progress_pct.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Schedule,
    Technique,
    Break,
    Review,
}

/// A canned study recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub body: String,
    pub kind: RecommendationKind,
    /// 0.0 ..= 1.0
    pub confidence: f64,
}

/// Hours studied against the weekly goal for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectProgress {
    pub subject_id: String,
    pub hours_studied: f64,
    pub hours_goal: f64,
}

impl SubjectProgress {
    /// Studied fraction of the goal, clamped to 0.0 ..= 1.0.
    pub fn fraction(&self) -> f64 {
        if self.hours_goal <= 0.0 {
            return 0.0;
        }
        (self.hours_studied / self.hours_goal).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reminder,
    Achievement,
    Suggestion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub at: DateTime<Utc>,
}
