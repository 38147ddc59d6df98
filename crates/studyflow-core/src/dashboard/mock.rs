//! Static demo data for the dashboard.
//!
//! Dates are relative to a reference day so the calendar and session list
//! always have something to show.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use super::model::{
    Difficulty, Notification, NotificationKind, Recommendation, RecommendationKind, StudySession,
    Subject, SubjectProgress,
};

/// All demo collections for one reference day.
#[derive(Debug, Clone, Serialize)]
pub struct MockData {
    pub today: NaiveDate,
    pub subjects: Vec<Subject>,
    pub sessions: Vec<StudySession>,
    pub recommendations: Vec<Recommendation>,
    pub progress: Vec<SubjectProgress>,
}

impl MockData {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            subjects: subjects(),
            sessions: sessions(today),
            recommendations: recommendations(),
            progress: progress(),
        }
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }
}

fn subject(id: &str, name: &str, color: &str) -> Subject {
    Subject {
        id: id.into(),
        name: name.into(),
        color: color.into(),
    }
}

pub fn subjects() -> Vec<Subject> {
    vec![
        subject("math", "Mathematics", "#3b82f6"),
        subject("physics", "Physics", "#8b5cf6"),
        subject("chemistry", "Chemistry", "#10b981"),
        subject("history", "History", "#f59e0b"),
        subject("literature", "Literature", "#ec4899"),
    ]
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Demo sessions around `today`. Offsets that fall outside the calendar
/// range are left out.
pub fn sessions(today: NaiveDate) -> Vec<StudySession> {
    let rows = [
        ("s1", "Calculus: Integration by Parts", "math", 0, at(9, 0), 90, 4, 40, Some("Focus on tabular integration")),
        ("s2", "Organic Chemistry Review", "chemistry", 0, at(14, 0), 60, 3, 60, None),
        ("s3", "Essay Outline: Modernism", "literature", 0, at(19, 30), 45, 2, 0, None),
        ("s4", "Quantum Mechanics Problem Set", "physics", 1, at(10, 0), 120, 5, 0, Some("Problems 3.1 to 3.8")),
        ("s5", "World War II Timeline", "history", 2, at(16, 0), 60, 3, 0, None),
        ("s6", "Linear Algebra Flashcards", "math", -1, at(8, 30), 30, 1, 100, None),
        ("s7", "Lab Report Draft", "chemistry", -2, at(13, 0), 75, 3, 100, None),
    ];

    rows.into_iter()
        .filter_map(
            |(id, title, subject_id, offset, start, duration_min, level, progress_pct, notes)| {
                Some(StudySession {
                    id: id.into(),
                    title: title.into(),
                    subject_id: subject_id.into(),
                    date: today.checked_add_signed(Duration::days(offset))?,
                    start,
                    duration_min,
                    difficulty: Difficulty::new(level).ok()?,
                    progress_pct,
                    notes: notes.map(String::from),
                })
            },
        )
        .collect()
}

pub fn recommendations() -> Vec<Recommendation> {
    let rec = |id: &str, title: &str, body: &str, kind: RecommendationKind, confidence: f64| {
        Recommendation {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            kind,
            confidence,
        }
    };

    vec![
        rec(
            "r1",
            "Move calculus to the morning",
            "Your hardest sessions go better before noon. Try starting integration practice at 9:00.",
            RecommendationKind::Schedule,
            0.92,
        ),
        rec(
            "r2",
            "Use active recall for chemistry",
            "Quiz yourself on reaction mechanisms instead of re-reading notes.",
            RecommendationKind::Technique,
            0.85,
        ),
        rec(
            "r3",
            "Take a longer break",
            "You have studied for three hours straight. A 20 minute walk will help retention.",
            RecommendationKind::Break,
            0.78,
        ),
        rec(
            "r4",
            "Review history before Friday",
            "Spaced repetition suggests revisiting the WWII timeline within two days.",
            RecommendationKind::Review,
            0.71,
        ),
    ]
}

pub fn progress() -> Vec<SubjectProgress> {
    let row = |subject_id: &str, hours_studied: f64, hours_goal: f64| SubjectProgress {
        subject_id: subject_id.into(),
        hours_studied,
        hours_goal,
    };
    vec![
        row("math", 8.5, 10.0),
        row("physics", 6.0, 8.0),
        row("chemistry", 4.5, 6.0),
        row("history", 3.0, 5.0),
        row("literature", 5.0, 4.0),
    ]
}

pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let note = |id: &str, message: &str, kind: NotificationKind, minutes_ago: i64| Notification {
        id: id.into(),
        message: message.into(),
        kind,
        read: false,
        at: now - Duration::minutes(minutes_ago),
    };
    vec![
        note("n1", "Calculus session starts in 15 minutes", NotificationKind::Reminder, 5),
        note("n2", "7-day study streak reached!", NotificationKind::Achievement, 120),
        note("n3", "New recommendation: use active recall for chemistry", NotificationKind::Suggestion, 240),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn every_session_references_a_known_subject() {
        let data = MockData::new(today());
        for s in &data.sessions {
            assert!(data.subject(&s.subject_id).is_some(), "unknown subject {}", s.subject_id);
        }
        for p in &data.progress {
            assert!(data.subject(&p.subject_id).is_some());
        }
    }

    #[test]
    fn sessions_are_relative_to_today() {
        let data = MockData::new(today());
        let todays = data.sessions.iter().filter(|s| s.date == today()).count();
        assert_eq!(todays, 3);
    }

    #[test]
    fn last_representable_day_drops_future_sessions() {
        let data = MockData::new(NaiveDate::MAX);
        assert!(data.sessions.iter().all(|s| s.date <= NaiveDate::MAX));
        assert_eq!(data.sessions.iter().filter(|s| s.date == NaiveDate::MAX).count(), 3);
        assert!(data.subject("physics").is_some());
        assert!(!data.sessions.iter().any(|s| s.id == "s4" || s.id == "s5"));
    }

    #[test]
    fn first_representable_day_drops_past_sessions() {
        let data = MockData::new(NaiveDate::MIN);
        assert_eq!(data.sessions.len(), 5);
        assert!(!data.sessions.iter().any(|s| s.is_completed()));
    }

    #[test]
    fn completed_sessions_are_in_the_past() {
        let data = MockData::new(today());
        for s in data.sessions.iter().filter(|s| s.is_completed()) {
            assert!(s.date < today(), "{} is completed but not past", s.id);
        }
        assert!(data.sessions.iter().all(|s| s.progress_pct <= 100));
    }

    #[test]
    fn recommendation_confidence_in_range() {
        assert!(recommendations()
            .iter()
            .all(|r| (0.0..=1.0).contains(&r.confidence)));
    }

    #[test]
    fn notifications_start_unread() {
        let now = Utc::now();
        assert!(notifications(now).iter().all(|n| !n.read && n.at <= now));
    }
}
