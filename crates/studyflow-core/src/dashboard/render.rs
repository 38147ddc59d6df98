//! Plain-text renderers for the dashboard.
//!
//! Every function is pure: state comes in by reference, a `String` comes
//! out. The theme only changes glyphs so output stays easy to assert on.

use chrono::{Datelike, NaiveDate};

use super::calendar::MonthGrid;
use super::mock::MockData;
use super::model::{
    Difficulty, Notification, Recommendation, StudySession, Subject, SubjectProgress,
};
use super::state::{DashboardState, Theme};
use crate::timer::{format_mm_ss, ProgressRing, TimerState};

const CHART_WIDTH: usize = 20;
const CARD_BAR_WIDTH: usize = 10;

/// Sessions listed in the upcoming sidebar.
pub const UPCOMING_LIMIT: usize = 3;

struct Glyphs {
    rule: char,
    fill: char,
    empty: char,
    unread: &'static str,
    read: &'static str,
    done: &'static str,
}

fn glyphs(theme: Theme) -> Glyphs {
    match theme {
        Theme::Light => Glyphs {
            rule: '-',
            fill: '#',
            empty: '.',
            unread: "*",
            read: " ",
            done: "[x]",
        },
        Theme::Dark => Glyphs {
            rule: '=',
            fill: '█',
            empty: '░',
            unread: "●",
            read: "○",
            done: "[✓]",
        },
    }
}

fn heading(theme: Theme, title: &str) -> String {
    let rule: String = std::iter::repeat(glyphs(theme).rule)
        .take(title.chars().count())
        .collect();
    format!("{title}\n{rule}\n")
}

fn gauge(theme: Theme, fraction: f64, width: usize) -> String {
    let g = glyphs(theme);
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut out = String::with_capacity(width + 2);
    out.push('[');
    out.extend(std::iter::repeat(g.fill).take(filled));
    out.extend(std::iter::repeat(g.empty).take(width - filled));
    out.push(']');
    out
}

pub fn render_timer(theme: Theme, timer: &TimerState, ring: &ProgressRing) -> String {
    let mut out = heading(theme, "Focus Timer");
    let status = if timer.running {
        "running"
    } else if timer.is_finished() {
        "done"
    } else if timer.remaining_secs == timer.total_secs {
        "ready"
    } else {
        "paused"
    };
    out.push_str(&format!(
        "{}  {}  {:>3.0}%  {status}\n",
        format_mm_ss(timer.remaining_secs),
        gauge(theme, timer.progress(), CHART_WIDTH),
        timer.progress() * 100.0,
    ));
    out.push_str(&format!(
        "ring r={} offset={:.1}/{:.1}\n",
        ring.radius,
        ring.dash_offset(timer.progress()),
        ring.circumference()
    ));
    out
}

/// Five difficulty dots, filled up to the level.
fn difficulty_dots(theme: Theme, difficulty: Difficulty) -> String {
    let g = glyphs(theme);
    difficulty
        .dots()
        .iter()
        .map(|&filled| if filled { g.fill } else { g.empty })
        .collect()
}

pub fn render_session_card(theme: Theme, session: &StudySession, subject: Option<&Subject>) -> String {
    let g = glyphs(theme);
    let subject_name = subject.map(|s| s.name.as_str()).unwrap_or(&session.subject_id);
    let done = if session.is_completed() { g.done } else { "" };
    let mut out = format!(
        "{}-{}  {} {done}\n  {subject_name} · difficulty {} {}/5 ({})\n  progress {}  {:>3}%\n",
        session.start.format("%H:%M"),
        session.end_time().format("%H:%M"),
        session.title,
        difficulty_dots(theme, session.difficulty),
        session.difficulty.level(),
        session.difficulty.dot_class(),
        gauge(theme, session.progress(), CARD_BAR_WIDTH),
        session.progress_pct.min(100),
    )
    .replace(" \n", "\n");
    if let Some(notes) = &session.notes {
        out.push_str(&format!("  note: {notes}\n"));
    }
    out
}

/// The next [`UPCOMING_LIMIT`] unfinished sessions after `today`, each with
/// its subject colour.
pub fn render_upcoming(
    theme: Theme,
    today: NaiveDate,
    sessions: &[&StudySession],
    subjects: &[Subject],
) -> String {
    let g = glyphs(theme);
    let mut out = heading(theme, "Upcoming Sessions");
    let mut next: Vec<_> = sessions
        .iter()
        .filter(|s| s.date > today && !s.is_completed())
        .collect();
    next.sort_by_key(|s| (s.date, s.start));
    if next.is_empty() {
        out.push_str("Nothing scheduled.\n");
    }
    for session in next.into_iter().take(UPCOMING_LIMIT) {
        let subject = subjects.iter().find(|s| s.id == session.subject_id);
        let name = subject.map(|s| s.name.as_str()).unwrap_or(&session.subject_id);
        let color = subject.map(|s| s.color.as_str()).unwrap_or("#9ca3af");
        out.push_str(&format!(
            "{} {} {}  {}  ({name} {color})\n",
            g.unread,
            session.date.format("%a %d %b"),
            session.start.format("%H:%M"),
            session.title,
        ));
    }
    out
}

pub fn render_progress_chart(theme: Theme, progress: &[SubjectProgress], subjects: &[Subject]) -> String {
    let mut out = heading(theme, "Weekly Progress");
    let name_width = subjects.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);
    for row in progress {
        let name = subjects
            .iter()
            .find(|s| s.id == row.subject_id)
            .map(|s| s.name.as_str())
            .unwrap_or(&row.subject_id);
        out.push_str(&format!(
            "{name:<name_width$}  {}  {:.1}/{:.1}h\n",
            gauge(theme, row.fraction(), CHART_WIDTH),
            row.hours_studied,
            row.hours_goal,
        ));
    }
    out
}

pub fn render_recommendations(theme: Theme, recommendations: &[Recommendation]) -> String {
    let mut out = heading(theme, "Recommendations");
    for (i, rec) in recommendations.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({:.0}% confidence)\n   {}\n",
            i + 1,
            rec.title,
            rec.confidence * 100.0,
            rec.body
        ));
    }
    out
}

pub fn render_notifications(theme: Theme, notifications: &[Notification]) -> String {
    let g = glyphs(theme);
    let unread = notifications.iter().filter(|n| !n.read).count();
    let mut out = heading(theme, &format!("Notifications ({unread} unread)"));
    for note in notifications {
        let marker = if note.read { g.read } else { g.unread };
        out.push_str(&format!("{marker} [{}] {}\n", note.id, note.message));
    }
    out
}

/// Month grid; `[dd]` marks today, `dd*` marks days with sessions.
pub fn render_calendar(
    theme: Theme,
    grid: &MonthGrid,
    today: NaiveDate,
    sessions: &[&StudySession],
) -> String {
    let title = grid
        .first_day()
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();
    let mut out = heading(theme, &title);
    out.push_str(" Mo   Tu   We   Th   Fr   Sa   Su\n");
    for week in &grid.weeks {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                None => "    ".to_string(),
                Some(day) => {
                    let busy = sessions.iter().any(|s| s.date == *day);
                    let mark = if busy { '*' } else { ' ' };
                    if *day == today {
                        format!("[{:02}]", day.day())
                    } else {
                        format!(" {:02}{mark}", day.day())
                    }
                }
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out
}

/// The whole dashboard for `data.today`.
pub fn render_dashboard(
    data: &MockData,
    state: &DashboardState,
    timer: &TimerState,
    ring: &ProgressRing,
) -> String {
    let theme = state.theme;
    let all: Vec<&StudySession> = data.sessions.iter().chain(state.created.iter()).collect();
    let mut sections = vec![
        render_calendar(theme, &MonthGrid::containing(data.today), data.today, &all),
        render_timer(theme, timer, ring),
    ];

    let mut today = heading(theme, &format!("Today, {}", data.today.format("%a %d %b")));
    let todays = state.sessions_on(data.today, &data.sessions);
    if todays.is_empty() {
        today.push_str("No sessions planned.\n");
    }
    for session in todays {
        today.push_str(&render_session_card(theme, session, data.subject(&session.subject_id)));
    }
    sections.push(today);
    sections.push(render_upcoming(theme, data.today, &all, &data.subjects));

    sections.push(render_progress_chart(theme, &data.progress, &data.subjects));
    sections.push(render_recommendations(theme, &data.recommendations));
    sections.push(render_notifications(theme, &state.notifications));
    sections.join("\n")
}
