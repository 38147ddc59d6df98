//! Dashboard data, state and renderers.
//!
//! Display records are static mock collections; the only mutable piece is
//! [`DashboardState`], which renderers take by reference.

pub mod calendar;
pub mod mock;
pub mod model;
pub mod render;
pub mod state;

pub use calendar::MonthGrid;
pub use mock::MockData;
pub use model::{
    Difficulty, Notification, NotificationKind, Recommendation, RecommendationKind, StudySession,
    Subject, SubjectProgress,
};
pub use state::{DashboardState, SessionDraft, Theme, MAX_NOTES_CHARS, MAX_SESSION_MINUTES};
