use chrono::{DateTime, Utc};

/// Source of "now" for event timestamps, fixed in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }
}

/// A `Clock` fixed at 2023-11-14T22:13:20Z.
#[cfg(test)]
pub(crate) fn fixed_clock() -> Clock {
    Clock::fixed(DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap())
}
