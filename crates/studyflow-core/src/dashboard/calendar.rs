use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::error::ValidationError;

/// A month laid out as Monday-first weeks. Cells outside the month are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<NaiveDate>; 7]>,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ValidationError::invalid("month", format!("{year}-{month:02} is not a valid month")))?;
        Ok(Self::layout(first))
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::layout(date - Duration::days(i64::from(date.day0())))
    }

    fn layout(first: NaiveDate) -> Self {
        let (year, month) = (first.year(), first.month());
        let lead = first.weekday().num_days_from_monday() as usize;
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut slot = lead;
        let mut next = Some(first);
        while let Some(day) = next.filter(|d| d.month() == month) {
            week[slot] = Some(day);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
            // None past the last representable date ends the month early.
            next = day.succ_opt();
        }
        if slot > 0 {
            weeks.push(week);
        }

        Self { year, month, weeks }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::invalid("month", format!("'{s}' is not in YYYY-MM form"));
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().flatten().copied()
    }

    pub fn next(&self) -> Result<Self, ValidationError> {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn prev(&self) -> Result<Self, ValidationError> {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }
}
