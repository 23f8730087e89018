//! Date window types
//!
//! Claims carry a calendar import date. Searches select claims whose import
//! date falls inside one or more inclusive windows, either given absolutely
//! (`from`/`to`) or relative to today (`last30DaysToNow`, `last1CalendarMonth`, ...).

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date range: start {start} must not be after end {end}")]
    InvalidRange {
        start: String,
        end: String,
    },
}

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting a start after the end
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from optional bounds, leaving a missing side open
    ///
    /// Returns `Ok(None)` when neither bound is given.
    pub fn from_bounds(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Option<Self>, TemporalError> {
        match (start, end) {
            (None, None) => Ok(None),
            (start, end) => Self::new(
                start.unwrap_or(NaiveDate::MIN),
                end.unwrap_or(NaiveDate::MAX),
            )
            .map(Some),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days between start and end
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// A date window expressed relative to the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelativeRange {
    /// The 7 calendar days ending today
    OneWeekBeforeToNow,
    /// The 14 calendar days ending today
    TwoWeeksBeforeToNow,
    Last30DaysToNow,
    Last60DaysToNow,
    Last90DaysToNow,
    /// The whole previous calendar month
    Last1CalendarMonth,
    /// The two whole calendar months before the current one
    Last2CalendarMonths,
    /// The three whole calendar months before the current one
    Last3CalendarMonths,
}

impl RelativeRange {
    pub const ALL: [RelativeRange; 8] = [
        RelativeRange::OneWeekBeforeToNow,
        RelativeRange::TwoWeeksBeforeToNow,
        RelativeRange::Last30DaysToNow,
        RelativeRange::Last60DaysToNow,
        RelativeRange::Last90DaysToNow,
        RelativeRange::Last1CalendarMonth,
        RelativeRange::Last2CalendarMonths,
        RelativeRange::Last3CalendarMonths,
    ];

    /// Resolves the window into absolute dates as seen from `today`
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            RelativeRange::OneWeekBeforeToNow => trailing_days(today, 7),
            RelativeRange::TwoWeeksBeforeToNow => trailing_days(today, 14),
            RelativeRange::Last30DaysToNow => trailing_days(today, 30),
            RelativeRange::Last60DaysToNow => trailing_days(today, 60),
            RelativeRange::Last90DaysToNow => trailing_days(today, 90),
            RelativeRange::Last1CalendarMonth => previous_months(today, 1),
            RelativeRange::Last2CalendarMonths => previous_months(today, 2),
            RelativeRange::Last3CalendarMonths => previous_months(today, 3),
        }
    }
}

/// `days` calendar days ending with `today`, both ends inclusive
fn trailing_days(today: NaiveDate, days: u64) -> DateRange {
    DateRange {
        start: today
            .checked_sub_days(Days::new(days.saturating_sub(1)))
            .unwrap_or(NaiveDate::MIN),
        end: today,
    }
}

fn previous_months(today: NaiveDate, months: u32) -> DateRange {
    let first_of_month = today - Days::new(u64::from(today.day0()));
    let end = first_of_month.pred_opt().unwrap_or(NaiveDate::MIN);
    let start = first_of_month
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN);
    DateRange { start, end }
}
