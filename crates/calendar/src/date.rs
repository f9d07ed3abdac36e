//! Calendar-day value with a canonical `(year, month, day)` ordering.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CalendarError;
use crate::month::{days_in_month, next_month, prev_month};
use crate::weekday::{day_number, weekday};

/// A calendar day as a `(year, month, day)` triple.
///
/// `month` is zero-based (0 = January). Ordering is lexicographic by year,
/// then month, then day, so the derived `Ord` is the canonical comparison.
///
/// [`DateBound::new`] validates the triple. [`DateBound::from_triple`] does
/// not, and exists so that arbitrary triples can act as comparison keys.
///
/// Any `i32` year is accepted. Month stepping saturates at the ends of the
/// year range instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DateBound {
    year: i32,
    month: u32,
    day: u32,
}

impl DateBound {
    /// Creates a validated date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 0..=11 and
    /// [`CalendarError::InvalidDay`] if `day` is not valid for that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if month > 11 {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(month, year);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from a raw triple without validation.
    ///
    /// The result is a comparison key: ordering and equality work for any
    /// triple, calendar arithmetic assumes a real date.
    pub const fn from_triple(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Creates the first day of the given month.
    pub const fn first_of(year: i32, month: u32) -> Self {
        Self::from_triple(year, month, 1)
    }

    /// Returns today's date on the local clock.
    pub fn today() -> Self {
        chrono::Local::now().date_naive().into()
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the zero-based month (0..=11).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.day
    }

    /// Returns the stable `(year, month, day)` key.
    pub fn to_key(self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    /// Returns the first day of this date's month.
    pub fn first_of_month(self) -> Self {
        Self::first_of(self.year, self.month)
    }

    /// Returns the first day of the previous month, wrapping the year.
    pub fn prev_month_start(self) -> Self {
        let (year, month) = prev_month(self.year, self.month);
        Self::first_of(year, month)
    }

    /// Returns the first day of the next month, wrapping the year.
    pub fn next_month_start(self) -> Self {
        let (year, month) = next_month(self.year, self.month);
        Self::first_of(year, month)
    }

    /// Returns `true` if both dates fall in the same year and month.
    pub fn same_month(self, other: Self) -> bool {
        self.year == other.year && self.month == other.month
    }

    /// Returns the number of days since 1970-01-01.
    pub fn day_number(self) -> i64 {
        day_number(self.year, self.month, self.day)
    }

    /// Returns the weekday, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(self) -> u32 {
        weekday(self.year, self.month, self.day)
    }

    /// Returns the absolute number of days between two dates.
    pub fn days_between(self, other: Self) -> u64 {
        (self.day_number() - other.day_number()).unsigned_abs()
    }

    /// Converts to a chrono date, or `None` if the triple is not a real date.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }
}

impl From<NaiveDate> for DateBound {
    fn from(date: NaiveDate) -> Self {
        Self::from_triple(date.year(), date.month0(), date.day())
    }
}

impl fmt::Display for DateBound {
    /// Formats as ISO `YYYY-MM-DD` with a one-based month.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

impl FromStr for DateBound {
    type Err = CalendarError;

    /// Parses ISO `YYYY-MM-DD` (one-based month).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from)
            .map_err(|source| CalendarError::Parse {
                input: s.to_string(),
                source,
            })
    }
}
