//! The two accepted date representations and their normalization.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::date::DateBound;

/// A date as supplied by a caller.
///
/// Either a native chrono date or a plain `(year, zero-based month, day)`
/// triple. Both normalize to the same [`DateBound`] at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    /// A chrono calendar date (no time, no timezone).
    Native(NaiveDate),
    /// A raw `(year, month 0..=11, day)` triple, not validated.
    Ymd(i32, u32, u32),
}

impl DateInput {
    /// Returns the canonical triple for this input.
    pub fn normalize(self) -> DateBound {
        match self {
            Self::Native(date) => DateBound::from(date),
            Self::Ymd(year, month, day) => DateBound::from_triple(year, month, day),
        }
    }

    /// Compares two inputs.
    ///
    /// Two native dates compare as chrono dates; any other pairing compares
    /// the normalized triples. Both paths agree for a native date and a triple
    /// naming the same calendar day.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => a.cmp(b),
            _ => self.normalize().cmp(&other.normalize()),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Native(date)
    }
}

impl From<(i32, u32, u32)> for DateInput {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        Self::Ymd(year, month, day)
    }
}

impl From<DateBound> for DateInput {
    fn from(date: DateBound) -> Self {
        let (year, month, day) = date.to_key();
        Self::Ymd(year, month, day)
    }
}

impl From<DateInput> for DateBound {
    fn from(input: DateInput) -> Self {
        input.normalize()
    }
}
