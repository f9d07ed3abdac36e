//! Valid-date window for a picker, built on [`RangeBounds`].

use kalends_calendar::{DateBound, DateInput};
use tracing::debug;

use crate::bounds::RangeBounds;

/// Inclusive (or, when reversed, exclusive) window of selectable days.
///
/// Composes a [`RangeBounds<DateBound>`] that orders days lexicographically
/// by `(year, month, day)` and measures distance in whole days. Every method
/// accepts either date representation through [`DateInput`].
#[derive(Debug, Clone)]
pub struct DateRange {
    bounds: RangeBounds<DateBound>,
}

impl DateRange {
    /// Creates an unbounded range: every day is valid.
    pub fn new() -> Self {
        Self {
            bounds: RangeBounds::ordered(|a: &DateBound, b: &DateBound| {
                a.days_between(*b) as f64
            }),
        }
    }

    /// Creates a range from optional bounds.
    pub fn between(min: Option<DateInput>, max: Option<DateInput>) -> Self {
        let mut range = Self::new();
        range.bounds.set_min(min.map(DateInput::normalize));
        range.bounds.set_max(max.map(DateInput::normalize));
        range
    }

    /// Sets the earliest valid day (inclusive).
    pub fn set_min(&mut self, min: impl Into<DateInput>) -> &mut Self {
        let min = min.into().normalize();
        debug!(%min, "range minimum set");
        self.bounds.set_min(Some(min));
        self
    }

    /// Sets the latest valid day (inclusive).
    pub fn set_max(&mut self, max: impl Into<DateInput>) -> &mut Self {
        let max = max.into().normalize();
        debug!(%max, "range maximum set");
        self.bounds.set_max(Some(max));
        self
    }

    /// Removes the lower bound.
    pub fn clear_min(&mut self) -> &mut Self {
        self.bounds.set_min(None);
        self
    }

    /// Removes the upper bound.
    pub fn clear_max(&mut self) -> &mut Self {
        self.bounds.set_max(None);
        self
    }

    /// Returns the lower bound, if any.
    pub fn min(&self) -> Option<DateBound> {
        self.bounds.min().copied()
    }

    /// Returns the upper bound, if any.
    pub fn max(&self) -> Option<DateBound> {
        self.bounds.max().copied()
    }

    /// Returns `true` if `day` is before the lower bound.
    pub fn before(&self, day: impl Into<DateInput>) -> bool {
        self.bounds.before(&day.into().normalize())
    }

    /// Returns `true` if `day` is after the upper bound.
    pub fn after(&self, day: impl Into<DateInput>) -> bool {
        self.bounds.after(&day.into().normalize())
    }

    /// Returns `true` if `day` lies inside the inclusive bounds.
    pub fn contains(&self, day: impl Into<DateInput>) -> bool {
        self.bounds.contains(&day.into().normalize())
    }

    /// Returns `true` if the maximum sorts before the minimum.
    pub fn reversed(&self) -> bool {
        self.bounds.reversed()
    }

    /// Returns `true` if `day` may be selected.
    pub fn valid(&self, day: impl Into<DateInput>) -> bool {
        self.bounds.valid(&day.into().normalize())
    }

    /// Returns the nearest selectable day to `day`.
    pub fn restrict(&self, day: impl Into<DateInput>) -> DateBound {
        self.bounds.restrict(&day.into().normalize())
    }

    /// Returns the underlying generic bounds.
    pub fn as_bounds(&self) -> &RangeBounds<DateBound> {
        &self.bounds
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new()
    }
}
