//! Day cell descriptors handed to the rendering surface.

use kalends_calendar::DateBound;
use serde::Serialize;

/// Which month a cell belongs to relative to the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Filler from the month before the displayed one.
    Previous,
    /// A day of the displayed month.
    Current,
    /// Filler from the month after the displayed one.
    Next,
}

/// One day in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// The calendar day shown in this cell.
    pub date: DateBound,
    /// Position relative to the displayed month.
    pub kind: CellKind,
    /// `true` only for the current-month cell matching the selected date.
    pub selected: bool,
    /// `true` if the day passes the valid-date range.
    pub valid: bool,
}

impl DayCell {
    /// Returns `true` if the cell is a day of the displayed month.
    pub fn is_current_month(&self) -> bool {
        self.kind == CellKind::Current
    }

    /// Returns `true` if the cell is filler from a neighbouring month.
    pub fn is_filler(&self) -> bool {
        !self.is_current_month()
    }

    /// Returns the day number within its own month.
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}
