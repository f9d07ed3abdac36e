//! Month grid layout algorithm.

use kalends_bounds::DateRange;
use kalends_calendar::{DateBound, days_in_month, first_weekday, next_month, prev_month};
use serde::Serialize;
use tracing::trace;

use crate::cell::{CellKind, DayCell};

/// Cells per grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// One grid row, Sunday first.
pub type Week = [DayCell; DAYS_PER_WEEK];

/// The day layout of one displayed month.
///
/// Rows always hold exactly seven cells. Leading cells come from the
/// previous month and trailing cells from the next, padding the month to
/// whole weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Lays out `month` (zero-based, already normalized) of `year`.
    ///
    /// `selected` marks at most one current-month cell; a selection in any
    /// other month marks nothing. Every cell, filler included, is checked
    /// against `range`.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends_bounds::DateRange;
    /// use kalends_grid::MonthGrid;
    ///
    /// // April 2014 starts on a Tuesday: two March fillers lead.
    /// let grid = MonthGrid::compute(2014, 3, None, &DateRange::new());
    /// assert_eq!(grid.row_count(), 5);
    /// assert_eq!(grid.weeks()[0][0].date.to_key(), (2014, 2, 30));
    /// assert_eq!(grid.weeks()[0][2].date.to_key(), (2014, 3, 1));
    /// ```
    #[tracing::instrument(level = "trace", skip(range))]
    pub fn compute(
        year: i32,
        month: u32,
        selected: Option<DateBound>,
        range: &DateRange,
    ) -> Self {
        let days = days_in_month(month, year);
        let before = first_weekday(year, month);
        let shown = (before + days).div_ceil(DAYS_PER_WEEK as u32) * DAYS_PER_WEEK as u32;
        let after = shown - (before + days);

        let displayed = DateBound::first_of(year, month);
        let selected = selected.filter(|date| date.same_month(displayed));

        let mut cells = Vec::with_capacity(shown as usize);
        cells.extend(cells_before(before, year, month, range));
        cells.extend((1..=days).map(|day| {
            let date = DateBound::from_triple(year, month, day);
            DayCell {
                date,
                kind: CellKind::Current,
                selected: selected == Some(date),
                valid: range.valid(date),
            }
        }));
        cells.extend(cells_after(after, year, month, range));
        trace!(before, days, after, "laid out month");

        let weeks = cells
            .chunks_exact(DAYS_PER_WEEK)
            .map(|chunk| std::array::from_fn(|i| chunk[i]))
            .collect();
        Self { year, month, weeks }
    }

    /// Returns the displayed year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the displayed zero-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the rows in display order.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Returns the number of rows (4, 5 or 6).
    pub fn row_count(&self) -> usize {
        self.weeks.len()
    }

    /// Returns the total number of cells, always a multiple of seven.
    pub fn cell_count(&self) -> usize {
        self.weeks.len() * DAYS_PER_WEEK
    }

    /// Iterates over all cells row by row.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }

    /// Returns the cell showing `date`, if it is on the grid.
    pub fn find(&self, date: DateBound) -> Option<&DayCell> {
        self.cells().find(|cell| cell.date == date)
    }

    /// Returns the selected cell, if the selection is in this month.
    pub fn selected_cell(&self) -> Option<&DayCell> {
        self.cells().find(|cell| cell.selected)
    }
}

/// Builds `n` trailing days of the month before `(year, month)`, ascending.
fn cells_before(n: u32, year: i32, month: u32, range: &DateRange) -> Vec<DayCell> {
    let (year, month) = prev_month(year, month);
    let last = days_in_month(month, year);
    let mut cells: Vec<DayCell> = (0..n)
        .map(|offset| {
            let date = DateBound::from_triple(year, month, last - offset);
            filler(date, CellKind::Previous, range)
        })
        .collect();
    cells.reverse();
    cells
}

/// Builds the first `n` days of the month after `(year, month)`.
fn cells_after(n: u32, year: i32, month: u32, range: &DateRange) -> Vec<DayCell> {
    let (year, month) = next_month(year, month);
    (1..=n)
        .map(|day| filler(DateBound::from_triple(year, month, day), CellKind::Next, range))
        .collect()
}

fn filler(date: DateBound, kind: CellKind, range: &DateRange) -> DayCell {
    DayCell {
        date,
        kind,
        selected: false,
        valid: range.valid(date),
    }
}
