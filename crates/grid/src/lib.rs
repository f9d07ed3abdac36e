//! Month grid layout for a date picker.
//!
//! [`MonthGrid::compute`] turns a displayed `(year, month)`, an optional
//! selected date and a [`DateRange`](kalends_bounds::DateRange) into rows of
//! seven [`DayCell`]s:
//!
//! ```text
//! MonthGrid::compute()
//!   ├─ days_in_month() / first_weekday()   (kalends-calendar)
//!   ├─ cells_before()   previous-month filler, ascending
//!   ├─ current-month cells, selection flag
//!   ├─ cells_after()    next-month filler
//!   ├─ DateRange::valid() on every cell     (kalends-bounds)
//!   └─ chunk into weeks of 7
//! ```
//!
//! The grid is plain data and serializes with serde, so a rendering surface
//! can redraw it wholesale or diff it.

pub mod cell;
pub mod grid;

pub use cell::{CellKind, DayCell};
pub use grid::{DAYS_PER_WEEK, MonthGrid, Week};
