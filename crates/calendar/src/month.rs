//! Month tables, leap-year rule and month navigation helpers.
//!
//! Months are zero-based throughout this crate: 0 = January, 11 = December.

/// Number of days in each month of a non-leap year (index 0 = January).
pub(crate) const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Zero-based index of February.
const FEBRUARY: u32 = 1;

/// English month names (index 0 = January).
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names (index 0 = Sunday).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Returns `true` if `year` is a leap year.
///
/// Divisible by 400 is leap; divisible by 4 but not by 100 is leap. Year 0
/// is always treated as leap.
pub fn is_leap_year(year: i32) -> bool {
    year == 0 || year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Returns the number of days in the zero-based `month` of `year`.
///
/// # Panics
///
/// Panics if `month` is not in 0..=11. Callers pass already-normalized months.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    if month == FEBRUARY && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Wraps a month index that stepped one past either end of the year.
///
/// Values above 11 become 0 and negative values become 11.
pub fn wrap_month(month: i32) -> u32 {
    if month > 11 {
        0
    } else if month < 0 {
        11
    } else {
        month as u32
    }
}

/// Returns the `(year, month)` immediately before the given one.
///
/// The year saturates at `i32::MIN`.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    let prev = wrap_month(month.min(11) as i32 - 1);
    if prev == 11 {
        (year.saturating_sub(1), prev)
    } else {
        (year, prev)
    }
}

/// Returns the `(year, month)` immediately after the given one.
///
/// The year saturates at `i32::MAX`.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    let next = wrap_month(month.min(11) as i32 + 1);
    if next == 0 {
        (year.saturating_add(1), next)
    } else {
        (year, next)
    }
}

/// Returns the English name of the zero-based `month`, or `None` if out of range.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month as usize).copied()
}

/// Returns weekday headings truncated to `len` characters, Sunday first.
///
/// `len = 2` yields `["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]`. A length
/// longer than a name keeps the full name.
pub fn weekday_labels(len: usize) -> [&'static str; 7] {
    WEEKDAY_NAMES.map(|name| &name[..len.min(name.len())])
}
