//! Day-number and weekday arithmetic in the proleptic Gregorian calendar.

/// Days from 0000-03-01 to 1970-01-01.
const UNIX_EPOCH_OFFSET: i64 = 719_468;

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// Returns the number of days between 1970-01-01 and the given date.
///
/// `month` is zero-based. `day` is added linearly, so an out-of-range day
/// overflows into the following month instead of failing. Negative results
/// are dates before the epoch.
pub fn day_number(year: i32, month: u32, day: u32) -> i64 {
    let m = i64::from(month % 12) + 1;
    let y = i64::from(year) - i64::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    // Shift so the year starts in March and the leap day falls last.
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_OFFSET + i64::from(day) - 1
}

/// Returns the weekday of the given date, 0 = Sunday .. 6 = Saturday.
pub fn weekday(year: i32, month: u32, day: u32) -> u32 {
    // 1970-01-01 was a Thursday.
    (day_number(year, month, day) + 4).rem_euclid(7) as u32
}

/// Returns the weekday (0 = Sunday) of the first day of `month` in `year`.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    weekday(year, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_zero() {
        assert_eq!(day_number(1970, 0, 1), 0);
        assert_eq!(day_number(1970, 0, 2), 1);
        assert_eq!(day_number(1969, 11, 31), -1);
    }

    #[test]
    fn known_day_numbers() {
        assert_eq!(day_number(2000, 2, 1), 11_017);
        assert_eq!(day_number(2000, 1, 29), 11_016);
    }

    #[test]
    fn day_overflow_is_additive() {
        assert_eq!(day_number(2014, 1, 29), day_number(2014, 2, 1));
    }

    #[test]
    fn known_weekdays() {
        assert_eq!(weekday(1970, 0, 1), 4);
        assert_eq!(first_weekday(2014, 3), 2); // April 2014 starts on a Tuesday
        assert_eq!(first_weekday(2015, 1), 0); // February 2015 starts on a Sunday
        assert_eq!(first_weekday(2000, 0), 6); // January 2000 starts on a Saturday
    }

    #[test]
    fn weekday_before_epoch() {
        assert_eq!(weekday(1969, 11, 31), 3);
        assert_eq!(first_weekday(1900, 0), 1);
    }

    #[test]
    fn consecutive_days_advance_weekday() {
        for d in 1..28 {
            assert_eq!((weekday(2024, 1, d) + 1) % 7, weekday(2024, 1, d + 1));
        }
    }
}
