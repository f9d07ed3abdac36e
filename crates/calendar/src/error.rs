//! Error types for the kalends-calendar crate.

/// Error type for all fallible operations in the kalends-calendar crate.
///
/// Covers validation of month indices and day-within-month values in the
/// proleptic Gregorian calendar, and parsing of ISO `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a zero-based month index is outside 0..=11.
    #[error("invalid month index: {month} (must be 0..=11)")]
    InvalidMonth {
        /// The invalid month index that was provided.
        month: u32,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month index {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The zero-based month for which the day is invalid.
        month: u32,
        /// The maximum valid day for the given month and year.
        max_day: u32,
    },

    /// Returned when a string is not a valid `YYYY-MM-DD` date.
    #[error("invalid date {input:?}: {source}")]
    Parse {
        /// The text that failed to parse.
        input: String,
        /// The underlying chrono parse failure.
        #[source]
        source: chrono::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 12 };
        assert_eq!(err.to_string(), "invalid month index: 12 (must be 0..=11)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 1,
            max_day: 28,
        };
        assert_eq!(
            err.to_string(),
            "invalid day: 29 for month index 1 (max 28)"
        );
    }

    #[test]
    fn error_parse_mentions_input() {
        let source = chrono::NaiveDate::parse_from_str("nope", "%Y-%m-%d").unwrap_err();
        let err = CalendarError::Parse {
            input: "nope".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid date \"nope\""));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 13 };
        let b = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(a, b);
        assert_ne!(a, CalendarError::InvalidMonth { month: 14 });
    }
}
