//! Error types for the kalends-picker crate.

/// Error type for all fallible operations in the kalends-picker crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// Returned when the weekday heading length is outside 1..=9.
    #[error("invalid weekday heading length: {len} (must be 1..=9)")]
    InvalidHeadingLength {
        /// The rejected length.
        len: usize,
    },

    /// Returned when a year menu would offer more than 500 years.
    #[error("year menu span {from}..={to} is too wide (at most 500 years)")]
    YearSpanTooWide {
        /// First requested year.
        from: i32,
        /// Last requested year.
        to: i32,
    },
}
