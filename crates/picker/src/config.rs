//! Construction-time options for a [`Calendar`](crate::Calendar).

use kalends_calendar::DateBound;

use crate::error::PickerError;
use crate::header::year_span;

/// Longest weekday name, and so the longest useful heading.
const MAX_HEADING_LEN: usize = 9;

/// Inclusive year span for the year menu. Missing ends default to ten years
/// either side of the initial view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearSpan {
    /// First year offered.
    pub from: Option<i32>,
    /// Last year offered.
    pub to: Option<i32>,
}

/// Picker configuration applied by [`Calendar::with_config`](crate::Calendar::with_config).
///
/// # Example
///
/// ```
/// use kalends_calendar::DateBound;
/// use kalends_picker::PickerConfig;
///
/// let config = PickerConfig::new()
///     .with_min(DateBound::from_triple(2014, 3, 2))
///     .with_month_menu(true)
///     .with_heading_len(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    min: Option<DateBound>,
    max: Option<DateBound>,
    year_menu: Option<YearSpan>,
    month_menu: bool,
    heading_len: usize,
}

impl PickerConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: no bounds, no menus, two-letter weekday headings.
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
            year_menu: None,
            month_menu: false,
            heading_len: 2,
        }
    }

    /// Sets the earliest selectable day.
    pub fn with_min(mut self, min: DateBound) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the latest selectable day.
    pub fn with_max(mut self, max: DateBound) -> Self {
        self.max = Some(max);
        self
    }

    /// Enables the year menu over `span`.
    pub fn with_year_menu(mut self, span: YearSpan) -> Self {
        self.year_menu = Some(span);
        self
    }

    /// Enables or disables the month menu.
    pub fn with_month_menu(mut self, enabled: bool) -> Self {
        self.month_menu = enabled;
        self
    }

    /// Sets how many letters of each weekday name the headings show.
    pub fn with_heading_len(mut self, len: usize) -> Self {
        self.heading_len = len;
        self
    }

    /// Returns the earliest selectable day.
    pub fn min(&self) -> Option<DateBound> {
        self.min
    }

    /// Returns the latest selectable day.
    pub fn max(&self) -> Option<DateBound> {
        self.max
    }

    /// Returns the year menu span, if the menu is enabled.
    pub fn year_menu(&self) -> Option<YearSpan> {
        self.year_menu
    }

    /// Returns whether the month menu is enabled.
    pub fn month_menu(&self) -> bool {
        self.month_menu
    }

    /// Returns the weekday heading length.
    pub fn heading_len(&self) -> usize {
        self.heading_len
    }

    /// Validates this configuration.
    ///
    /// The heading length must be within 1..=9, and a year menu span with
    /// both ends set may offer at most
    /// [`MAX_YEAR_MENU_LEN`](crate::header::MAX_YEAR_MENU_LEN) years. Bounds
    /// are not checked against each other: `max < min` is a valid exclusion
    /// window.
    pub fn validate(&self) -> Result<(), PickerError> {
        if !(1..=MAX_HEADING_LEN).contains(&self.heading_len) {
            return Err(PickerError::InvalidHeadingLength {
                len: self.heading_len,
            });
        }
        if let Some(YearSpan {
            from: Some(from),
            to: Some(to),
        }) = self.year_menu
        {
            year_span(from, to)?;
        }
        Ok(())
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new()
    }
}
