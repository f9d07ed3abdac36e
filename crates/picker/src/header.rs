//! Title state: static year/month text or quick-select menus.

use kalends_calendar::{DateBound, MONTH_NAMES, month_name};
use serde::Serialize;

use crate::error::PickerError;

/// Most years a year menu may offer.
pub const MAX_YEAR_MENU_LEN: i64 = 500;

/// Orders a year span and checks it against [`MAX_YEAR_MENU_LEN`].
pub(crate) fn year_span(from: i32, to: i32) -> Result<(i32, i32), PickerError> {
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    if i64::from(hi) - i64::from(lo) + 1 > MAX_YEAR_MENU_LEN {
        return Err(PickerError::YearSpanTooWide { from, to });
    }
    Ok((lo, hi))
}

/// A dropdown: a fixed list of options and the chosen one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<T> {
    options: Vec<T>,
    selected: usize,
}

impl<T: Copy + PartialEq> Menu<T> {
    /// Creates a menu with the first option chosen. `None` if `options` is empty.
    pub fn new(options: Vec<T>) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        Some(Self {
            options,
            selected: 0,
        })
    }

    /// Returns the options in display order.
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Returns the chosen value.
    pub fn value(&self) -> T {
        self.options[self.selected]
    }

    /// Chooses `value` if it is one of the options; otherwise leaves the
    /// menu unchanged and returns `false`.
    pub fn set_value(&mut self, value: T) -> bool {
        match self.options.iter().position(|option| *option == value) {
            Some(pos) => {
                self.selected = pos;
                true
            }
            None => false,
        }
    }
}

/// The title label a surface displays above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Label {
    /// Displayed year.
    pub year: i32,
    /// Displayed zero-based month.
    pub month: u32,
    /// English name of `month`.
    pub month_name: &'static str,
}

/// Year and month as shown in the title, as text or as menus.
///
/// While a menu is enabled, showing a month updates only that menu, and a
/// value missing from the menu leaves it untouched. Reading back always
/// prefers the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    year_text: i32,
    month_text: u32,
    year_menu: Option<Menu<i32>>,
    month_menu: Option<Menu<u32>>,
}

impl Header {
    /// Creates a text-only header showing `view`'s month.
    pub fn new(view: DateBound) -> Self {
        Self {
            year_text: view.year(),
            month_text: view.month(),
            year_menu: None,
            month_menu: None,
        }
    }

    /// Replaces the year text with a menu of `from..=to`. A reversed span is
    /// swapped.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::YearSpanTooWide`] if the span holds more than
    /// [`MAX_YEAR_MENU_LEN`] years; the header is left unchanged.
    pub fn enable_year_menu(&mut self, from: i32, to: i32) -> Result<(), PickerError> {
        let (from, to) = year_span(from, to)?;
        self.year_menu = Menu::new((from..=to).collect());
        Ok(())
    }

    /// Replaces the month text with a menu of all twelve months.
    pub fn enable_month_menu(&mut self) {
        self.month_menu = Menu::new((0..MONTH_NAMES.len() as u32).collect());
    }

    /// Returns the year menu, if enabled.
    pub fn year_menu(&self) -> Option<&Menu<i32>> {
        self.year_menu.as_ref()
    }

    /// Returns the month menu, if enabled.
    pub fn month_menu(&self) -> Option<&Menu<u32>> {
        self.month_menu.as_ref()
    }

    /// Updates the title for a newly displayed month.
    pub fn show(&mut self, year: i32, month: u32) {
        match self.year_menu.as_mut() {
            Some(menu) => {
                menu.set_value(year);
            }
            None => self.year_text = year,
        }
        match self.month_menu.as_mut() {
            Some(menu) => {
                menu.set_value(month);
            }
            None => self.month_text = month,
        }
    }

    /// Records a year picked from the menu. Returns `false` without a year
    /// menu or if `year` is not an option.
    pub fn choose_year(&mut self, year: i32) -> bool {
        self.year_menu
            .as_mut()
            .is_some_and(|menu| menu.set_value(year))
    }

    /// Records a month picked from the menu. Returns `false` without a month
    /// menu or if `month` is not an option.
    pub fn choose_month(&mut self, month: u32) -> bool {
        self.month_menu
            .as_mut()
            .is_some_and(|menu| menu.set_value(month))
    }

    /// Returns the displayed year, from the menu when enabled.
    pub fn year(&self) -> i32 {
        self.year_menu.as_ref().map_or(self.year_text, Menu::value)
    }

    /// Returns the displayed zero-based month, from the menu when enabled.
    pub fn month(&self) -> u32 {
        self.month_menu.as_ref().map_or(self.month_text, Menu::value)
    }

    /// Returns the first day of the displayed month.
    pub fn selected_month(&self) -> DateBound {
        DateBound::first_of(self.year(), self.month())
    }

    /// Returns the label a surface should draw.
    pub fn label(&self) -> Label {
        let month = self.month();
        Label {
            year: self.year(),
            month,
            month_name: month_name(month).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn april_2014() -> Header {
        Header::new(DateBound::from_triple(2014, 3, 15))
    }

    #[test]
    fn text_header_follows_show() {
        let mut header = april_2014();
        header.show(2015, 0);
        assert_eq!(header.selected_month(), DateBound::first_of(2015, 0));
        assert_eq!(header.label().month_name, "January");
    }

    #[test]
    fn empty_menu_is_rejected() {
        assert!(Menu::<i32>::new(Vec::new()).is_none());
    }

    #[test]
    fn menu_ignores_unknown_values() {
        let mut menu = Menu::new(vec![2013, 2014, 2015]).unwrap();
        assert_eq!(menu.value(), 2013);
        assert!(menu.set_value(2015));
        assert!(!menu.set_value(1999));
        assert_eq!(menu.value(), 2015);
    }

    #[test]
    fn year_menu_span_is_inclusive_and_ordered() {
        let mut header = april_2014();
        header.enable_year_menu(2016, 2012).unwrap();
        let menu = header.year_menu().unwrap();
        assert_eq!(menu.options(), &[2012, 2013, 2014, 2015, 2016]);
    }

    #[test]
    fn menu_read_back_preferred_over_text() {
        let mut header = april_2014();
        header.enable_year_menu(2010, 2020).unwrap();
        header.enable_month_menu();
        header.show(2014, 3);
        assert!(header.choose_year(2018));
        assert!(header.choose_month(7));
        assert_eq!(header.selected_month(), DateBound::first_of(2018, 7));
    }

    #[test]
    fn show_outside_year_menu_keeps_menu_value() {
        let mut header = april_2014();
        header.enable_year_menu(2010, 2020).unwrap();
        header.show(2014, 3);
        header.show(2030, 5);
        assert_eq!(header.year(), 2014);
        assert_eq!(header.month(), 5);
    }

    #[test]
    fn oversized_year_span_is_rejected() {
        let mut header = april_2014();
        assert_eq!(
            header.enable_year_menu(-2_000_000_000, 2_000_000_000),
            Err(PickerError::YearSpanTooWide {
                from: -2_000_000_000,
                to: 2_000_000_000,
            })
        );
        assert!(header.year_menu().is_none());
        assert!(header.enable_year_menu(1800, 2299).is_ok());
        assert!(header.enable_year_menu(i32::MAX, i32::MIN).is_err());
    }

    #[test]
    fn choose_without_menu_is_ignored() {
        let mut header = april_2014();
        assert!(!header.choose_year(2015));
        assert!(!header.choose_month(2));
        assert_eq!(header.selected_month(), DateBound::first_of(2014, 3));
    }
}
