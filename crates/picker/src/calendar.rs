//! The date picker controller.

use kalends_bounds::DateRange;
use kalends_calendar::{DateBound, DateInput, weekday_labels};
use kalends_grid::MonthGrid;
use tracing::{debug, trace};

use crate::config::PickerConfig;
use crate::emitter::{Emitter, ListenerError, ListenerId};
use crate::error::PickerError;
use crate::event::{CalendarEvent, Interaction, Topic, ViewSource};
use crate::header::{Header, Label};

/// Years offered either side of the view when a menu span end is omitted.
const DEFAULT_YEAR_SPREAD: i32 = 10;

/// A month-view date picker.
///
/// Holds the displayed month, the selected day and the valid-date range,
/// and recomputes its [`MonthGrid`] on every [`show`](Self::show). Changes
/// are published through an owned [`Emitter`].
///
/// # Example
///
/// ```
/// use kalends_calendar::DateBound;
/// use kalends_picker::Calendar;
///
/// let mut calendar = Calendar::new(DateBound::from_triple(2014, 3, 15));
/// calendar.next();
/// assert_eq!(calendar.view(), DateBound::first_of(2014, 4));
/// assert!(calendar.selected().is_none());
/// ```
#[derive(Debug)]
pub struct Calendar {
    view: DateBound,
    selected: Option<DateBound>,
    range: DateRange,
    header: Header,
    grid: MonthGrid,
    heading_len: usize,
    emitter: Emitter,
}

impl Calendar {
    /// Creates an unbounded picker viewing `date`'s month, with no selection.
    pub fn new(date: impl Into<DateInput>) -> Self {
        let view = date.into().normalize();
        let range = DateRange::new();
        let grid = MonthGrid::compute(view.year(), view.month(), None, &range);
        Self {
            view,
            selected: None,
            range,
            header: Header::new(view),
            grid,
            heading_len: 2,
            emitter: Emitter::new(),
        }
    }

    /// Creates a picker viewing the current local month.
    pub fn today() -> Self {
        Self::new(DateBound::today())
    }

    /// Creates a picker viewing `date`'s month with `config` applied.
    pub fn with_config(
        date: impl Into<DateInput>,
        config: &PickerConfig,
    ) -> Result<Self, PickerError> {
        config.validate()?;
        let mut calendar = Self::new(date);
        calendar.heading_len = config.heading_len();
        calendar.range = DateRange::between(
            config.min().map(DateInput::from),
            config.max().map(DateInput::from),
        );
        if let Some(span) = config.year_menu() {
            calendar.enable_year_menu(span.from, span.to)?;
        }
        if config.month_menu() {
            calendar.header.enable_month_menu();
        }
        calendar.show(calendar.view);
        Ok(calendar)
    }

    /// Displays `date`'s month. Always succeeds, also for months entirely
    /// outside the valid range.
    pub fn show(&mut self, date: impl Into<DateInput>) {
        let date = date.into().normalize();
        self.view = date;
        self.header.show(date.year(), date.month());
        self.grid = MonthGrid::compute(date.year(), date.month(), self.selected, &self.range);
        debug!(view = %date, rows = self.grid.row_count(), "showing month");
    }

    /// Selects `date` if the range allows it, publishing [`CalendarEvent::Change`].
    ///
    /// The view moves to `date`'s month either way. Returns whether the
    /// selection changed.
    pub fn select(&mut self, date: impl Into<DateInput>) -> bool {
        let date = date.into().normalize();
        let accepted = self.range.valid(date);
        if accepted {
            self.selected = Some(date);
            debug!(selected = %date, "date selected");
            self.emit(CalendarEvent::Change(date));
        } else {
            debug!(rejected = %date, "date outside valid range");
        }
        self.show(date);
        accepted
    }

    /// Selects the selectable day nearest to `date`.
    pub fn select_clamped(&mut self, date: impl Into<DateInput>) -> bool {
        let date = self.range.restrict(date);
        self.select(date)
    }

    /// Steps the view back one month.
    pub fn prev(&mut self) {
        self.show(self.view.prev_month_start());
        self.emit_view_change(ViewSource::Prev);
    }

    /// Steps the view forward one month.
    pub fn next(&mut self) {
        self.show(self.view.next_month_start());
        self.emit_view_change(ViewSource::Next);
    }

    /// Sets the earliest selectable day and refreshes the grid.
    pub fn set_min(&mut self, date: impl Into<DateInput>) {
        self.range.set_min(date);
        self.show(self.view);
    }

    /// Sets the latest selectable day and refreshes the grid.
    pub fn set_max(&mut self, date: impl Into<DateInput>) {
        self.range.set_max(date);
        self.show(self.view);
    }

    /// Removes the lower bound and refreshes the grid.
    pub fn clear_min(&mut self) {
        self.range.clear_min();
        self.show(self.view);
    }

    /// Removes the upper bound and refreshes the grid.
    pub fn clear_max(&mut self) {
        self.range.clear_max();
        self.show(self.view);
    }

    /// Switches the title year to a menu of `from..=to`.
    ///
    /// Missing ends default to ten years either side of the view.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::YearSpanTooWide`] for a span of more than
    /// [`MAX_YEAR_MENU_LEN`](crate::header::MAX_YEAR_MENU_LEN) years.
    pub fn enable_year_menu(
        &mut self,
        from: Option<i32>,
        to: Option<i32>,
    ) -> Result<(), PickerError> {
        let year = self.view.year();
        self.header.enable_year_menu(
            from.unwrap_or(year.saturating_sub(DEFAULT_YEAR_SPREAD)),
            to.unwrap_or(year.saturating_add(DEFAULT_YEAR_SPREAD)),
        )?;
        self.show(self.view);
        Ok(())
    }

    /// Switches the title month to a menu of all twelve months.
    pub fn enable_month_menu(&mut self) {
        self.header.enable_month_menu();
        self.show(self.view);
    }

    /// Returns the first day of the month the title shows, reading the
    /// menus when enabled.
    pub fn selected_view_month(&self) -> DateBound {
        self.header.selected_month()
    }

    /// Applies a year picked from the year menu. Returns `false` if the
    /// year menu is not enabled.
    pub fn choose_year(&mut self, year: i32) -> bool {
        if self.header.year_menu().is_none() {
            return false;
        }
        if !self.header.choose_year(year) {
            trace!(year, "year not offered by menu");
        }
        self.show_menu_choice(ViewSource::Year);
        true
    }

    /// Applies a zero-based month picked from the month menu. Returns
    /// `false` if the month menu is not enabled.
    pub fn choose_month(&mut self, month: u32) -> bool {
        if self.header.month_menu().is_none() {
            return false;
        }
        if !self.header.choose_month(month) {
            trace!(month, "month not offered by menu");
        }
        self.show_menu_choice(ViewSource::Month);
        true
    }

    /// Routes a raw surface interaction to the matching operation.
    pub fn handle(&mut self, interaction: Interaction) {
        trace!(?interaction, "handling interaction");
        match interaction {
            Interaction::DayClicked(date) => {
                self.select(date);
            }
            Interaction::PrevClicked => {
                self.emit(CalendarEvent::Prev);
                self.prev();
            }
            Interaction::NextClicked => {
                self.emit(CalendarEvent::Next);
                self.next();
            }
            Interaction::YearChosen(year) => {
                self.choose_year(year);
            }
            Interaction::MonthChosen(month) => {
                self.choose_month(month);
            }
        }
    }

    /// Returns the displayed date (not normalized to day 1).
    pub fn view(&self) -> DateBound {
        self.view
    }

    /// Returns the selected date, if any.
    pub fn selected(&self) -> Option<DateBound> {
        self.selected
    }

    /// Returns the grid of the displayed month.
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Returns the valid-date range.
    pub fn range(&self) -> &DateRange {
        &self.range
    }

    /// Returns the title state.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the title label for the surface.
    pub fn label(&self) -> Label {
        self.header.label()
    }

    /// Returns weekday headings, Sunday first, at the configured length.
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        weekday_labels(self.heading_len)
    }

    /// Registers `listener` for `topic`.
    pub fn on<F>(&self, topic: Topic, listener: F) -> ListenerId
    where
        F: FnMut(&CalendarEvent) -> Result<(), ListenerError> + 'static,
    {
        self.emitter.on(topic, listener)
    }

    /// Registers `listener` for the next event on `topic` only.
    pub fn once<F>(&self, topic: Topic, listener: F) -> ListenerId
    where
        F: FnMut(&CalendarEvent) -> Result<(), ListenerError> + 'static,
    {
        self.emitter.once(topic, listener)
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn off(&self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }

    /// Returns the emitter publishing this picker's events.
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    fn show_menu_choice(&mut self, source: ViewSource) {
        let view = self.header.selected_month();
        self.show(view);
        self.emit_view_change(source);
    }

    fn emit_view_change(&self, source: ViewSource) {
        self.emit(CalendarEvent::ViewChange {
            view: self.selected_view_month(),
            source,
        });
    }

    fn emit(&self, event: CalendarEvent) {
        let outcome = self.emitter.emit(&event);
        trace!(topic = ?event.topic(), ?outcome, "event published");
    }
}
