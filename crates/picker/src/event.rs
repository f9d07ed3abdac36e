//! Notification topics, payloads and surface interactions.

use kalends_calendar::DateBound;

/// Topic a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
    /// The selected date changed.
    Change,
    /// The displayed month changed through navigation or a menu.
    ViewChange,
    /// The surface's "previous month" control was activated.
    Prev,
    /// The surface's "next month" control was activated.
    Next,
}

/// What moved the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewSource {
    /// Stepped back one month.
    Prev,
    /// Stepped forward one month.
    Next,
    /// Picked from the year menu.
    Year,
    /// Picked from the month menu.
    Month,
}

/// A notification delivered to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarEvent {
    /// A valid date was selected.
    Change(DateBound),
    /// The view moved to the month of `view` (first day).
    ViewChange {
        /// First day of the newly displayed month.
        view: DateBound,
        /// What caused the move.
        source: ViewSource,
    },
    /// The previous-month control was activated.
    Prev,
    /// The next-month control was activated.
    Next,
}

impl CalendarEvent {
    /// Returns the topic this event is published under.
    pub fn topic(&self) -> Topic {
        match self {
            Self::Change(_) => Topic::Change,
            Self::ViewChange { .. } => Topic::ViewChange,
            Self::Prev => Topic::Prev,
            Self::Next => Topic::Next,
        }
    }
}

/// A raw user interaction reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// A day cell was clicked.
    DayClicked(DateBound),
    /// The previous-month control was clicked.
    PrevClicked,
    /// The next-month control was clicked.
    NextClicked,
    /// A year was picked from the year menu.
    YearChosen(i32),
    /// A zero-based month was picked from the month menu.
    MonthChosen(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_match_variants() {
        let day = DateBound::from_triple(2014, 3, 15);
        assert_eq!(CalendarEvent::Change(day).topic(), Topic::Change);
        assert_eq!(
            CalendarEvent::ViewChange {
                view: day.first_of_month(),
                source: ViewSource::Next,
            }
            .topic(),
            Topic::ViewChange
        );
        assert_eq!(CalendarEvent::Prev.topic(), Topic::Prev);
        assert_eq!(CalendarEvent::Next.topic(), Topic::Next);
    }
}
