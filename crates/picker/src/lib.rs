//! Date picker controller.
//!
//! [`Calendar`] owns the displayed month, the selection, a
//! [`DateRange`](kalends_bounds::DateRange) and the title [`Header`], and
//! publishes [`CalendarEvent`]s through an [`Emitter`]. A rendering surface
//! draws [`Calendar::grid`] and [`Calendar::label`] and reports clicks back
//! as [`Interaction`]s.
//!
//! ```mermaid
//! flowchart LR
//!     S[surface] -- Interaction --> C[Calendar]
//!     C -- show --> G[MonthGrid]
//!     C -- show --> H[Header]
//!     C -- emit --> E[Emitter]
//!     E -- CalendarEvent --> L[listeners]
//! ```
//!
//! # Events
//!
//! | Topic | Published by | Payload |
//! |-------|--------------|---------|
//! | `Change` | `select` on a valid day | selected date |
//! | `ViewChange` | `prev`, `next`, `choose_year`, `choose_month` | view month, source |
//! | `Prev` | `handle(PrevClicked)` | none |
//! | `Next` | `handle(NextClicked)` | none |
//!
//! # Quick start
//!
//! ```
//! use kalends_calendar::DateBound;
//! use kalends_picker::{Calendar, Topic};
//!
//! let mut calendar = Calendar::new(DateBound::from_triple(2014, 3, 15));
//! calendar.set_min((2014, 3, 10));
//! calendar.on(Topic::Change, |event| {
//!     println!("{event:?}");
//!     Ok(())
//! });
//! assert!(!calendar.select((2014, 3, 9)));
//! assert!(calendar.select((2014, 3, 12)));
//! ```

pub mod calendar;
pub mod config;
pub mod emitter;
pub mod error;
pub mod event;
pub mod header;

pub use calendar::Calendar;
pub use config::{PickerConfig, YearSpan};
pub use emitter::{Dispatch, Emitter, EmitterHandle, ListenerError, ListenerId};
pub use error::PickerError;
pub use event::{CalendarEvent, Interaction, Topic, ViewSource};
pub use header::{Header, Label, MAX_YEAR_MENU_LEN, Menu};
