//! # kalends-calendar
//!
//! Calendar-day values and the Gregorian arithmetic a month grid needs.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"DateInput::Native"| C["DateInput"]
//!     B["(year, month, day)"] -->|"DateInput::Ymd"| C
//!     C -->|".normalize()"| D["DateBound"]
//!     D -->|".day_number()"| E["days since epoch"]
//!     E -->|"weekday()"| F["0 = Sunday .. 6"]
//!     G["(month, year)"] -->|"days_in_month()"| H["28..=31"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kalends_calendar::{DateBound, DateInput, days_in_month, first_weekday};
//!
//! // Months are zero-based: 3 = April.
//! let date = DateBound::new(2014, 3, 15).unwrap();
//! assert_eq!(date.to_string(), "2014-04-15");
//!
//! // Native and triple inputs normalize to the same key.
//! let native = chrono::NaiveDate::from_ymd_opt(2014, 4, 15).unwrap();
//! assert_eq!(DateInput::from(native).normalize(), date);
//!
//! assert_eq!(days_in_month(1, 2000), 29);
//! assert_eq!(first_weekday(2014, 3), 2); // Tuesday
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `DateBound` value type |
//! | `input` | Native/triple input union |
//! | `month` | Month tables, leap years, names |
//! | `weekday` | Day numbers and weekdays |
//! | `error` | Error types |

mod date;
mod error;
mod input;
mod month;
mod weekday;

pub use date::DateBound;
pub use error::CalendarError;
pub use input::DateInput;
pub use month::{
    MONTH_NAMES, WEEKDAY_NAMES, days_in_month, is_leap_year, month_name, next_month, prev_month,
    weekday_labels, wrap_month,
};
pub use weekday::{day_number, first_weekday, weekday};
