//! Range bounds with ordinary and reversed semantics.
//!
//! [`RangeBounds<T>`] holds an optional minimum and maximum together with a
//! comparison and a distance function. It answers three questions:
//!
//! | Question | Ordinary (`min <= max`) | Reversed (`max < min`) |
//! |----------|------------------------|------------------------|
//! | `valid(v)` | `min <= v <= max` | `v <= max` or `v >= min` |
//! | `restrict(v)` | clamp to `min`/`max` | move to the nearer of `max`/`min` |
//! | `reversed()` | `false` | `true` |
//!
//! A missing bound is unbounded on that side. [`DateRange`] specialises the
//! bounds to calendar days.
//!
//! # Quick start
//!
//! ```
//! use kalends_bounds::DateRange;
//!
//! let mut range = DateRange::new();
//! range.set_min((2014, 3, 2)).set_max((2014, 4, 3));
//! assert!(!range.valid((2014, 3, 1)));
//! assert!(range.valid((2014, 3, 2)));
//! assert!(range.valid((2014, 4, 3)));
//! assert!(!range.valid((2014, 4, 4)));
//! ```

pub mod bounds;
pub mod date_range;
pub mod error;

pub use bounds::{CompareFn, DistanceFn, RangeBounds, RangeBoundsBuilder};
pub use date_range::DateRange;
pub use error::BoundsError;
