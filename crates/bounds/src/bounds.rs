//! Generic min/max bounds with configurable comparison and distance.

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::error::BoundsError;

/// Shared comparison function: negative, zero or positive as an [`Ordering`].
pub type CompareFn<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// Shared distance function. Must return a non-negative value.
pub type DistanceFn<T> = Rc<dyn Fn(&T, &T) -> f64>;

/// Optional lower and upper bounds over values of type `T`.
///
/// With `min <= max` (or either bound missing) the bounds describe an
/// inclusive range. With both bounds set and `max < min` the bounds are
/// *reversed*: they describe an excluded window `(max, min)`, and everything
/// at or outside it is valid.
///
/// # Example
///
/// ```
/// use kalends_bounds::RangeBounds;
///
/// let range = RangeBounds::ordered(|a: &i32, b: &i32| f64::from((a - b).abs()))
///     .with_min(10)
///     .with_max(20);
/// assert!(range.valid(&15));
/// assert!(!range.valid(&21));
/// assert_eq!(range.restrict(&25), 20);
///
/// // Reversed: 20..10 excludes the middle.
/// let window = RangeBounds::ordered(|a: &i32, b: &i32| f64::from((a - b).abs()))
///     .with_min(20)
///     .with_max(10);
/// assert!(window.reversed());
/// assert!(window.valid(&5));
/// assert!(!window.valid(&15));
/// assert_eq!(window.restrict(&12), 10);
/// ```
pub struct RangeBounds<T> {
    min: Option<T>,
    max: Option<T>,
    compare: CompareFn<T>,
    distance: DistanceFn<T>,
    /// Lazily computed `reversed()` result; `None` after min/max changes.
    reversed: Cell<Option<bool>>,
}

impl<T> RangeBounds<T> {
    /// Creates unbounded range bounds with the given functions.
    pub fn new(
        compare: impl Fn(&T, &T) -> Ordering + 'static,
        distance: impl Fn(&T, &T) -> f64 + 'static,
    ) -> Self {
        Self {
            min: None,
            max: None,
            compare: Rc::new(compare),
            distance: Rc::new(distance),
            reversed: Cell::new(None),
        }
    }

    /// Starts a builder whose functions may be supplied piecemeal.
    pub fn builder() -> RangeBoundsBuilder<T> {
        RangeBoundsBuilder::default()
    }

    /// Sets the lower bound.
    pub fn with_min(mut self, min: T) -> Self {
        self.set_min(Some(min));
        self
    }

    /// Sets the upper bound.
    pub fn with_max(mut self, max: T) -> Self {
        self.set_max(Some(max));
        self
    }

    /// Replaces the lower bound; `None` removes it.
    pub fn set_min(&mut self, min: Option<T>) {
        self.min = min;
        self.reversed.set(None);
    }

    /// Replaces the upper bound; `None` removes it.
    pub fn set_max(&mut self, max: Option<T>) {
        self.max = max;
        self.reversed.set(None);
    }

    /// Returns the lower bound, if any.
    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    /// Returns the upper bound, if any.
    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }

    /// Compares two values with the configured function.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    /// Measures two values with the configured function.
    pub fn distance(&self, a: &T, b: &T) -> f64 {
        (self.distance)(a, b)
    }

    /// Returns `true` if a lower bound is set and `value` lies below it.
    pub fn before(&self, value: &T) -> bool {
        self.min
            .as_ref()
            .is_some_and(|min| self.compare(value, min).is_lt())
    }

    /// Returns `true` if an upper bound is set and `value` lies above it.
    pub fn after(&self, value: &T) -> bool {
        self.max
            .as_ref()
            .is_some_and(|max| self.compare(value, max).is_gt())
    }

    /// Returns `true` if `value` is before the lower or after the upper bound.
    pub fn out(&self, value: &T) -> bool {
        self.before(value) || self.after(value)
    }

    /// Returns `true` if `value` lies within the bounds (inclusive).
    pub fn contains(&self, value: &T) -> bool {
        !self.out(value)
    }

    /// Returns `true` if both bounds are set and `max` sorts before `min`.
    pub fn reversed(&self) -> bool {
        if let Some(reversed) = self.reversed.get() {
            return reversed;
        }
        let reversed = match (&self.min, &self.max) {
            (Some(min), Some(max)) => self.compare(max, min).is_lt(),
            _ => false,
        };
        self.reversed.set(Some(reversed));
        reversed
    }

    /// Returns `true` if `value` is acceptable under these bounds.
    ///
    /// Ordinary bounds accept values inside the inclusive range. Reversed
    /// bounds reject only values strictly between `max` and `min`.
    pub fn valid(&self, value: &T) -> bool {
        if self.reversed() {
            !self.after(value) || !self.before(value)
        } else {
            self.contains(value)
        }
    }
}

impl<T: Clone> RangeBounds<T> {
    /// Clamps `value` to the nearest acceptable bound.
    ///
    /// Ordinary bounds return a copy of `min` or `max` when `value` falls
    /// outside them. Reversed bounds move a value inside the excluded window
    /// to whichever bound is closer by `distance`; on a tie the result is
    /// `min`. Acceptable values are returned unchanged.
    pub fn restrict(&self, value: &T) -> T {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) if self.reversed() => {
                if self.valid(value) {
                    value.clone()
                } else if self.distance(max, value) < self.distance(value, min) {
                    trace!(bound = "max", reversed = true, "restricted value");
                    max.clone()
                } else {
                    trace!(bound = "min", reversed = true, "restricted value");
                    min.clone()
                }
            }
            (Some(min), _) if self.before(value) => {
                trace!(bound = "min", "restricted value");
                min.clone()
            }
            (_, Some(max)) if self.after(value) => {
                trace!(bound = "max", "restricted value");
                max.clone()
            }
            _ => value.clone(),
        }
    }
}

impl<T: Ord + 'static> RangeBounds<T> {
    /// Creates unbounded range bounds that compare with [`Ord::cmp`].
    pub fn ordered(distance: impl Fn(&T, &T) -> f64 + 'static) -> Self {
        Self::new(T::cmp, distance)
    }
}

impl<T: Clone> Clone for RangeBounds<T> {
    fn clone(&self) -> Self {
        Self {
            min: self.min.clone(),
            max: self.max.clone(),
            compare: Rc::clone(&self.compare),
            distance: Rc::clone(&self.distance),
            reversed: self.reversed.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RangeBounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeBounds")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("reversed", &self.reversed.get())
            .finish_non_exhaustive()
    }
}

/// Builder for [`RangeBounds`] that checks both functions are present.
pub struct RangeBoundsBuilder<T> {
    min: Option<T>,
    max: Option<T>,
    compare: Option<CompareFn<T>>,
    distance: Option<DistanceFn<T>>,
}

impl<T> Default for RangeBoundsBuilder<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            compare: None,
            distance: None,
        }
    }
}

impl<T> RangeBoundsBuilder<T> {
    /// Sets the comparison function.
    pub fn compare(mut self, compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.compare = Some(Rc::new(compare));
        self
    }

    /// Sets the distance function.
    pub fn distance(mut self, distance: impl Fn(&T, &T) -> f64 + 'static) -> Self {
        self.distance = Some(Rc::new(distance));
        self
    }

    /// Sets the lower bound.
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound.
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    /// Finishes the builder.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::MissingCompare`] or [`BoundsError::MissingDistance`]
    /// if the corresponding function was never supplied.
    pub fn build(self) -> Result<RangeBounds<T>, BoundsError> {
        let compare = self.compare.ok_or(BoundsError::MissingCompare)?;
        let distance = self.distance.ok_or(BoundsError::MissingDistance)?;
        Ok(RangeBounds {
            min: self.min,
            max: self.max,
            compare,
            distance,
            reversed: Cell::new(None),
        })
    }
}
