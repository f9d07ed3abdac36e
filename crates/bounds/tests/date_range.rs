//! Valid-day window behaviour with mixed date representations.

use chrono::NaiveDate;
use kalends_bounds::DateRange;
use kalends_calendar::{DateBound, DateInput};

fn native(y: i32, m: u32, d: u32) -> NaiveDate {
    // chrono months are one-based; triples in this crate are zero-based.
    NaiveDate::from_ymd_opt(y, m + 1, d).unwrap()
}

#[test]
fn no_bounds_accepts_everything() {
    let range = DateRange::new();
    let today = DateBound::today();
    assert!(!range.before(today));
    assert!(!range.after(today));
    assert!(range.valid((2002, 12, 10)));
}

#[test]
fn dates_inside_range_are_valid() {
    let range = DateRange::between(
        Some(DateInput::Ymd(2014, 3, 2)),
        Some(DateInput::Ymd(2014, 4, 3)),
    );
    assert!(range.before((2014, 3, 1)));
    assert!(!range.valid((2014, 3, 1)));
    assert!(range.valid((2014, 3, 2)));
    assert!(range.valid((2014, 3, 30)));
    assert!(range.valid((2014, 4, 3)));
    assert!(!range.valid((2014, 4, 4)));
    assert!(range.after((2014, 4, 4)));
}

#[test]
fn mixture_of_native_dates_and_triples() {
    let mut range = DateRange::new();
    range.set_min((2014, 3, 2)).set_max(native(2014, 4, 3));
    assert!(range.before(native(2014, 3, 1)));
    assert!(!range.valid(native(2014, 3, 1)));
    assert!(range.valid(native(2014, 3, 2)));
    assert!(range.valid(native(2014, 3, 30)));
    assert!(range.valid(native(2014, 4, 3)));
    assert!(!range.valid(native(2014, 4, 4)));
    assert!(range.after(native(2014, 4, 4)));
}

#[test]
fn only_min_specified() {
    let range = DateRange::between(Some(DateInput::Ymd(2013, 3, 3)), None);
    assert!(!range.valid((2013, 3, 2)));
    assert!(range.valid((2013, 3, 3)));
    assert!(range.valid((2013, 3, 4)));
}

#[test]
fn only_max_specified() {
    let range = DateRange::between(None, Some(DateInput::Ymd(2013, 3, 3)));
    assert!(range.valid((2013, 3, 2)));
    assert!(range.valid((2013, 3, 3)));
    assert!(!range.valid((2013, 3, 4)));
}

#[test]
fn restrict_returns_nearer_bound_or_value() {
    let min = DateBound::from_triple(2014, 3, 2);
    let max = DateBound::from_triple(2014, 4, 3);
    let range = DateRange::between(Some(min.into()), Some(max.into()));

    let clamped_low = range.restrict((2014, 0, 1));
    assert_eq!(clamped_low, min);
    let clamped_high = range.restrict((2015, 0, 1));
    assert_eq!(clamped_high, max);

    let inside = DateBound::from_triple(2014, 3, 20);
    assert_eq!(range.restrict(inside), inside);
}

#[test]
fn restrict_result_is_independent_of_range() {
    let mut range = DateRange::between(Some(DateInput::Ymd(2014, 3, 2)), None);
    let clamped = range.restrict((2014, 0, 1));
    range.set_min((2020, 0, 1));
    assert_eq!(clamped, DateBound::from_triple(2014, 3, 2));
}

#[test]
fn reversed_range_is_an_exclusion_window() {
    let mut range = DateRange::new();
    range.set_min((2014, 6, 20)).set_max((2014, 6, 10));
    assert!(range.reversed());
    assert!(range.valid((2014, 6, 1)));
    assert!(range.valid((2014, 6, 10)));
    assert!(!range.valid((2014, 6, 11)));
    assert!(!range.valid((2014, 6, 19)));
    assert!(range.valid((2014, 6, 20)));
    assert!(range.valid((2015, 0, 1)));
}

#[test]
fn reversed_restrict_moves_to_nearer_edge_with_ties_to_min() {
    let mut range = DateRange::new();
    range.set_min((2014, 6, 20)).set_max((2014, 6, 10));
    assert_eq!(range.restrict((2014, 6, 12)), DateBound::from_triple(2014, 6, 10));
    assert_eq!(range.restrict((2014, 6, 18)), DateBound::from_triple(2014, 6, 20));
    assert_eq!(range.restrict((2014, 6, 15)), DateBound::from_triple(2014, 6, 20));
    assert_eq!(range.restrict((2014, 6, 5)), DateBound::from_triple(2014, 6, 5));
}

#[test]
fn clearing_a_bound_ends_reversal() {
    let mut range = DateRange::new();
    range.set_min((2014, 6, 20)).set_max((2014, 6, 10));
    assert!(range.reversed());
    range.clear_max();
    assert!(!range.reversed());
    assert!(!range.valid((2014, 6, 15)));
    assert!(range.valid((2014, 6, 25)));
}
