//! `RangeBounds` over non-date types.

use approx::assert_abs_diff_eq;
use kalends_bounds::{BoundsError, RangeBounds};

fn floats() -> RangeBounds<f64> {
    RangeBounds::new(|a: &f64, b: &f64| a.total_cmp(b), |a: &f64, b: &f64| (a - b).abs())
}

#[test]
fn float_range_inclusive() {
    let range = floats().with_min(0.5).with_max(1.5);
    assert!(range.valid(&0.5));
    assert!(range.valid(&1.5));
    assert!(!range.valid(&1.500_001));
    assert_abs_diff_eq!(range.restrict(&-3.0), 0.5);
    assert_abs_diff_eq!(range.restrict(&9.0), 1.5);
}

#[test]
fn float_reversed_restrict_uses_distance() {
    let range = floats().with_min(2.0).with_max(1.0);
    assert!(range.reversed());
    assert_abs_diff_eq!(range.distance(&1.0, &1.2), 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(range.restrict(&1.2), 1.0);
    assert_abs_diff_eq!(range.restrict(&1.9), 2.0);
}

#[test]
fn string_bounds_restrict_returns_owned_copy() {
    let range = RangeBounds::ordered(|a: &String, b: &String| a.len().abs_diff(b.len()) as f64)
        .with_min("m".to_string());
    let clamped = range.restrict(&"a".to_string());
    assert_eq!(clamped, "m");
    assert_eq!(range.min().map(String::as_str), Some("m"));
}

#[test]
fn builder_misconfiguration_fails_fast() {
    let missing_both = RangeBounds::<u8>::builder().min(1).build();
    assert!(matches!(missing_both, Err(BoundsError::MissingCompare)));
}
