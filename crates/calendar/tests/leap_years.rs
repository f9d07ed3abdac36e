use kalends_calendar::{days_in_month, is_leap_year};

#[test]
fn february_has_29_days_iff_leap() {
    for year in -800..=2800 {
        let expected = if is_leap_year(year) { 29 } else { 28 };
        assert_eq!(days_in_month(1, year), expected, "february {year}");
    }
}

#[test]
fn reference_years() {
    let cases: &[(i32, bool)] = &[(2000, true), (1900, false), (2004, true), (0, true), (2013, false)];
    for &(year, leap) in cases {
        assert_eq!(is_leap_year(year), leap, "leap year rule for {year}");
    }
}

#[test]
fn leap_rule_agrees_with_chrono() {
    for year in 1..=3000 {
        let chrono_leap = chrono::NaiveDate::from_ymd_opt(year, 2, 29).is_some();
        assert_eq!(is_leap_year(year), chrono_leap, "year {year}");
    }
}
