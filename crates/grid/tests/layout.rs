use chrono::{Datelike, NaiveDate};
use kalends_bounds::DateRange;
use kalends_calendar::{DateBound, days_in_month};
use kalends_grid::{CellKind, DAYS_PER_WEEK, MonthGrid};

#[test]
fn every_month_has_whole_weeks_1900_to_2100() {
    let range = DateRange::new();
    for year in 1900..=2100 {
        for month in 0..12 {
            let grid = MonthGrid::compute(year, month, None, &range);
            assert_eq!(grid.cell_count() % DAYS_PER_WEEK, 0);
            assert!(
                (4..=6).contains(&grid.row_count()),
                "{year}-{month}: {} rows",
                grid.row_count()
            );
            let current = grid.cells().filter(|c| c.is_current_month()).count() as u32;
            assert_eq!(current, days_in_month(month, year), "{year}-{month}");
        }
    }
}

#[test]
fn columns_match_chrono_weekdays() {
    let range = DateRange::new();
    for year in [1999, 2000, 2014, 2024] {
        for month in 0..12 {
            let grid = MonthGrid::compute(year, month, None, &range);
            for week in grid.weeks() {
                for (col, cell) in week.iter().enumerate() {
                    let naive = cell.date.to_naive().unwrap();
                    assert_eq!(
                        naive.weekday().num_days_from_sunday() as usize,
                        col,
                        "{naive} in column {col}"
                    );
                }
            }
        }
    }
}

#[test]
fn cells_are_consecutive_days() {
    let range = DateRange::new();
    let grid = MonthGrid::compute(2016, 1, None, &range);
    let dates: Vec<NaiveDate> = grid.cells().map(|c| c.date.to_naive().unwrap()).collect();
    for pair in dates.windows(2) {
        assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
    }
}

#[test]
fn filler_kinds_surround_current_month() {
    let grid = MonthGrid::compute(2014, 3, None, &DateRange::new());
    let kinds: Vec<CellKind> = grid.cells().map(|c| c.kind).collect();
    let first_current = kinds.iter().position(|k| *k == CellKind::Current).unwrap();
    let last_current = kinds.iter().rposition(|k| *k == CellKind::Current).unwrap();
    assert!(kinds[..first_current].iter().all(|k| *k == CellKind::Previous));
    assert!(kinds[last_current + 1..].iter().all(|k| *k == CellKind::Next));
}

#[test]
fn range_boundary_days_inside_grid() {
    let mut range = DateRange::new();
    range.set_min((2014, 3, 2)).set_max((2014, 4, 3));
    let april = MonthGrid::compute(2014, 3, None, &range);
    assert!(!april.find(DateBound::from_triple(2014, 3, 1)).unwrap().valid);
    assert!(april.find(DateBound::from_triple(2014, 3, 2)).unwrap().valid);
    assert!(april.find(DateBound::from_triple(2014, 4, 3)).unwrap().valid);

    let may = MonthGrid::compute(2014, 4, None, &range);
    assert!(may.find(DateBound::from_triple(2014, 4, 3)).unwrap().valid);
    assert!(!may.find(DateBound::from_triple(2014, 4, 4)).unwrap().valid);
}

#[test]
fn out_of_range_month_is_still_laid_out() {
    let mut range = DateRange::new();
    range.set_max((2000, 0, 1));
    let grid = MonthGrid::compute(2014, 3, None, &range);
    assert_eq!(grid.row_count(), 5);
    assert!(grid.cells().all(|c| !c.valid));
}

#[test]
fn grid_serializes_for_surfaces() {
    let selected = DateBound::from_triple(2014, 3, 15);
    let grid = MonthGrid::compute(2014, 3, Some(selected), &DateRange::new());
    let json = serde_json::to_value(&grid).unwrap();
    assert_eq!(json["year"], 2014);
    assert_eq!(json["weeks"].as_array().unwrap().len(), 5);
    assert_eq!(json["weeks"][0][0]["kind"], "previous");
    assert_eq!(json["weeks"][2][2]["selected"], true);
    assert_eq!(json["weeks"][2][2]["date"]["day"], 15);
}
