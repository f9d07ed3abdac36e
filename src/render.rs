//! Text and JSON surfaces for a [`Calendar`].

use anyhow::{Context, Result};
use serde::Serialize;

use kalends_calendar::DateBound;
use kalends_grid::{DayCell, Week};
use kalends_picker::{Calendar, Label};

/// Everything a surface needs to draw one month.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub label: Label,
    pub weekdays: [&'static str; 7],
    pub selected: Option<DateBound>,
    pub weeks: &'a [Week],
}

impl<'a> Snapshot<'a> {
    /// Captures the current state of `calendar`.
    pub fn capture(calendar: &'a Calendar) -> Self {
        Self {
            label: calendar.label(),
            weekdays: calendar.weekday_labels(),
            selected: calendar.selected(),
            weeks: calendar.grid().weeks(),
        }
    }
}

/// Renders `calendar` as JSON or as a text grid.
pub fn render(calendar: &Calendar, json: bool) -> Result<String> {
    let snapshot = Snapshot::capture(calendar);
    if json {
        let mut out =
            serde_json::to_string_pretty(&snapshot).context("failed to serialize snapshot")?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(render_text(&snapshot))
    }
}

/// Draws a snapshot as a fixed-width grid.
///
/// Cells read `[dd]` selected, `(dd)` disabled, `·dd` filler from a
/// neighbouring month and ` dd` otherwise.
pub fn render_text(snapshot: &Snapshot<'_>) -> String {
    let inner = snapshot
        .weekdays
        .iter()
        .map(|w| w.chars().count())
        .max()
        .unwrap_or(2)
        .max(2);
    let width = (inner + 2) * snapshot.weekdays.len();

    let mut out = String::new();
    let title = format!("{} {}", snapshot.label.month_name, snapshot.label.year);
    out.push_str(&format!("{title:^width$}\n"));
    for day in snapshot.weekdays {
        out.push_str(&format!(" {day:>inner$} "));
    }
    out.push('\n');
    for week in snapshot.weeks {
        for cell in week {
            out.push_str(&render_cell(cell, inner));
        }
        out.push('\n');
    }
    match snapshot.selected {
        Some(date) => out.push_str(&format!("selected: {date}\n")),
        None => out.push_str("selected: none\n"),
    }
    out
}

fn render_cell(cell: &DayCell, inner: usize) -> String {
    let (open, close) = if cell.selected {
        ('[', ']')
    } else if !cell.valid {
        ('(', ')')
    } else if cell.is_filler() {
        ('·', ' ')
    } else {
        (' ', ' ')
    };
    format!("{open}{:>inner$}{close}", cell.day())
}
