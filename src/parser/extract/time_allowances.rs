use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::parser::dom::{first, has_class, table_row, text_of, CAPTION, CELL, TR};
use crate::record::TimeAllowances;

static ALLOWANCES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.allowances").unwrap());
static TH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").unwrap());

const CAPTION_MARKER: &str = "Time Allowances in secs/NM";
const AXIS_MARKER: &str = "Wind Velocity";
const SELECTED_MARKER: &str = "Selected Courses";

#[derive(Clone, Copy, PartialEq)]
enum Segment {
    Main,
    Selected,
}

pub fn extract(document: &Html) -> Option<TimeAllowances> {
    let table = document.select(&ALLOWANCES).find(|t| {
        first(*t, &CAPTION).is_some_and(|cap| text_of(cap).contains(CAPTION_MARKER))
    })?;

    let rows: Vec<_> = table.select(&TR).collect();
    let axis_at = rows.iter().position(|r| is_axis_row(*r))?;
    let wind_speeds = rows[axis_at]
        .select(&CELL)
        .skip(1)
        .map(text_of)
        .collect();

    let mut segment = Segment::Main;
    let mut main_rows = Vec::new();
    let mut selected_courses = Vec::new();

    for row in &rows[axis_at + 1..] {
        if has_class(*row, "title") {
            if text_of(*row).contains(SELECTED_MARKER) {
                segment = Segment::Selected;
            }
            continue;
        }
        if !has_class(*row, "data") {
            continue;
        }

        let cells: Vec<String> = row.select(&CELL).map(text_of).collect();
        if cells.len() < 2 {
            continue;
        }
        if let Some(parsed) = table_row(cells) {
            match segment {
                Segment::Main => main_rows.push(parsed),
                Segment::Selected => selected_courses.push(parsed),
            }
        }
    }

    Some(TimeAllowances {
        wind_speeds,
        rows: main_rows,
        selected_courses,
    })
}

fn is_axis_row(row: ElementRef<'_>) -> bool {
    has_class(row, "title")
        && first(row, &TH).is_some_and(|th| text_of(th).contains(AXIS_MARKER))
}

// ── Tests ──
