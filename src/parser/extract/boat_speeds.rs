use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::parser::dom::{has_class, table_row, text_of, TR};
use crate::record::WindSpeedTable;

static BOATSPEEDS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.boatspeeds").unwrap());
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

pub fn extract(document: &Html) -> Option<WindSpeedTable> {
    let table = document.select(&BOATSPEEDS).next()?;
    wind_speed_table(table)
}

/// Reads a table whose first row is `Wind Velocity | 4 kt | 6 kt | …` and whose
/// `tr.data` rows are `label | value | value | …`.
///
/// Row lengths are not checked against the axis; a short or long row is kept
/// as it appears on the page.
pub fn wind_speed_table(table: ElementRef<'_>) -> Option<WindSpeedTable> {
    let rows: Vec<_> = table.select(&TR).collect();
    if rows.len() < 2 {
        return None;
    }

    let header: Vec<String> = rows[0].select(&TD).map(text_of).collect();
    if header.is_empty() {
        return None;
    }
    let wind_speeds = header.into_iter().skip(1).collect();

    let data_rows = rows[1..]
        .iter()
        .filter(|row| has_class(**row, "data"))
        .filter_map(|row| table_row(row.select(&TD).map(text_of).collect()))
        .collect();

    Some(WindSpeedTable {
        wind_speeds,
        rows: data_rows,
    })
}

// ── Tests ──
