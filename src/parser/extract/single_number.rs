use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::dom::{first, spaced_text, table_row, text_of, CAPTION, CELL};
use crate::record::ScoringTable;

static SINGLE_NUMBER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.allowances#singlenumber").unwrap());
static TITLE_ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr.title").unwrap());
static DATA_ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr.data").unwrap());
static TH: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").unwrap());

/// A row needs its label plus at least two scoring values.
const MIN_CELLS: usize = 3;

pub fn extract(document: &Html) -> Option<ScoringTable> {
    let table = document.select(&SINGLE_NUMBER).next()?;
    let caption = first(table, &CAPTION).map(text_of).unwrap_or_default();

    let title_row = first(table, &TITLE_ROW)?;
    let headers: Vec<_> = title_row.select(&TH).collect();
    if headers.len() < 2 {
        return None;
    }
    // "Time On<br>Distance" reads as "Time On Distance".
    let columns = headers[1..].iter().map(|h| spaced_text(*h)).collect();

    let rows = table
        .select(&DATA_ROW)
        .map(|row| row.select(&CELL).map(text_of).collect::<Vec<_>>())
        .filter(|cells| cells.len() >= MIN_CELLS)
        .filter_map(table_row)
        .collect();

    Some(ScoringTable {
        caption,
        columns,
        rows,
    })
}

// ── Tests ──
