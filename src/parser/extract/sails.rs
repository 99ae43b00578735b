use std::sync::LazyLock;

use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};

use crate::parser::dom::{first, text_of, texts};
use crate::record::SailGroup;

static SAILS_GROUP: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.sailsGroup").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.title").unwrap());
static TABULAR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.tabular").unwrap());
static COLTITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.coltitle").unwrap());
static DATA: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.data").unwrap());

pub fn extract(document: &Html) -> Vec<SailGroup> {
    document.select(&SAILS_GROUP).filter_map(sail_group).collect()
}

/// Untitled groups and groups without a tabular (hidden sails) are skipped.
fn sail_group(group: ElementRef<'_>) -> Option<SailGroup> {
    let sail_type = text_of(first(group, &TITLE)?);
    let tabular = first(group, &TABULAR)?;

    let columns = texts(tabular, &COLTITLE);
    let entries: Vec<IndexMap<String, String>> = if columns.is_empty() {
        Vec::new()
    } else {
        texts(tabular, &DATA)
            .chunks_exact(columns.len())
            .map(|chunk| columns.iter().cloned().zip(chunk.iter().cloned()).collect())
            .collect()
    };

    Some(SailGroup { sail_type, entries })
}

// ── Tests ──
