use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::dom::{first, pair_shortest, text_of, texts};
use crate::record::SpecEntry;

static P2GROUP: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.p2group").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.title").unwrap());
static LABEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.label").unwrap());
static DATA: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.data").unwrap());

pub const UNKNOWN_SECTION: &str = "Unknown Section";

/// Flattens every `p2group` into `{section_title, label, value}` entries.
pub fn extract(document: &Html) -> Vec<SpecEntry> {
    let mut entries = Vec::new();

    for group in document.select(&P2GROUP) {
        let section_title = first(group, &TITLE)
            .map(text_of)
            .unwrap_or_else(|| UNKNOWN_SECTION.to_string());

        for (label, value) in pair_shortest(texts(group, &LABEL), texts(group, &DATA)) {
            entries.push(SpecEntry {
                section_title: section_title.clone(),
                label,
                value,
            });
        }
    }

    entries
}

// ── Tests ──
