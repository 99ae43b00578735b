use std::sync::LazyLock;

use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};

use crate::parser::dom::{
    children_with_class, enclosing, first, has_class, next_sibling_tag, pair_shortest, text_of,
    texts,
};
use crate::record::{GroupRecord, LabelValue, RightColumn};

static RIGHT_COLUMN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.right-column").unwrap());
static TABULAR1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.tabular1").unwrap());
static SMALL_LABEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.small-label").unwrap());
static DATA: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.data").unwrap());
static LABEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.label").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.title").unwrap());
static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());

/// Tabular containers a group may use, highest priority first.
static GROUP_TABULARS: LazyLock<[Selector; 3]> = LazyLock::new(|| {
    ["div.tabular2", "div.tabular3", "div.tabular5"].map(|s| Selector::parse(s).unwrap())
});

pub const UNTITLED_GROUP: &str = "No title";
pub const COMMENT_LABEL: &str = "Comment";

const FREE_TEXT_EXCLUDED: &[&str] = &["label", "data", "title"];

pub fn extract(document: &Html) -> Option<RightColumn> {
    let column = document.select(&RIGHT_COLUMN).next()?;

    let summary_top = first(column, &TABULAR1)
        .map(summary_fields)
        .unwrap_or_default();

    let groups = children_with_class(column, "div", "p1group")
        .map(group_record)
        .collect();

    Some(RightColumn { summary_top, groups })
}

fn summary_fields(tabular: ElementRef<'_>) -> IndexMap<String, String> {
    let mut fields = IndexMap::new();
    for label in tabular.select(&SMALL_LABEL) {
        let key = text_of(label).replace(':', "").trim().to_string();
        let Some(wrapper) = enclosing(label, "span", "number") else {
            continue;
        };
        fields.insert(key, summary_value(wrapper));
    }
    fields
}

/// The value follows the label's `number` wrapper, either directly as
/// `<span class="data number">` or one level deeper inside another wrapper.
fn summary_value(wrapper: ElementRef<'_>) -> String {
    let Some(next) = next_sibling_tag(wrapper, "span") else {
        return String::new();
    };
    if has_class(next, "data") {
        text_of(next)
    } else if has_class(next, "number") {
        first(next, &DATA).map(text_of).unwrap_or_default()
    } else {
        text_of(next)
    }
}

fn group_record(group: ElementRef<'_>) -> GroupRecord {
    let title = first(group, &TITLE)
        .map(text_of)
        .unwrap_or_else(|| UNTITLED_GROUP.to_string());

    let tabular = GROUP_TABULARS.iter().find_map(|sel| first(group, sel));
    let items = match tabular {
        Some(tab) => pair_shortest(texts(tab, &LABEL), texts(tab, &DATA))
            .into_iter()
            .map(|(label, value)| LabelValue { label, value })
            .collect(),
        None => free_text(group).into_iter().collect(),
    };

    GroupRecord { title, items }
}

/// Groups without a tabular container (e.g. COMMENTS) carry plain spans.
fn free_text(group: ElementRef<'_>) -> Option<LabelValue> {
    let lines: Vec<String> = group
        .select(&SPAN)
        .filter(|sp| !FREE_TEXT_EXCLUDED.iter().any(|c| has_class(*sp, c)))
        .map(text_of)
        .filter(|t| !t.is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }
    Some(LabelValue {
        label: COMMENT_LABEL.to_string(),
        value: lines.join("\n"),
    })
}

// ── Tests ──
