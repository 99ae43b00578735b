use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::record::TableRow;

/// Certificate header and boat identity blocks share this class.
pub static CERT_TYPE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.cert-type").unwrap());
pub static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
pub static CAPTION: LazyLock<Selector> = LazyLock::new(|| Selector::parse("caption").unwrap());
/// Header and data cells in document order.
pub static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th, td").unwrap());

/// Element text with every fragment trimmed and empty fragments dropped,
/// concatenated without a separator.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Like [`text_of`] but fragments are joined by a single space, so `<br>`
/// separated words stay apart.
pub fn spaced_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of `el` skipping every descendant `<tag>` subtree, whitespace runs
/// collapsed to single spaces.
pub fn text_excluding(el: ElementRef<'_>, tag: &str) -> String {
    let mut fragments = Vec::new();
    collect_excluding(el, tag, &mut fragments);
    collapse_ws(&fragments.join(" "))
}

fn collect_excluding(el: ElementRef<'_>, tag: &str, out: &mut Vec<String>) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            let t = text.trim();
            if !t.is_empty() {
                out.push(t.to_string());
            }
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if child_el.value().name() != tag {
                collect_excluding(child_el, tag, out);
            }
        }
    }
}

pub fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

fn is(el: ElementRef<'_>, tag: &str, class: &str) -> bool {
    el.value().name() == tag && has_class(el, class)
}

/// First descendant matching `selector`.
pub fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Trimmed text of every descendant matching `selector`, in document order.
pub fn texts(scope: ElementRef<'_>, selector: &Selector) -> Vec<String> {
    scope.select(selector).map(text_of).collect()
}

/// Direct element children that are `<tag class="..class..">`.
pub fn children_with_class<'a>(
    el: ElementRef<'a>,
    tag: &'a str,
    class: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |c| is(*c, tag, class))
}

/// Nearest ancestor `<tag class="..class..">`.
pub fn enclosing<'a>(el: ElementRef<'a>, tag: &str, class: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| is(*a, tag, class))
}

/// Next sibling element named `tag`, skipping text and other elements.
pub fn next_sibling_tag<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|s| s.value().name() == tag)
}

/// Pairs items positionally and stops at the shorter side.
///
/// Pages routinely carry a stray label or data cell; the unmatched tail is
/// dropped on purpose and must not turn into an error.
pub fn pair_shortest<A, B>(left: Vec<A>, right: Vec<B>) -> Vec<(A, B)> {
    left.into_iter().zip(right).collect()
}

/// First cell is the row label, the rest are its values.
pub fn table_row(cells: Vec<String>) -> Option<TableRow> {
    let mut cells = cells.into_iter();
    let label = cells.next()?;
    Some(TableRow {
        label,
        values: cells.collect(),
    })
}

// ── Tests ──
