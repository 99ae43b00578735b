use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::dom::{text_excluding, text_of, CERT_TYPE};
use crate::record::CertificateHeader;

static INNER_DIV: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div").unwrap());
static INNER_H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static STRONG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("strong").unwrap());

/// Reads the certificate type and year from the first `cert-type` block.
///
/// Two layouts exist: `<div><strong></strong><span>Club Certificate</span><strong>2025</strong></div>`
/// and `<h1>Club<br>Certificate<br><strong>2024</strong></h1>`. Both read the same way once
/// the inner container is found.
pub fn extract(document: &Html) -> Option<CertificateHeader> {
    let block = document.select(&CERT_TYPE).next()?;
    let container = block
        .select(&INNER_DIV)
        .next()
        .or_else(|| block.select(&INNER_H1).next())?;

    // The year marker is always the last <strong>; earlier ones are empty spacers.
    let year = container
        .select(&STRONG)
        .last()
        .map(text_of)
        .unwrap_or_default();

    Some(CertificateHeader {
        certificate_type: text_excluding(container, "strong"),
        year,
    })
}

// ── Tests ──
