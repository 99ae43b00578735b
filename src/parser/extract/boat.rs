use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::dom::{first, text_of, CERT_TYPE};
use crate::record::BoatIdentity;

static STRONG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("strong").unwrap());
static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());

/// Position of the boat block among the `cert-type` blocks; the first one is
/// the certificate header.
const BOAT_BLOCK: usize = 1;

pub fn extract(document: &Html) -> Option<BoatIdentity> {
    let blocks: Vec<_> = document.select(&CERT_TYPE).collect();
    if blocks.len() <= BOAT_BLOCK {
        return None;
    }
    let boat = blocks[BOAT_BLOCK];

    let name = first(boat, &STRONG)?;
    let sail = first(boat, &SPAN)?;
    Some(BoatIdentity {
        boat_name: text_of(name),
        sail_number: text_of(sail),
    })
}

// ── Tests ──
