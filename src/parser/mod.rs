pub mod dom;
pub mod extract;

use scraper::Html;

use extract::CertificateRecord;

/// Two-step pipeline: markup → document tree → certificate record.
pub fn process_page(html: &str) -> CertificateRecord {
    let document = Html::parse_document(html);
    extract::extract_all(&document)
}
