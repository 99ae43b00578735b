use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::parser::extract::CertificateRecord;

const UNKNOWN_BOAT: &str = "UnknownBoat";
const UNKNOWN_YEAR: &str = "UnknownYear";
const UNKNOWN_TYPE: &str = "UnknownType";

/// `orc_certificate_{boat}_{year}_{type}.json`, with placeholders for
/// sections that were not found.
pub fn file_name(record: &CertificateRecord) -> String {
    let boat = record
        .boat_identity
        .as_ref()
        .map_or(UNKNOWN_BOAT, |b| b.boat_name.as_str());
    let (year, cert_type) = record
        .certificate_type
        .as_ref()
        .map_or((UNKNOWN_YEAR, UNKNOWN_TYPE), |h| {
            (h.year.as_str(), h.certificate_type.as_str())
        });

    format!(
        "orc_certificate_{}_{}_{}.json",
        file_component(boat),
        file_component(year),
        file_component(cert_type)
    )
}

/// Spaces become underscores; path separators too, so a boat name cannot
/// point outside the output directory.
fn file_component(s: &str) -> String {
    s.replace([' ', '/', '\\'], "_")
}

pub fn to_json(record: &CertificateRecord, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    };
    json.context("Failed to serialize certificate record")
}

/// Write the record into `dir` (created if missing) and return the file path.
pub fn write_record(dir: &Path, record: &CertificateRecord, pretty: bool) -> Result<PathBuf> {
    let json = to_json(record, pretty)?;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(file_name(record));
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Saved certificate JSON: {}", path.display());
    Ok(path)
}

/// One line per section: found/absent plus item counts.
pub fn summary_lines(record: &CertificateRecord) -> Vec<String> {
    let mut lines: Vec<String> = record
        .presence()
        .iter()
        .map(|(section, found)| {
            format!("  {:<22} {}", section, if *found { "found" } else { "absent" })
        })
        .collect();
    lines.push(format!("  {:<22} {} entries", "boat_specs", record.boat_specs.len()));
    lines.push(format!("  {:<22} {} groups", "sails", record.sails.len()));
    lines
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{BoatIdentity, CertificateHeader};

    fn empty_record() -> CertificateRecord {
        CertificateRecord {
            certificate_type: None,
            boat_identity: None,
            right_column: None,
            boat_speeds: None,
            time_allowances: None,
            single_number_scoring: None,
            boat_specs: Vec::new(),
            sails: Vec::new(),
        }
    }

    #[test]
    fn placeholders_for_absent_sections() {
        assert_eq!(
            file_name(&empty_record()),
            "orc_certificate_UnknownBoat_UnknownYear_UnknownType.json"
        );
    }

    #[test]
    fn spaces_become_underscores() {
        let mut r = empty_record();
        r.certificate_type = Some(CertificateHeader {
            certificate_type: "ORC International Certificate".into(),
            year: "2025".into(),
        });
        r.boat_identity = Some(BoatIdentity {
            boat_name: "Blue Note".into(),
            sail_number: "NED 4711".into(),
        });
        assert_eq!(
            file_name(&r),
            "orc_certificate_Blue_Note_2025_ORC_International_Certificate.json"
        );
    }

    #[test]
    fn separators_cannot_escape_directory() {
        let mut r = empty_record();
        r.boat_identity = Some(BoatIdentity {
            boat_name: "../Sea/Wolf".into(),
            sail_number: String::new(),
        });
        assert!(file_name(&r).starts_with("orc_certificate_.._Sea_Wolf_"));
    }

    /// Removes the directory on drop, so a failed assertion leaves nothing behind.
    struct TempDir(PathBuf);

    impl TempDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("{}_{}", name, std::process::id()));
            let _ = fs::remove_dir_all(&dir);
            TempDir(dir)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn writes_into_created_directory() {
        let tmp = TempDir::new("orc_scraper_write");

        let record = crate::parser::process_page(
            &fs::read_to_string("tests/fixtures/orc_certificate.html").unwrap(),
        );
        let path = write_record(&tmp.0.join("nested"), &record, true).unwrap();
        assert!(path.ends_with("orc_certificate_Blue_Note_2025_ORC_International_Certificate.json"));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"Beat Angles\""));
        assert!(written.contains("42.9°"));
        let back: CertificateRecord = serde_json::from_str(&written).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn temp_dir_is_removed_on_drop() {
        let path = {
            let tmp = TempDir::new("orc_scraper_guard");
            fs::create_dir_all(tmp.0.join("inner")).unwrap();
            tmp.0.clone()
        };
        assert!(!path.exists());
    }

    #[test]
    fn summary_reports_every_section() {
        let lines = summary_lines(&empty_record());
        assert_eq!(lines.len(), 8);
        assert!(lines[0].contains("certificate_type") && lines[0].ends_with("absent"));
        assert!(lines[7].contains("0 groups"));
    }
}
