pub mod boat;
pub mod boat_specs;
pub mod boat_speeds;
pub mod header;
pub mod right_column;
pub mod sails;
pub mod single_number;
pub mod time_allowances;

use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::*;

/// Everything pulled from one certificate page. A `None` section serializes
/// as `null`; a section that was found but empty stays `[]` / `{}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub certificate_type: Option<CertificateHeader>,
    pub boat_identity: Option<BoatIdentity>,
    pub right_column: Option<RightColumn>,
    pub boat_speeds: Option<WindSpeedTable>,
    pub time_allowances: Option<TimeAllowances>,
    pub single_number_scoring: Option<ScoringTable>,
    pub boat_specs: Vec<SpecEntry>,
    pub sails: Vec<SailGroup>,
}

pub fn extract_all(document: &Html) -> CertificateRecord {
    let record = CertificateRecord {
        certificate_type: header::extract(document),
        boat_identity: boat::extract(document),
        right_column: right_column::extract(document),
        boat_speeds: boat_speeds::extract(document),
        time_allowances: time_allowances::extract(document),
        single_number_scoring: single_number::extract(document),
        boat_specs: boat_specs::extract(document),
        sails: sails::extract(document),
    };

    for (section, found) in record.presence() {
        if !found {
            debug!("Section not found: {}", section);
        }
    }

    record
}

impl CertificateRecord {
    /// `(key, found)` for every optional section, in output order.
    pub fn presence(&self) -> [(&'static str, bool); 6] {
        [
            ("certificate_type", self.certificate_type.is_some()),
            ("boat_identity", self.boat_identity.is_some()),
            ("right_column", self.right_column.is_some()),
            ("boat_speeds", self.boat_speeds.is_some()),
            ("time_allowances", self.time_allowances.is_some()),
            ("single_number_scoring", self.single_number_scoring.is_some()),
        ]
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(fixture: &str) -> CertificateRecord {
        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", fixture)).unwrap();
        extract_all(&Html::parse_document(&html))
    }

    #[test]
    fn orc_certificate_all_sections() {
        let r = parse("orc_certificate");

        let header = r.certificate_type.as_ref().unwrap();
        assert_eq!(header.certificate_type, "ORC International Certificate");
        assert_eq!(header.year, "2025");

        let boat = r.boat_identity.as_ref().unwrap();
        assert_eq!(boat.boat_name, "Blue Note");
        assert_eq!(boat.sail_number, "NED 4711");

        let rc = r.right_column.as_ref().unwrap();
        assert_eq!(rc.summary_top["GPH"], "621.4");
        assert_eq!(rc.summary_top["CDL"], "11.263");
        let titles: Vec<&str> = rc.groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["BOAT", "HULL", "COMMENTS"]);
        assert_eq!(rc.groups[2].items[0].label, "Comment");

        let speeds = r.boat_speeds.as_ref().unwrap();
        assert_eq!(speeds.wind_speeds.len(), 7);
        assert!(speeds.rows.iter().all(|row| row.values.len() == 7));
        assert_eq!(speeds.rows.len(), 4);

        let ta = r.time_allowances.as_ref().unwrap();
        assert_eq!(ta.rows.len(), 3);
        assert_eq!(ta.selected_courses.len(), 2);
        assert_eq!(ta.selected_courses[1].label, "All purpose");

        let sns = r.single_number_scoring.as_ref().unwrap();
        assert_eq!(sns.columns, vec!["Time On Distance", "Time On Time"]);
        assert_eq!(sns.rows.len(), 2);

        assert_eq!(r.boat_specs.len(), 5);
        assert!(r.boat_specs.iter().any(|s| s.section_title == "Unknown Section"));

        let sail_types: Vec<&str> = r.sails.iter().map(|s| s.sail_type.as_str()).collect();
        assert_eq!(sail_types, vec!["MAINSAIL", "HEADSAIL"]);
        assert_eq!(r.sails[0].entries.len(), 2);
        assert_eq!(r.sails[1].entries.len(), 1);
    }

    #[test]
    fn club_certificate_missing_sections() {
        let r = parse("club_certificate");

        let header = r.certificate_type.as_ref().unwrap();
        assert_eq!(header.certificate_type, "Club Certificate");
        assert_eq!(header.year, "2024");

        assert!(r.boat_identity.is_none());
        assert!(r.boat_speeds.is_none());
        assert!(r.time_allowances.is_none());
        assert!(r.single_number_scoring.is_none());

        let rc = r.right_column.as_ref().unwrap();
        assert!(rc.summary_top.is_empty());
        assert!(rc.groups.is_empty());
        assert!(r.boat_specs.is_empty());
        assert!(r.sails.is_empty());
    }

    #[test]
    fn empty_page_is_all_absent() {
        let r = extract_all(&Html::parse_document(""));
        assert!(r.presence().iter().all(|(_, found)| !found));
        assert!(r.boat_specs.is_empty());
        assert!(r.sails.is_empty());
    }

    #[test]
    fn json_round_trip_keeps_null_and_empty_apart() {
        let r = parse("club_certificate");
        let json = serde_json::to_string(&r).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["boat_identity"].is_null());
        assert!(value["boat_speeds"].is_null());
        assert_eq!(value["right_column"]["summary_top"], serde_json::json!({}));
        assert_eq!(value["right_column"]["groups"], serde_json::json!([]));
        assert_eq!(value["sails"], serde_json::json!([]));

        let back: CertificateRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);

        let full = parse("orc_certificate");
        let back: CertificateRecord =
            serde_json::from_str(&serde_json::to_string(&full).unwrap()).unwrap();
        assert_eq!(back, full);
    }

    #[test]
    fn output_keys_are_stable() {
        let r = parse("orc_certificate");
        let value = serde_json::to_value(&r).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "certificate_type",
                "boat_identity",
                "right_column",
                "boat_speeds",
                "time_allowances",
                "single_number_scoring",
                "boat_specs",
                "sails",
            ]
        );
    }
}
