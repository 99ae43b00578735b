use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateHeader {
    pub certificate_type: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoatIdentity {
    pub boat_name: String,
    pub sail_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelValue {
    pub label: String,
    pub value: String,
}

/// One labelled row of a wind-speed or scoring table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub label: String,
    pub values: Vec<String>,
}

/// A titled block such as "BOAT" or "HULL".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub title: String,
    pub items: Vec<LabelValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RightColumn {
    /// Rating numbers keyed by label, in page order.
    pub summary_top: IndexMap<String, String>,
    pub groups: Vec<GroupRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSpeedTable {
    pub wind_speeds: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAllowances {
    pub wind_speeds: Vec<String>,
    pub rows: Vec<TableRow>,
    pub selected_courses: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringTable {
    pub caption: String,
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub section_title: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SailGroup {
    pub sail_type: String,
    /// Column title -> value, one map per sail.
    pub entries: Vec<IndexMap<String, String>>,
}
