use super::neo::NearEarthObject;
use super::serde_helpers::{diameter_or_unknown, empty_as_none, hazard_marker};
use serde::Deserialize;

/// Header names accepted for the designation column, in order of preference.
pub const DESIGNATION_COLUMNS: [&str; 2] = ["pdes", "designation"];

/// One row of the NEO catalogue CSV. Columns not named here are ignored.
///
/// `pdes` and `designation` may both be present; the first non-empty one in
/// that order is the designation. `pha` and `hazardous` resolve the same way.
#[derive(Debug, Deserialize)]
pub struct NeoRecord {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub pdes: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub designation: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,

    #[serde(default = "unknown_diameter", deserialize_with = "diameter_or_unknown")]
    pub diameter: f64,

    #[serde(default, deserialize_with = "hazard_marker")]
    pub pha: Option<bool>,

    #[serde(default, deserialize_with = "hazard_marker")]
    pub hazardous: Option<bool>,
}

fn unknown_diameter() -> f64 {
    super::neo::DIAMETER_UNKNOWN
}

impl NeoRecord {
    /// Builds the NEO, or `None` when the row has no designation.
    pub fn into_neo(self) -> Option<NearEarthObject> {
        let designation = self.pdes.or(self.designation)?;
        let hazardous = self.pha.or(self.hazardous).unwrap_or(false);
        Some(NearEarthObject::new(
            designation,
            self.name,
            self.diameter,
            hazardous,
        ))
    }
}

/// The close-approach document: column names plus positionally aligned rows.
#[derive(Debug, Deserialize)]
pub struct CadDocument {
    pub fields: Vec<String>,
    pub data: Vec<Vec<serde_json::Value>>,
}
