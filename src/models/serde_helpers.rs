//! Custom serde deserializers for loosely-typed NEO input columns.
//!
//! The NEO catalogue leaves many cells empty. These deserializers apply the
//! coercion rules while the CSV row is parsed, so a missing optional value
//! never surfaces as a parse error.

use super::neo::DIAMETER_UNKNOWN;
use serde::{Deserialize, Deserializer};

/// Deserializes a text cell, mapping an empty (or blank) cell to `None`.
///
/// # Examples
/// ```text
/// Input:  "Eros"  -> Some("Eros")
/// Input:  ""      -> None
/// ```
pub fn empty_as_none<'a, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'a>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Deserializes a diameter in kilometers.
///
/// Empty or non-numeric cells become [`DIAMETER_UNKNOWN`] instead of failing.
pub fn diameter_or_unknown<'a, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'a>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(DIAMETER_UNKNOWN))
}

/// Deserializes the potentially-hazardous marker.
///
/// Only the literal `Y` means hazardous; any other text is `false`. An empty
/// cell gives `None` so another marker column can take its place.
pub fn hazard_marker<'a, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'a>,
{
    let value = empty_as_none(deserializer)?;
    Ok(value.map(|s| s == "Y"))
}
