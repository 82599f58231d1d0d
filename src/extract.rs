//! Extract NEO and close-approach records from their input files.
//!
//! `load_neos` reads the NEO catalogue CSV into `NearEarthObject`s and
//! `load_approaches` reads the close-approach JSON document into
//! `CloseApproach`es. Both abort on the first malformed record: a partial
//! collection would silently corrupt the designation join later on.

use crate::error::{NeoError, Result};
use crate::helpers::cd_to_datetime;
use crate::models::records::{CadDocument, DESIGNATION_COLUMNS, NeoRecord};
use crate::models::{CloseApproach, NearEarthObject};
use serde_json::Value;
use std::{collections::HashMap, fs::File, io::BufReader, path::Path};
use tracing::{debug, info};

const DESIGNATION_KEYS: [&str; 2] = ["des", "designation"];
const TIME_KEYS: [&str; 2] = ["cd", "time"];
const DISTANCE_KEYS: [&str; 2] = ["dist", "distance"];
const VELOCITY_KEYS: [&str; 2] = ["v_rel", "velocity"];

/// Reads near-Earth objects from a CSV file, in file order.
///
/// # Errors
/// - [`NeoError::File`] if the file cannot be opened or read
/// - [`NeoError::MalformedRecord`] if the header has no designation column,
///   or a row lacks a designation or does not fit the header
pub fn load_neos(path: &Path) -> Result<Vec<NearEarthObject>> {
    let file = File::open(path).map_err(|e| NeoError::file(path, e))?;
    debug!("Reading near-Earth objects from '{}'", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| csv_error(path, None, e))?;
    if !headers.iter().any(|h| DESIGNATION_COLUMNS.contains(&h)) {
        return Err(NeoError::malformed(
            path,
            None,
            format!("no designation column (expected one of {DESIGNATION_COLUMNS:?})"),
        ));
    }

    let mut neos = Vec::new();
    for (idx, result) in reader.deserialize::<NeoRecord>().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|e| csv_error(path, Some(row), e))?;
        let neo = record
            .into_neo()
            .ok_or_else(|| NeoError::malformed(path, Some(row), "empty designation"))?;
        neos.push(neo);
    }

    info!(
        "Loaded {} near-Earth objects from '{}'",
        neos.len(),
        path.display()
    );
    Ok(neos)
}

/// Reads close approaches from a JSON document with `fields` and `data` arrays.
///
/// Every `data` row is zipped against `fields`; the designation and
/// calendar-date columns are required, distance and velocity default to 0.0.
/// Approaches are returned unlinked, in document order.
///
/// # Errors
/// - [`NeoError::File`] if the file cannot be opened or read
/// - [`NeoError::MalformedRecord`] if `fields`/`data` are missing, a row's
///   arity differs from `fields`, or a required value does not parse
pub fn load_approaches(path: &Path) -> Result<Vec<CloseApproach>> {
    let file = File::open(path).map_err(|e| NeoError::file(path, e))?;
    debug!("Reading close approaches from '{}'", path.display());

    let document: CadDocument = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            NeoError::file(path, e.into())
        } else {
            NeoError::malformed(path, None, format!("invalid close-approach document: {e}"))
        }
    })?;

    let mut approaches = Vec::with_capacity(document.data.len());
    for (idx, row) in document.data.iter().enumerate() {
        let record_no = idx + 1;
        if row.len() != document.fields.len() {
            return Err(NeoError::malformed(
                path,
                Some(record_no),
                format!(
                    "expected {} values to match `fields`, found {}",
                    document.fields.len(),
                    row.len()
                ),
            ));
        }

        let record: HashMap<&str, &Value> = document
            .fields
            .iter()
            .map(String::as_str)
            .zip(row.iter())
            .collect();

        let approach = approach_from_record(&record)
            .map_err(|message| NeoError::malformed(path, Some(record_no), message))?;
        approaches.push(approach);
    }

    info!(
        "Loaded {} close approaches from '{}'",
        approaches.len(),
        path.display()
    );
    Ok(approaches)
}

/// Builds a `CloseApproach` from one named-value record.
///
/// Unrecognized keys are ignored.
fn approach_from_record(
    record: &HashMap<&str, &Value>,
) -> std::result::Result<CloseApproach, String> {
    let designation = lookup(record, &DESIGNATION_KEYS)
        .and_then(cell_text)
        .ok_or_else(|| String::from("missing designation"))?;

    let calendar_date = lookup(record, &TIME_KEYS)
        .and_then(cell_text)
        .ok_or_else(|| String::from("missing close-approach time"))?;
    let time = cd_to_datetime(&calendar_date)
        .ok_or_else(|| format!("invalid close-approach time '{calendar_date}'"))?;

    let distance = cell_f64(lookup(record, &DISTANCE_KEYS), "distance")?;
    let velocity = cell_f64(lookup(record, &VELOCITY_KEYS), "velocity")?;

    Ok(CloseApproach::new(designation, time, distance, velocity))
}

fn lookup<'a>(record: &HashMap<&str, &'a Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| record.get(k).copied())
}

/// Text of a cell; `None` for null or blank cells.
fn cell_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Numeric value of a cell, 0.0 when the cell is absent, null or blank.
fn cell_f64(value: Option<&Value>, what: &str) -> std::result::Result<f64, String> {
    let Some(value) = value else {
        return Ok(0.0);
    };
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| format!("{what} '{n}' is out of range")),
        _ => match cell_text(value) {
            None => Ok(0.0),
            Some(text) => text
                .parse::<f64>()
                .map_err(|_| format!("invalid {what} '{text}'")),
        },
    }
}

fn csv_error(path: &Path, row: Option<usize>, err: csv::Error) -> NeoError {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(e) => NeoError::file(path, e),
            other => NeoError::malformed(path, row, format!("{other:?}")),
        }
    } else {
        NeoError::malformed(path, row, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_neos_coerces_fields() {
        let file = temp_file(
            "id,pdes,name,pha,diameter\n\
             a0000433,433,Eros,N,16.84\n\
             a0001566,1566,Icarus,Y,1.0\n\
             bK19A00A,2019 AA,,,\n\
             bK19B00B,2019 BB,,Y,n/a\n",
        );

        let neos = load_neos(file.path()).unwrap();
        assert_eq!(neos.len(), 4);

        assert_eq!(neos[0].designation, "433");
        assert_eq!(neos[0].name.as_deref(), Some("Eros"));
        assert_eq!(neos[0].diameter, 16.84);
        assert!(!neos[0].hazardous);

        assert_eq!(neos[1].designation, "1566");
        assert!(neos[1].hazardous);

        assert_eq!(neos[2].designation, "2019 AA");
        assert!(neos[2].name.is_none());
        assert!(neos[2].diameter.is_nan());
        assert!(!neos[2].hazardous);

        assert!(neos[3].diameter.is_nan());
        assert!(neos[3].hazardous);
    }

    #[test]
    fn test_load_neos_accepts_designation_header() {
        let file = temp_file("designation,name,diameter,hazardous\n433,Eros,16.84,N\n");
        let neos = load_neos(file.path()).unwrap();
        assert_eq!(neos[0].designation, "433");
        assert_eq!(neos[0].name.as_deref(), Some("Eros"));
    }

    #[test]
    fn test_load_neos_prefers_pdes_over_designation() {
        let file = temp_file(
            "designation,pdes,name,diameter,pha,hazardous\n\
             433,433,Eros,16.84,N,Y\n\
             (1566),1566,Icarus,1.0,,Y\n\
             2019 AA,,,,,\n",
        );

        let neos = load_neos(file.path()).unwrap();
        assert_eq!(neos.len(), 3);
        assert_eq!(neos[0].designation, "433");
        assert!(!neos[0].hazardous);
        assert_eq!(neos[1].designation, "1566");
        assert!(neos[1].hazardous);
        assert_eq!(neos[2].designation, "2019 AA");
        assert!(!neos[2].hazardous);
    }

    #[test]
    fn test_load_neos_missing_designation_column() {
        let file = temp_file("name,diameter,pha\nEros,16.84,N\n");
        let err = load_neos(file.path()).unwrap_err();
        assert!(matches!(err, NeoError::MalformedRecord { record: None, .. }));
    }

    #[test]
    fn test_load_neos_header_only_without_designation_column() {
        let file = temp_file("name,diameter,pha\n");
        let err = load_neos(file.path()).unwrap_err();
        assert!(matches!(err, NeoError::MalformedRecord { record: None, .. }));
    }

    #[test]
    fn test_load_neos_header_only() {
        let file = temp_file("pdes,name,diameter,pha\n");
        assert!(load_neos(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_neos_ragged_row_aborts() {
        let file = temp_file("pdes,name,diameter,pha\n433,Eros,16.84,N\n1566,Icarus\n");
        let err = load_neos(file.path()).unwrap_err();
        assert!(matches!(err, NeoError::MalformedRecord { record: Some(2), .. }));
    }

    #[test]
    fn test_load_neos_empty_designation_aborts() {
        let file = temp_file("pdes,name,diameter,pha\n433,Eros,16.84,N\n,Nameless,1.0,N\n");
        let err = load_neos(file.path()).unwrap_err();
        assert!(matches!(err, NeoError::MalformedRecord { record: Some(2), .. }));
    }

    #[test]
    fn test_load_neos_missing_file() {
        let err = load_neos(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, NeoError::File { .. }));
    }

    #[test]
    fn test_load_approaches_zips_fields() {
        let file = temp_file(
            r#"{
                "signature": {"version": "1.1"},
                "count": "2",
                "fields": ["des", "orbit_id", "cd", "dist", "v_rel"],
                "data": [
                    ["433", "659", "2020-01-01 06:00", "0.15", "5.0"],
                    ["2019 AA", "3", "1900-Jan-01 00:11", 0.02, 12.5]
                ]
            }"#,
        );

        let approaches = load_approaches(file.path()).unwrap();
        assert_eq!(approaches.len(), 2);

        assert_eq!(approaches[0].designation, "433");
        assert_eq!(approaches[0].time_str(), "2020-01-01 06:00");
        assert_eq!(approaches[0].distance, 0.15);
        assert_eq!(approaches[0].velocity, 5.0);
        assert!(approaches[0].neo().is_none());

        assert_eq!(approaches[1].designation, "2019 AA");
        assert_eq!(approaches[1].time_str(), "1900-01-01 00:11");
        assert_eq!(approaches[1].distance, 0.02);
        assert_eq!(approaches[1].velocity, 12.5);
    }

    #[test]
    fn test_load_approaches_defaults_missing_measurements() {
        let file = temp_file(
            r#"{"fields": ["des", "cd", "dist"], "data": [["433", "2020-01-01 06:00", null]]}"#,
        );
        let approaches = load_approaches(file.path()).unwrap();
        assert_eq!(approaches[0].distance, 0.0);
        assert_eq!(approaches[0].velocity, 0.0);
    }

    #[test]
    fn test_load_approaches_arity_mismatch() {
        let file = temp_file(
            r#"{"fields": ["des", "cd", "dist", "v_rel"], "data": [["433", "2020-01-01 06:00"]]}"#,
        );
        let err = load_approaches(file.path()).unwrap_err();
        assert!(matches!(err, NeoError::MalformedRecord { record: Some(1), .. }));
    }

    #[test]
    fn test_load_approaches_missing_data_key() {
        let file = temp_file(r#"{"fields": ["des", "cd"]}"#);
        let err = load_approaches(file.path()).unwrap_err();
        assert!(matches!(err, NeoError::MalformedRecord { record: None, .. }));
    }

    #[test]
    fn test_load_approaches_bad_time_aborts() {
        let file = temp_file(
            r#"{"fields": ["des", "cd"], "data": [["433", "2020-01-01 06:00"], ["433", "yesterday"]]}"#,
        );
        let err = load_approaches(file.path()).unwrap_err();
        assert!(matches!(err, NeoError::MalformedRecord { record: Some(2), .. }));
    }

    #[test]
    fn test_load_approaches_bad_distance_aborts() {
        let file = temp_file(
            r#"{"fields": ["des", "cd", "dist"], "data": [["433", "2020-01-01 06:00", "far"]]}"#,
        );
        let err = load_approaches(file.path()).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_load_approaches_missing_file() {
        let err = load_approaches(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, NeoError::File { .. }));
    }
}
