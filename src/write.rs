//! Write query results to CSV or JSON.
//!
//! Each output record is one close approach joined with its NEO. The two
//! formats carry the same data:
//! - `datetime_utc` formatted by [`datetime_to_str`]
//! - an absent NEO name is written as an empty string
//! - an unknown diameter is an empty CSV field and a JSON `null`
//! - the hazardous flag is `true`/`false`
//!
//! Approaches without a NEO are written with their link designation and the
//! same defaults a NEO with no other data would get.

use crate::database::ApproachView;
use crate::error::{NeoError, Result};
use crate::helpers::datetime_to_str;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

const CSV_HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

#[derive(Debug, Serialize)]
struct NeoFields<'a> {
    designation: &'a str,
    name: &'a str,
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

impl<'a> NeoFields<'a> {
    fn from_view(view: &ApproachView<'a>) -> Self {
        match view.neo {
            Some(neo) => NeoFields {
                designation: &neo.designation,
                name: neo.name.as_deref().unwrap_or(""),
                diameter_km: neo.diameter_km(),
                potentially_hazardous: neo.hazardous,
            },
            None => NeoFields {
                designation: &view.approach.designation,
                name: "",
                diameter_km: None,
                potentially_hazardous: false,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    designation: &'a str,
    name: &'a str,
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

#[derive(Debug, Serialize)]
struct JsonApproach<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    neo: NeoFields<'a>,
}

/// Writes the results to a CSV file with a header row. Returns the number of rows written.
///
/// # Errors
/// [`NeoError::File`] if the destination cannot be created or written.
pub fn write_to_csv<'a, I>(results: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = ApproachView<'a>>,
{
    let file = File::create(path).map_err(|e| NeoError::file(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(BufWriter::new(file));

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| csv_write_error(path, e))?;

    let mut count = 0usize;
    for view in results {
        let neo = NeoFields::from_view(&view);
        let row = CsvRow {
            datetime_utc: datetime_to_str(&view.approach.time),
            distance_au: view.approach.distance,
            velocity_km_s: view.approach.velocity,
            designation: neo.designation,
            name: neo.name,
            diameter_km: neo.diameter_km,
            potentially_hazardous: neo.potentially_hazardous,
        };
        writer
            .serialize(row)
            .map_err(|e| csv_write_error(path, e))?;
        count += 1;
    }
    writer.flush().map_err(|e| NeoError::file(path, e))?;

    info!("Wrote {} close approaches to '{}'", count, path.display());
    Ok(count)
}

/// Writes the results to a JSON file as a pretty-printed array. Returns the number of elements written.
///
/// # Errors
/// [`NeoError::File`] if the destination cannot be created or written.
pub fn write_to_json<'a, I>(results: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = ApproachView<'a>>,
{
    let records: Vec<JsonApproach<'a>> = results
        .into_iter()
        .map(|view| JsonApproach {
            datetime_utc: datetime_to_str(&view.approach.time),
            distance_au: view.approach.distance,
            velocity_km_s: view.approach.velocity,
            neo: NeoFields::from_view(&view),
        })
        .collect();

    let file = File::create(path).map_err(|e| NeoError::file(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records).map_err(|e| {
        if e.is_io() {
            NeoError::file(path, e.into())
        } else {
            NeoError::Json(e)
        }
    })?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| NeoError::file(path, e))?;

    info!(
        "Wrote {} close approaches to '{}'",
        records.len(),
        path.display()
    );
    Ok(records.len())
}

/// Writes the results in the format named by the file extension (`.csv` or `.json`).
///
/// # Errors
/// [`NeoError::UnsupportedOutput`] for any other extension, otherwise as the chosen writer.
pub fn write_results<'a, I>(results: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = ApproachView<'a>>,
{
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => write_to_csv(results, path),
        Some("json") => write_to_json(results, path),
        _ => Err(NeoError::UnsupportedOutput(path.to_path_buf())),
    }
}

fn csv_write_error(path: &Path, err: csv::Error) -> NeoError {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(e) => NeoError::file(path, e),
            other => NeoError::malformed(path, None, format!("{other:?}")),
        }
    } else {
        NeoError::Csv(err)
    }
}
