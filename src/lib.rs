//! Near-Earth object explorer.
//!
//! Loads near-Earth objects from a CSV catalogue and their close approaches
//! from a JSON document, links the two by designation, answers lookups and
//! filtered queries, and writes query results back to CSV or JSON.
//!
//! ```no_run
//! use neo_explorer::{database::NeoDatabase, extract, filters, write};
//! use std::path::Path;
//!
//! let neos = extract::load_neos(Path::new("data/neos.csv"))?;
//! let approaches = extract::load_approaches(Path::new("data/cad.json"))?;
//! let db = NeoDatabase::new(neos, approaches);
//!
//! let criteria = filters::QueryCriteria {
//!     hazardous: Some(true),
//!     ..Default::default()
//! };
//! let filters = filters::create_filters(&criteria);
//! let results = filters::limit(db.query(&filters), Some(10));
//! write::write_to_json(results, Path::new("hazardous.json"))?;
//! # Ok::<(), neo_explorer::error::NeoError>(())
//! ```

pub mod database;
pub mod error;
pub mod extract;
pub mod filters;
pub mod helpers;
pub mod logging;
pub mod models;
pub mod ui;
pub mod write;
