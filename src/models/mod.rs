//! Data models and serialization helpers.
//!
//! This module contains the in-memory NEO and close-approach entities, the raw
//! record shapes read from the CSV and JSON input files, and the custom
//! deserializers that coerce loosely-typed CSV cells.
pub mod neo;
pub mod records;
pub mod serde_helpers;

pub use neo::{ApproachId, CloseApproach, DIAMETER_UNKNOWN, NearEarthObject, NeoId};
