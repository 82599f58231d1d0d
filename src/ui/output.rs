//! Console output for the NEO explorer.
//!
//! This module handles all stdout reporting, including:
//! - Load summary
//! - Inspected NEO (and optionally its close approaches)
//! - Query results

use crate::database::{ApproachView, NeoDatabase};
use crate::models::NearEarthObject;
use std::path::Path;

/// Prints how many objects and approaches were loaded.
pub fn print_load_summary(db: &NeoDatabase) {
    println!(
        "🔄 Loaded {} near-Earth objects and {} close approaches",
        db.neos().len(),
        db.approaches().len()
    );
}

/// Prints one NEO and, when `verbose`, each of its close approaches.
///
/// # Arguments
/// * `db` - The database the NEO was found in
/// * `neo` - The NEO to describe, or `None` when the lookup found nothing
/// * `verbose` - Whether to list the NEO's close approaches
pub fn print_neo(db: &NeoDatabase, neo: Option<&NearEarthObject>, verbose: bool) {
    let Some(neo) = neo else {
        println!("No matching NEOs exist in the database.");
        return;
    };

    println!("{neo}");
    if verbose {
        for view in db.approaches_of(neo) {
            println!("\t- {view}");
        }
    }
}

/// Prints query results one per line. Returns the number printed.
pub fn print_approaches<'a, I>(results: I) -> usize
where
    I: IntoIterator<Item = ApproachView<'a>>,
{
    let mut count = 0usize;
    for view in results {
        println!("{view}");
        count += 1;
    }
    if count == 0 {
        println!("✅ No close approaches match the query.");
    }
    count
}

/// Prints where query results were saved.
pub fn print_saved(count: usize, path: &Path) {
    println!("💾 Saved {} close approaches to '{}'", count, path.display());
}
