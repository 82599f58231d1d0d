//! Command-line interface module.
//!
//! This module handles all CLI argument parsing for the NEO explorer and the
//! conversion of query arguments into [`QueryCriteria`].

use crate::filters::QueryCriteria;
use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Default location of the NEO catalogue CSV.
const NEO_FILE: &str = "data/neos.csv";

/// Default location of the close-approach JSON document.
const CAD_FILE: &str = "data/cad.json";

/// CLI arguments for the near-Earth object explorer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the CSV file of near-Earth objects
    #[arg(long = "neofile", default_value = NEO_FILE, global = true)]
    pub neofile: PathBuf,

    /// Path to the JSON file of close approaches
    #[arg(long = "cadfile", default_value = CAD_FILE, global = true)]
    pub cadfile: PathBuf,

    /// Default log level for diagnostics on stderr (overridden by RUST_LOG)
    #[arg(long = "log-level", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect a single near-Earth object
    Inspect(InspectArgs),
    /// Query close approaches and print or save the matches
    Query(QueryArgs),
}

#[derive(ClapArgs, Debug)]
#[command(group = clap::ArgGroup::new("target").required(true))]
pub struct InspectArgs {
    /// Primary designation of the NEO, e.g. "433"
    #[arg(short = 'p', long = "pdes", group = "target")]
    pub pdes: Option<String>,

    /// IAU name of the NEO, e.g. "Eros"
    #[arg(short = 'n', long = "name", group = "target")]
    pub name: Option<String>,

    /// Also print every known close approach of the NEO
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(ClapArgs, Debug)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short = 'd', long = "date", conflicts_with_all = ["start_date", "end_date"])]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short = 's', long = "start-date")]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short = 'e', long = "end-date")]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance in au
    #[arg(long = "min-distance")]
    pub distance_min: Option<f64>,

    /// Maximum approach distance in au
    #[arg(long = "max-distance")]
    pub distance_max: Option<f64>,

    /// Minimum relative velocity in km/s
    #[arg(long = "min-velocity")]
    pub velocity_min: Option<f64>,

    /// Maximum relative velocity in km/s
    #[arg(long = "max-velocity")]
    pub velocity_max: Option<f64>,

    /// Minimum NEO diameter in km
    #[arg(long = "min-diameter")]
    pub diameter_min: Option<f64>,

    /// Maximum NEO diameter in km
    #[arg(long = "max-diameter")]
    pub diameter_max: Option<f64>,

    /// Only potentially hazardous NEOs
    #[arg(long = "hazardous", conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only NEOs that are not potentially hazardous
    #[arg(long = "not-hazardous")]
    pub not_hazardous: bool,

    /// Maximum number of results (0 for no limit)
    #[arg(short = 'l', long = "limit", default_value = "10")]
    pub limit: usize,

    /// Save results to this .csv or .json file instead of printing them
    #[arg(short = 'o', long = "outfile")]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    pub fn criteria(&self) -> QueryCriteria {
        let hazardous = match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };

        QueryCriteria {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.distance_min,
            distance_max: self.distance_max,
            velocity_min: self.velocity_min,
            velocity_max: self.velocity_max,
            diameter_min: self.diameter_min,
            diameter_max: self.diameter_max,
            hazardous,
        }
    }
}
