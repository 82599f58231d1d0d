use clap::Parser;
use neo_explorer::{
    database::NeoDatabase,
    error::Result,
    extract::{load_approaches, load_neos},
    filters::{create_filters, limit},
    logging::init_logging,
    ui::{
        cli::{Args, Command, InspectArgs, QueryArgs},
        output::{print_approaches, print_load_summary, print_neo, print_saved},
    },
    write::write_results,
};
use std::process;

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<()> {
    let neos = load_neos(&args.neofile)?;
    let approaches = load_approaches(&args.cadfile)?;
    let db = NeoDatabase::new(neos, approaches);
    print_load_summary(&db);

    match &args.command {
        Command::Inspect(inspect) => run_inspect(&db, inspect),
        Command::Query(query) => run_query(&db, query)?,
    }
    Ok(())
}

fn run_inspect(db: &NeoDatabase, args: &InspectArgs) {
    let neo = match (&args.pdes, &args.name) {
        (Some(pdes), _) => db.get_neo_by_designation(pdes),
        (None, Some(name)) => db.get_neo_by_name(name),
        (None, None) => None,
    };
    print_neo(db, neo, args.verbose);
}

fn run_query(db: &NeoDatabase, args: &QueryArgs) -> Result<()> {
    let filters = create_filters(&args.criteria());
    let results = limit(db.query(&filters), Some(args.limit));

    match &args.outfile {
        Some(path) => {
            let count = write_results(results, path)?;
            print_saved(count, path);
        }
        None => {
            print_approaches(results);
        }
    }
    Ok(())
}
