use std::error::Error;
use std::path::PathBuf;

use breach_access::{evaluate, load_scenario, Access};
use clap::Args;
use tracing::info;

use super::render::{print_json, render_report};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// YAML scenario describing the deck, clicks and accesses.
    #[arg(long)]
    pub scenario: PathBuf,
    /// Emit the report as canonical JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let scenario = load_scenario(&args.scenario)?;
    let report = evaluate(&scenario)?;
    info!(
        scenario = %args.scenario.display(),
        branches = report.branches,
        "evaluated scenario"
    );
    if args.json {
        return print_json(&report);
    }

    let names: Vec<&str> = report.operations.iter().map(|op| op.name()).collect();
    println!("{} with {} clicks", report.deck, report.clicks);
    println!("Accesses: {}", names.join(", "));
    println!("{}", render_report(&report)?);
    Ok(())
}
