use std::error::Error;
use std::path::PathBuf;

use breach_access::{cross_check, load_scenario, SimulationOpts};
use clap::Args;
use tracing::{info, warn};

use super::render::print_json;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// YAML scenario describing the deck, clicks and accesses.
    #[arg(long)]
    pub scenario: PathBuf,
    /// Number of sampled trials.
    #[arg(long, default_value_t = 20_000)]
    pub trials: u64,
    /// Master seed for the trial substreams.
    #[arg(long, default_value_t = 2024)]
    pub seed: u64,
    /// Largest bucket deviation tolerated before warning.
    #[arg(long, default_value_t = 0.02)]
    pub tolerance: f64,
}

pub fn run(args: &SimulateArgs) -> Result<(), Box<dyn Error>> {
    let scenario = load_scenario(&args.scenario)?;
    let opts = SimulationOpts {
        trials: args.trials,
        seed: args.seed,
    };
    let report = cross_check(&scenario, &opts)?;
    if report.max_abs_deviation > args.tolerance {
        warn!(
            deviation = report.max_abs_deviation,
            tolerance = args.tolerance,
            "sampled odds drift from the exact histogram"
        );
    } else {
        info!(deviation = report.max_abs_deviation, "sampled odds agree");
    }
    print_json(&report)
}
