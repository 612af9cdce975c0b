use std::error::Error;

use clap::{ArgAction, Parser, Subcommand};
use commands::{
    run::{self, RunArgs},
    simulate::{self, SimulateArgs},
    super_round::{self, SuperRoundArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "breach-sim", about = "Exact agenda steal odds for R&D access sequences")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Khusyuk followed by two Deep Dives with four clicks.
    SuperRound(SuperRoundArgs),
    /// Evaluate a YAML scenario.
    Run(RunArgs),
    /// Compare a scenario's exact odds with a seeded Monte Carlo estimate.
    Simulate(SimulateArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::SuperRound(args) => super_round::run(&args),
        Command::Run(args) => run::run(&args),
        Command::Simulate(args) => simulate::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("BREACH_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
