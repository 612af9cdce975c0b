use std::error::Error;

use clap::Args;
use serde::Serialize;

use super::render::print_json;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit crate versions as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    engine: &'static str,
    report_schema: String,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let schema = breach_core::SchemaVersion::default();
    print_json(&VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        engine: "exact-hypergeometric",
        report_schema: format!("{}.{}.{}", schema.major, schema.minor, schema.patch),
    })
}
