use std::error::Error;
use std::fmt::Write;

use breach_access::RoundReport;
use breach_core::to_canonical_json_bytes;
use serde::Serialize;

/// Prints `value` as canonical JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let json = to_canonical_json_bytes(value)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}

/// Console summary of an exact evaluation.
pub fn render_report(report: &RoundReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for (stolen, probability) in report.histogram.iter() {
        writeln!(
            out,
            "Chance to steal {stolen} agendas:\t\t{:.2}%",
            probability * 100.0
        )?;
    }
    writeln!(out, "=====================")?;
    for (threshold, probability) in &report.at_least {
        writeln!(
            out,
            "Probability to steal at least {threshold} agendas:\t\t{:.2}%",
            probability * 100.0
        )?;
    }
    write!(
        out,
        "Expected agendas stolen:\t\t{:.3}",
        report.expected_successes
    )?;
    Ok(out)
}
