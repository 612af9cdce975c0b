//! Report assembly for evaluated and sampled scenarios.

use std::collections::BTreeMap;

use breach_core::{BreachError, DeckState, RunProvenance};
use serde::{Deserialize, Serialize};

use crate::compose::{aggregate, enumerate_branches};
use crate::histogram::Histogram;
use crate::montecarlo::{simulate, SimulationOpts};
use crate::probes::AccessOp;
use crate::scenario::Scenario;

/// Exact evaluation of a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Schema and scenario identity.
    pub provenance: RunProvenance,
    /// Starting deck.
    pub deck: DeckState,
    /// Clicks available.
    pub clicks: u32,
    /// Accesses applied in order.
    pub operations: Vec<AccessOp>,
    /// Number of terminal branches enumerated.
    pub branches: usize,
    /// Probability per total of stolen agendas.
    pub histogram: Histogram,
    /// Probability of stealing at least N agendas, keyed by N.
    pub at_least: BTreeMap<u32, f64>,
    /// Expected number of stolen agendas.
    pub expected_successes: f64,
}

/// Exact histogram next to a sampled estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Schema, scenario identity and master seed.
    pub provenance: RunProvenance,
    /// Number of sampled trials.
    pub trials: u64,
    /// Exact histogram.
    pub exact: Histogram,
    /// Sampled estimate.
    pub estimate: Histogram,
    /// Largest absolute bucket difference between the two.
    pub max_abs_deviation: f64,
}

/// Composes the scenario's accesses and summarises the result.
pub fn evaluate(scenario: &Scenario) -> Result<RoundReport, BreachError> {
    scenario.validate()?;
    let deck = scenario.deck()?;
    let branches = enumerate_branches(&deck, &scenario.operations, scenario.clicks)?;
    let histogram = aggregate(&branches);
    let at_least = scenario
        .report
        .thresholds
        .iter()
        .map(|&threshold| (threshold, histogram.at_least(threshold)))
        .collect();
    Ok(RoundReport {
        provenance: RunProvenance::new(scenario.scenario_hash()?),
        deck,
        clicks: scenario.clicks,
        operations: scenario.operations.clone(),
        branches: branches.len(),
        expected_successes: histogram.expected_successes(),
        histogram,
        at_least,
    })
}

/// Samples the scenario and compares the estimate with the exact histogram.
pub fn cross_check(
    scenario: &Scenario,
    opts: &SimulationOpts,
) -> Result<SimulationReport, BreachError> {
    let exact = evaluate(scenario)?.histogram;
    let deck = scenario.deck()?;
    let estimate = simulate(&deck, &scenario.operations, scenario.clicks, opts)?;
    Ok(SimulationReport {
        provenance: RunProvenance::new(scenario.scenario_hash()?)
            .with_seed(opts.seed),
        trials: opts.trials,
        max_abs_deviation: exact.max_abs_deviation(&estimate),
        exact,
        estimate,
    })
}
