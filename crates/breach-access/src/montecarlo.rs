//! Seeded sampling of the same access model, used to cross-check [`compose`].
//!
//! [`compose`]: crate::compose::compose

use std::collections::BTreeMap;

use breach_core::{BreachError, DeckState, ErrorInfo, TrialRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::access::Access;
use crate::histogram::Histogram;

/// Sampling knobs for [`simulate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOpts {
    /// Number of independent trials.
    #[serde(default = "SimulationOpts::default_trials")]
    pub trials: u64,
    /// Master seed; trial `i` uses substream `i`.
    #[serde(default = "SimulationOpts::default_seed")]
    pub seed: u64,
}

impl SimulationOpts {
    const fn default_trials() -> u64 {
        20_000
    }

    const fn default_seed() -> u64 {
        0x0B5E_55ED_C0DE_D1CE
    }
}

impl Default for SimulationOpts {
    fn default() -> Self {
        Self {
            trials: Self::default_trials(),
            seed: Self::default_seed(),
        }
    }
}

/// Estimates the stolen-agenda histogram by sampling `opts.trials` runs.
pub fn simulate<A: Access>(
    deck: &DeckState,
    accesses: &[A],
    clicks: u32,
    opts: &SimulationOpts,
) -> Result<Histogram, BreachError> {
    if opts.trials == 0 {
        return Err(BreachError::config(
            "zero-trials",
            "simulation needs at least one trial",
        ));
    }
    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    for trial in 0..opts.trials {
        let mut rng = TrialRng::for_trial(opts.seed, trial);
        let stolen = run_trial(deck, accesses, clicks, &mut rng)?;
        *counts.entry(stolen).or_insert(0) += 1;
    }
    debug!(
        %deck,
        clicks,
        trials = opts.trials,
        seed = opts.seed,
        "simulated access sequence"
    );
    Ok(Histogram::from_counts(&counts, opts.trials))
}

fn run_trial<A: Access>(
    deck: &DeckState,
    accesses: &[A],
    clicks: u32,
    rng: &mut TrialRng,
) -> Result<u32, BreachError> {
    let mut deck = *deck;
    let mut clicks = clicks;
    let mut stolen = 0;
    for (step, access) in accesses.iter().enumerate() {
        let draw = access.sample(&deck, clicks, rng)?;
        clicks = clicks
            .checked_sub(draw.clicks_spent)
            .ok_or_else(|| {
                BreachError::BudgetUnderflow(
                    ErrorInfo::new("clicks-overspent", "sampled access overspent its clicks")
                        .with_context("access", access.name())
                        .with_context("step", step)
                        .with_context("clicks", clicks),
                )
            })?;
        deck = deck.steal(draw.agendas_stolen)?;
        stolen += draw.agendas_stolen;
    }
    Ok(stolen)
}
