//! Outcome records produced by exact and sampled accesses.

use serde::{Deserialize, Serialize};

/// One possible result of a single access.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Agendas stolen by this access.
    pub agendas_stolen: u32,
    /// Probability of this result given the deck and clicks the access saw.
    pub probability: f64,
    /// Clicks consumed when this result happens.
    pub clicks_spent: u32,
}

impl Outcome {
    /// Creates an outcome costing a single click.
    pub fn new(agendas_stolen: u32, probability: f64) -> Self {
        Self::with_cost(agendas_stolen, probability, 1)
    }

    /// Creates an outcome with an explicit click cost.
    pub fn with_cost(agendas_stolen: u32, probability: f64, clicks_spent: u32) -> Self {
        Self {
            agendas_stolen,
            probability,
            clicks_spent,
        }
    }

    /// The only outcome of an access against a dry deck or with no clicks left.
    pub fn idle() -> Self {
        Self::with_cost(0, 1.0, 0)
    }
}

/// A sampled access result, used by the Monte Carlo cross-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    /// Agendas stolen in this trial.
    pub agendas_stolen: u32,
    /// Clicks consumed in this trial.
    pub clicks_spent: u32,
}

impl Draw {
    /// Sampled counterpart of [`Outcome::idle`].
    pub fn idle() -> Self {
        Self {
            agendas_stolen: 0,
            clicks_spent: 0,
        }
    }
}
