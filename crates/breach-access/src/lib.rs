#![deny(missing_docs)]

//! Access probes and outcome composition for R&D breach odds.
//!
//! A [`DeckState`] and a click budget go in, an ordered list of accesses is
//! applied, and a [`Histogram`] over the total number of stolen agendas comes
//! out. Probabilities are exact; [`simulate`] samples the same model for
//! cross-checking.
//!
//! [`DeckState`]: breach_core::DeckState

pub mod access;
pub mod compose;
pub mod histogram;
pub mod montecarlo;
pub mod outcome;
pub mod probes;
pub mod report;
pub mod scenario;

pub use access::Access;
pub use compose::{
    aggregate, compose, compose_with, enumerate_branches, enumerate_branches_with, Branch,
};
pub use histogram::Histogram;
pub use montecarlo::{simulate, SimulationOpts};
pub use outcome::{Draw, Outcome};
pub use probes::{AccessOp, Breach, DeepDive, Khusyuk, DEEP_DIVE_MAX_STEALS, DEEP_DIVE_WIDTH};
pub use report::{cross_check, evaluate, RoundReport, SimulationReport};
pub use scenario::{load_scenario, DeckSpec, ReportSpec, Scenario};
