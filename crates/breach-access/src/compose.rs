//! Branch enumeration over an ordered list of accesses.
//!
//! Every outcome of every access forks the run. A branch carries its own deck
//! and click count forward; when the list runs out it becomes a terminal
//! [`Branch`]. Terminal branches are folded into a [`Histogram`] by
//! [`aggregate`], which is kept separate so it can be checked on its own.

use breach_core::{BreachError, DeckState, ErrorInfo, ExactHypergeometric, Hypergeometric};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::access::Access;
use crate::histogram::Histogram;

/// Terminal branch of a composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// Agendas stolen along the branch.
    pub agendas_stolen: u32,
    /// Product of the outcome probabilities along the branch.
    pub probability: f64,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    deck: DeckState,
    next: usize,
    clicks: u32,
    stolen: u32,
    probability: f64,
}

/// Composes `accesses` against `deck` with `clicks` available.
pub fn compose<A: Access>(
    deck: &DeckState,
    accesses: &[A],
    clicks: u32,
) -> Result<Histogram, BreachError> {
    compose_with(deck, accesses, clicks, &ExactHypergeometric)
}

/// Like [`compose`], drawing probabilities from `hypergeometric`.
pub fn compose_with<A: Access>(
    deck: &DeckState,
    accesses: &[A],
    clicks: u32,
    hypergeometric: &dyn Hypergeometric,
) -> Result<Histogram, BreachError> {
    let branches = enumerate_branches_with(deck, accesses, clicks, hypergeometric)?;
    debug!(
        %deck,
        clicks,
        accesses = accesses.len(),
        branches = branches.len(),
        "composed access sequence"
    );
    Ok(aggregate(&branches))
}

/// Enumerates every terminal branch using exact probabilities.
pub fn enumerate_branches<A: Access>(
    deck: &DeckState,
    accesses: &[A],
    clicks: u32,
) -> Result<Vec<Branch>, BreachError> {
    enumerate_branches_with(deck, accesses, clicks, &ExactHypergeometric)
}

/// Enumerates every terminal branch, depth first and in outcome order.
pub fn enumerate_branches_with<A: Access>(
    deck: &DeckState,
    accesses: &[A],
    clicks: u32,
    hypergeometric: &dyn Hypergeometric,
) -> Result<Vec<Branch>, BreachError> {
    let mut stack = vec![Frame {
        deck: *deck,
        next: 0,
        clicks,
        stolen: 0,
        probability: 1.0,
    }];
    let mut branches = Vec::new();

    while let Some(frame) = stack.pop() {
        let Some(access) = accesses.get(frame.next) else {
            trace!(
                stolen = frame.stolen,
                probability = frame.probability,
                clicks = frame.clicks,
                "terminal branch"
            );
            branches.push(Branch {
                agendas_stolen: frame.stolen,
                probability: frame.probability,
            });
            continue;
        };
        let outcomes = access.access(&frame.deck, frame.clicks, hypergeometric)?;
        debug!(
            access = access.name(),
            step = frame.next,
            deck = %frame.deck,
            clicks = frame.clicks,
            outcomes = outcomes.len(),
            "expanding access"
        );
        // Pushed in reverse so the first outcome is expanded first.
        for outcome in outcomes.iter().rev() {
            let clicks = frame
                .clicks
                .checked_sub(outcome.clicks_spent)
                .ok_or_else(|| {
                    BreachError::BudgetUnderflow(
                        ErrorInfo::new("clicks-overspent", "access spent more clicks than remain")
                            .with_context("access", access.name())
                            .with_context("step", frame.next)
                            .with_context("clicks", frame.clicks)
                            .with_context("clicks_spent", outcome.clicks_spent),
                    )
                })?;
            stack.push(Frame {
                deck: frame.deck.steal(outcome.agendas_stolen)?,
                next: frame.next + 1,
                clicks,
                stolen: frame.stolen + outcome.agendas_stolen,
                probability: frame.probability * outcome.probability,
            });
        }
    }

    Ok(branches)
}

/// Sums branch probabilities per total of stolen agendas.
pub fn aggregate(branches: &[Branch]) -> Histogram {
    branches.iter().fold(Histogram::new(), |histogram, branch| {
        histogram.with_added(branch.agendas_stolen, branch.probability)
    })
}
