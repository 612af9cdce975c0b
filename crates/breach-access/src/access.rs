//! The access trait and the outcome helpers shared by every probe.

use breach_core::{BreachError, DeckState, Hypergeometric, TrialRng};

use crate::outcome::{Draw, Outcome};

/// An access that looks at cards in R&D and may steal agendas.
///
/// Implementations hold only their fixed parameters. Given a deck and the
/// clicks still available, [`Access::access`] returns mutually exclusive
/// outcomes whose probabilities sum to one.
pub trait Access: Send + Sync {
    /// Stable name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Enumerates every outcome of this access.
    fn access(
        &self,
        deck: &DeckState,
        clicks: u32,
        hypergeometric: &dyn Hypergeometric,
    ) -> Result<Vec<Outcome>, BreachError>;

    /// Samples one outcome of this access.
    fn sample(
        &self,
        deck: &DeckState,
        clicks: u32,
        rng: &mut TrialRng,
    ) -> Result<Draw, BreachError>;
}

impl<A: Access + ?Sized> Access for Box<A> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn access(
        &self,
        deck: &DeckState,
        clicks: u32,
        hypergeometric: &dyn Hypergeometric,
    ) -> Result<Vec<Outcome>, BreachError> {
        (**self).access(deck, clicks, hypergeometric)
    }

    fn sample(
        &self,
        deck: &DeckState,
        clicks: u32,
        rng: &mut TrialRng,
    ) -> Result<Draw, BreachError> {
        (**self).sample(deck, clicks, rng)
    }
}

/// True when the access can only come back empty handed.
pub(crate) fn is_idle(deck: &DeckState, clicks: u32) -> bool {
    deck.is_dry() || clicks == 0
}

/// Outcomes for `0..=bound` agendas seen in `width` cards.
///
/// Every count below `bound` uses the point probability; `bound` itself takes
/// the tail so the mass of larger hauls folds into the last bucket.
pub(crate) fn capped_outcomes<C>(
    deck: &DeckState,
    width: u32,
    bound: u32,
    cost: C,
    hypergeometric: &dyn Hypergeometric,
) -> Result<Vec<Outcome>, BreachError>
where
    C: Fn(u32) -> u32,
{
    let draws = width.min(deck.cards_left());
    let agendas = deck.agendas_left();
    let cards = deck.cards_left();
    (0..=bound)
        .map(|stolen| -> Result<Outcome, BreachError> {
            let probability = if stolen == bound {
                hypergeometric.tail_probability(stolen, agendas, draws, cards)?
            } else {
                hypergeometric.point_probability(stolen, agendas, draws, cards)?
            };
            Ok(Outcome::with_cost(stolen, probability, cost(stolen)))
        })
        .collect()
}
