//! Immutable R&D deck state threaded through every access.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{BreachError, ErrorInfo};

/// Remaining cards and agendas in the deck being accessed.
///
/// Values are never mutated after construction. [`DeckState::steal`] hands
/// back a fresh state so every branch of a composition owns its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDeckState")]
pub struct DeckState {
    cards_left: u32,
    agendas_left: u32,
}

#[derive(Deserialize)]
struct RawDeckState {
    cards_left: u32,
    agendas_left: u32,
}

impl TryFrom<RawDeckState> for DeckState {
    type Error = BreachError;

    fn try_from(raw: RawDeckState) -> Result<Self, Self::Error> {
        DeckState::new(raw.cards_left, raw.agendas_left)
    }
}

impl DeckState {
    /// Creates a deck, rejecting more agendas than cards.
    pub fn new(cards_left: u32, agendas_left: u32) -> Result<Self, BreachError> {
        if agendas_left > cards_left {
            return Err(BreachError::InvalidState(
                ErrorInfo::new(
                    "agendas-exceed-cards",
                    "there can't be more agendas than cards left in the deck",
                )
                .with_context("cards_left", cards_left)
                .with_context("agendas_left", agendas_left),
            ));
        }
        Ok(Self {
            cards_left,
            agendas_left,
        })
    }

    /// Creates a deck from an agenda density of "1 in `density`".
    ///
    /// The agenda count is `floor(cards_left / density)`.
    pub fn from_density(cards_left: u32, density: u32) -> Result<Self, BreachError> {
        if density == 0 {
            return Err(BreachError::InvalidState(
                ErrorInfo::new("zero-density", "agenda density must be at least 1")
                    .with_context("cards_left", cards_left)
                    .with_hint("density is the X in '1 in X'"),
            ));
        }
        Self::new(cards_left, cards_left / density)
    }

    /// Cards remaining in the deck.
    pub fn cards_left(&self) -> u32 {
        self.cards_left
    }

    /// Agendas remaining in the deck.
    pub fn agendas_left(&self) -> u32 {
        self.agendas_left
    }

    /// Returns true when no agenda can be found any more.
    pub fn is_dry(&self) -> bool {
        self.agendas_left == 0
    }

    /// Average number of cards per agenda, `None` when the deck is dry.
    pub fn density(&self) -> Option<f64> {
        if self.agendas_left == 0 {
            None
        } else {
            Some(self.cards_left as f64 / self.agendas_left as f64)
        }
    }

    /// Removes `agendas` stolen agendas from the deck, returning the new state.
    pub fn steal(&self, agendas: u32) -> Result<Self, BreachError> {
        if agendas > self.agendas_left {
            return Err(BreachError::InvalidState(
                ErrorInfo::new("steal-overdraw", "cannot steal more agendas than remain")
                    .with_context("agendas_left", self.agendas_left)
                    .with_context("requested", agendas),
            ));
        }
        Self::new(self.cards_left - agendas, self.agendas_left - agendas)
    }
}

impl fmt::Display for DeckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deck with {} cards and {} agendas",
            self.cards_left, self.agendas_left
        )
    }
}
