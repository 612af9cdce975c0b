//! The concrete accesses: a single-card breach, Khusyuk and Deep Dive.

use breach_core::{
    hit_probability, BreachError, DeckState, ExactHypergeometric, Hypergeometric, TrialRng,
};
use serde::{Deserialize, Serialize};

use crate::access::{capped_outcomes, is_idle, Access};
use crate::outcome::{Draw, Outcome};

/// Cards a Deep Dive looks at.
pub const DEEP_DIVE_WIDTH: u32 = 8;

/// Most agendas a single Deep Dive can steal.
pub const DEEP_DIVE_MAX_STEALS: u32 = 2;

/// Default number of agendas a Khusyuk access is modelled to steal.
pub const KHUSYUK_DEFAULT_CAP: u32 = 1;

/// Plain R&D access of the top card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breach;

impl Access for Breach {
    fn name(&self) -> &'static str {
        "breach"
    }

    fn access(
        &self,
        deck: &DeckState,
        clicks: u32,
        _hypergeometric: &dyn Hypergeometric,
    ) -> Result<Vec<Outcome>, BreachError> {
        if is_idle(deck, clicks) {
            return Ok(vec![Outcome::idle()]);
        }
        let hit = deck.agendas_left() as f64 / deck.cards_left() as f64;
        Ok(vec![Outcome::new(0, 1.0 - hit), Outcome::new(1, hit)])
    }

    fn sample(
        &self,
        deck: &DeckState,
        clicks: u32,
        rng: &mut TrialRng,
    ) -> Result<Draw, BreachError> {
        if is_idle(deck, clicks) {
            return Ok(Draw::idle());
        }
        Ok(Draw {
            agendas_stolen: rng.draw_agendas(deck, 1),
            clicks_spent: 1,
        })
    }
}

/// Khusyuk: look at `width` cards, steal up to `cap` of them (one by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Khusyuk {
    width: u32,
    cap: u32,
}

impl Khusyuk {
    /// Khusyuk seeing `width` cards with the default cap of one steal.
    pub fn new(width: u32) -> Self {
        Self::with_cap(width, KHUSYUK_DEFAULT_CAP)
    }

    /// Khusyuk seeing `width` cards and able to steal up to `cap` agendas.
    pub fn with_cap(width: u32, cap: u32) -> Self {
        Self { width, cap }
    }

    /// Cards seen.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Most agendas stolen.
    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Probability that the cards seen include at least one agenda.
    pub fn hit_probability(&self, deck: &DeckState) -> Result<f64, BreachError> {
        let width = self.width.min(deck.cards_left());
        hit_probability(
            &ExactHypergeometric,
            deck.agendas_left(),
            width,
            deck.cards_left(),
        )
    }

    fn bound(&self, deck: &DeckState) -> u32 {
        deck.agendas_left().min(self.cap)
    }
}

impl Access for Khusyuk {
    fn name(&self) -> &'static str {
        "khusyuk"
    }

    fn access(
        &self,
        deck: &DeckState,
        clicks: u32,
        hypergeometric: &dyn Hypergeometric,
    ) -> Result<Vec<Outcome>, BreachError> {
        if is_idle(deck, clicks) {
            return Ok(vec![Outcome::idle()]);
        }
        capped_outcomes(deck, self.width, self.bound(deck), |_| 1, hypergeometric)
    }

    fn sample(
        &self,
        deck: &DeckState,
        clicks: u32,
        rng: &mut TrialRng,
    ) -> Result<Draw, BreachError> {
        if is_idle(deck, clicks) {
            return Ok(Draw::idle());
        }
        let seen = rng.draw_agendas(deck, self.width);
        Ok(Draw {
            agendas_stolen: seen.min(self.bound(deck)),
            clicks_spent: 1,
        })
    }
}

/// Deep Dive: look at eight cards, steal up to two agendas, one click per steal.
///
/// Stealing nothing or one agenda costs one click; stealing two costs two,
/// so the number of steals is also capped by the clicks left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeepDive;

impl DeepDive {
    /// Probability of seeing at least one agenda, or at least two with `two_hits`.
    pub fn hit_probability(deck: &DeckState, two_hits: bool) -> Result<f64, BreachError> {
        let cards = deck.cards_left();
        let width = DEEP_DIVE_WIDTH.min(cards);
        let hits = if two_hits { 2 } else { 1 };
        let provider = ExactHypergeometric;
        provider.tail_probability(hits, deck.agendas_left(), width, cards)
    }

    fn bound(deck: &DeckState, clicks: u32) -> u32 {
        deck.agendas_left().min(clicks).min(DEEP_DIVE_MAX_STEALS)
    }

    fn cost(stolen: u32) -> u32 {
        stolen.max(1)
    }
}

impl Access for DeepDive {
    fn name(&self) -> &'static str {
        "deep-dive"
    }

    fn access(
        &self,
        deck: &DeckState,
        clicks: u32,
        hypergeometric: &dyn Hypergeometric,
    ) -> Result<Vec<Outcome>, BreachError> {
        if is_idle(deck, clicks) {
            return Ok(vec![Outcome::idle()]);
        }
        capped_outcomes(
            deck,
            DEEP_DIVE_WIDTH,
            Self::bound(deck, clicks),
            Self::cost,
            hypergeometric,
        )
    }

    fn sample(
        &self,
        deck: &DeckState,
        clicks: u32,
        rng: &mut TrialRng,
    ) -> Result<Draw, BreachError> {
        if is_idle(deck, clicks) {
            return Ok(Draw::idle());
        }
        let stolen = rng
            .draw_agendas(deck, DEEP_DIVE_WIDTH)
            .min(Self::bound(deck, clicks));
        Ok(Draw {
            agendas_stolen: stolen,
            clicks_spent: Self::cost(stolen),
        })
    }
}

/// Closed set of accesses that scenarios can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AccessOp {
    /// Single card access, see [`Breach`].
    Breach,
    /// Wide access, see [`Khusyuk`].
    Khusyuk {
        /// Cards seen.
        width: u32,
        /// Most agendas stolen.
        #[serde(default = "default_khusyuk_cap")]
        cap: u32,
    },
    /// Eight card access, see [`DeepDive`].
    DeepDive,
}

fn default_khusyuk_cap() -> u32 {
    KHUSYUK_DEFAULT_CAP
}

impl AccessOp {
    /// Khusyuk with the default cap.
    pub fn khusyuk(width: u32) -> Self {
        AccessOp::Khusyuk {
            width,
            cap: KHUSYUK_DEFAULT_CAP,
        }
    }
}

impl Access for AccessOp {
    fn name(&self) -> &'static str {
        match self {
            AccessOp::Breach => Breach.name(),
            AccessOp::Khusyuk { width, cap } => Khusyuk::with_cap(*width, *cap).name(),
            AccessOp::DeepDive => DeepDive.name(),
        }
    }

    fn access(
        &self,
        deck: &DeckState,
        clicks: u32,
        hypergeometric: &dyn Hypergeometric,
    ) -> Result<Vec<Outcome>, BreachError> {
        match *self {
            AccessOp::Breach => Breach.access(deck, clicks, hypergeometric),
            AccessOp::Khusyuk { width, cap } => {
                let khusyuk = Khusyuk::with_cap(width, cap);
                khusyuk.access(deck, clicks, hypergeometric)
            }
            AccessOp::DeepDive => DeepDive.access(deck, clicks, hypergeometric),
        }
    }

    fn sample(
        &self,
        deck: &DeckState,
        clicks: u32,
        rng: &mut TrialRng,
    ) -> Result<Draw, BreachError> {
        match *self {
            AccessOp::Breach => Breach.sample(deck, clicks, rng),
            AccessOp::Khusyuk { width, cap } => {
                Khusyuk::with_cap(width, cap).sample(deck, clicks, rng)
            }
            AccessOp::DeepDive => DeepDive.sample(deck, clicks, rng),
        }
    }
}

impl From<Khusyuk> for AccessOp {
    fn from(probe: Khusyuk) -> Self {
        AccessOp::Khusyuk {
            width: probe.width,
            cap: probe.cap,
        }
    }
}
