//! Seeded RNG used by the Monte Carlo cross-check.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

use crate::deck::DeckState;

/// Deterministic RNG handle for one simulated trial.
///
/// Trials never share a stream. Each one is seeded from
/// `derive_substream_seed(master_seed, trial_index)`, which hashes the pair
/// with SipHash-1-3 under fixed zero keys so runs replay across platforms.
#[derive(Debug, Clone)]
pub struct TrialRng {
    rng: StdRng,
}

impl TrialRng {
    /// Creates a handle from a raw seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates the handle for trial `trial` of a run seeded with `master_seed`.
    pub fn for_trial(master_seed: u64, trial: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, trial))
    }

    /// Looks at `width` cards drawn without replacement and counts the agendas seen.
    ///
    /// The width is clamped to the cards left in the deck.
    pub fn draw_agendas(&mut self, deck: &DeckState, width: u32) -> u32 {
        let mut cards = deck.cards_left();
        let mut agendas = deck.agendas_left();
        let mut seen = 0;
        for _ in 0..width.min(cards) {
            if agendas > 0 && self.rng.gen_range(0..cards) < agendas {
                agendas -= 1;
                seen += 1;
            }
            cards -= 1;
        }
        seen
    }
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
