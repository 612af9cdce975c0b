#![deny(missing_docs)]
#![doc = "Deck state, hypergeometric primitives and shared types for the breach odds engine."]

pub mod deck;
pub mod errors;
pub mod hypergeometric;
pub mod provenance;
pub mod rng;
pub mod serde;

pub use deck::DeckState;
pub use errors::{BreachError, ErrorInfo};
pub use hypergeometric::{hit_probability, split_probability, ExactHypergeometric, Hypergeometric};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, TrialRng};
pub use self::serde::{from_json_slice, stable_hash_string, to_canonical_json_bytes};
