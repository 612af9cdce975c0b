//! YAML scenario schema, validation and loading.

use std::fs;
use std::path::Path;

use breach_core::{stable_hash_string, BreachError, DeckState, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::probes::AccessOp;

/// Deck description as written in a scenario file.
///
/// Exactly one of `agendas` and `density` must be given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    /// Cards left in R&D.
    pub cards: u32,
    /// Agendas left in R&D.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agendas: Option<u32>,
    /// Agenda density, the X in "1 in X".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<u32>,
}

impl DeckSpec {
    /// Deck with an explicit agenda count.
    pub fn with_agendas(cards: u32, agendas: u32) -> Self {
        Self {
            cards,
            agendas: Some(agendas),
            density: None,
        }
    }

    /// Deck whose agenda count follows from a "1 in X" density.
    pub fn with_density(cards: u32, density: u32) -> Self {
        Self {
            cards,
            agendas: None,
            density: Some(density),
        }
    }

    /// Builds the validated deck state.
    pub fn deck(&self) -> Result<DeckState, BreachError> {
        match (self.agendas, self.density) {
            (Some(agendas), None) => DeckState::new(self.cards, agendas),
            (None, Some(density)) => DeckState::from_density(self.cards, density),
            (Some(_), Some(_)) => Err(BreachError::Config(
                ErrorInfo::new("deck-ambiguous", "deck sets both agendas and density")
                    .with_hint("keep either `agendas` or `density`"),
            )),
            (None, None) => Err(BreachError::Config(
                ErrorInfo::new("deck-incomplete", "deck needs `agendas` or `density`")
                    .with_context("cards", self.cards),
            )),
        }
    }
}

/// Reporting options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSpec {
    /// Totals for which "at least N agendas" is reported.
    #[serde(default = "ReportSpec::default_thresholds")]
    pub thresholds: Vec<u32>,
}

impl ReportSpec {
    fn default_thresholds() -> Vec<u32> {
        vec![2, 3]
    }
}

impl Default for ReportSpec {
    fn default() -> Self {
        Self {
            thresholds: Self::default_thresholds(),
        }
    }
}

/// A run of accesses against one deck with a click budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Starting deck.
    pub deck: DeckSpec,
    /// Clicks available for the whole sequence.
    #[serde(default = "default_clicks")]
    pub clicks: u32,
    /// Accesses applied in order.
    #[serde(default = "default_operations")]
    pub operations: Vec<AccessOp>,
    /// Reporting options.
    #[serde(default)]
    pub report: ReportSpec,
}

/// Khusyuk width used when a scenario does not list its operations.
pub const DEFAULT_KHUSYUK_WIDTH: u32 = 4;

/// Clicks of a turn spent on the super round.
pub const SUPER_ROUND_CLICKS: u32 = 4;

fn default_clicks() -> u32 {
    SUPER_ROUND_CLICKS
}

fn default_operations() -> Vec<AccessOp> {
    super_round_operations(DEFAULT_KHUSYUK_WIDTH)
}

fn super_round_operations(khusyuk: u32) -> Vec<AccessOp> {
    vec![
        AccessOp::khusyuk(khusyuk),
        AccessOp::DeepDive,
        AccessOp::DeepDive,
    ]
}

impl Scenario {
    /// A Khusyuk for `khusyuk` cards, then two Deep Dives, with four clicks.
    pub fn super_round(deck: DeckSpec, khusyuk: u32) -> Self {
        Self {
            deck,
            clicks: SUPER_ROUND_CLICKS,
            operations: super_round_operations(khusyuk),
            report: ReportSpec::default(),
        }
    }

    /// Replaces the click budget.
    pub fn with_clicks(mut self, clicks: u32) -> Self {
        self.clicks = clicks;
        self
    }

    /// Validated starting deck.
    pub fn deck(&self) -> Result<DeckState, BreachError> {
        self.deck.deck()
    }

    /// Checks the deck and every operation's parameters.
    pub fn validate(&self) -> Result<(), BreachError> {
        self.deck()?;
        for (step, op) in self.operations.iter().enumerate() {
            if let AccessOp::Khusyuk { width, cap } = op {
                if *width == 0 || *cap == 0 {
                    return Err(BreachError::Config(
                        ErrorInfo::new("khusyuk-params", "khusyuk width and cap must be positive")
                            .with_context("step", step)
                            .with_context("width", width)
                            .with_context("cap", cap),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Stable hash of the scenario contents.
    pub fn scenario_hash(&self) -> Result<String, BreachError> {
        stable_hash_string(self)
    }

    /// Parses and validates a YAML scenario.
    pub fn from_yaml_str(text: &str) -> Result<Self, BreachError> {
        let scenario: Scenario = serde_yaml::from_str(text)
            .map_err(|err| BreachError::Serde(ErrorInfo::new("yaml-read", err.to_string())))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Renders the scenario as YAML.
    pub fn to_yaml_string(&self) -> Result<String, BreachError> {
        serde_yaml::to_string(self)
            .map_err(|err| BreachError::Serde(ErrorInfo::new("yaml-write", err.to_string())))
    }
}

/// Loads and validates a scenario file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, BreachError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| {
        BreachError::Config(
            ErrorInfo::new("scenario-read", err.to_string())
                .with_context("path", path.display()),
        )
    })?;
    Scenario::from_yaml_str(&text)
}
